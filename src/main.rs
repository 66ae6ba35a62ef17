fn main() {
    firecrawl_snapshot::cli::run();
}
