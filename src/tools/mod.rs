// Shared types
pub mod types;

// Modular tools
pub mod normalize;
pub mod report;
pub mod scrape;
pub mod snapshot;
