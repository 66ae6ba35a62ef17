#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::SnapshotError;
    use crate::tools::scrape::client::{error_message, scrape_endpoint};
    use crate::tools::scrape::*;
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        Config {
            api_key: "fc-test".into(),
            api_url: Url::parse(&server.uri()).unwrap(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_format_wire_names() {
        let value = serde_json::to_value(Format::ALL).unwrap();
        assert_eq!(
            value,
            json!(["markdown", "html", "rawHtml", "links", "images"])
        );
        assert_eq!("raw_html".parse::<Format>(), Ok(Format::RawHtml));
        assert_eq!("rawHtml".parse::<Format>(), Ok(Format::RawHtml));
        assert_eq!("Markdown".parse::<Format>(), Ok(Format::Markdown));
        assert!("screenshot".parse::<Format>().is_err());
    }

    #[test]
    fn test_from_value_prefers_typed_document() {
        let result = ScrapeResult::from_value(json!({
            "markdown": "# Title",
            "rawHtml": "<html></html>",
            "links": ["https://a.example"],
            "metadata": {"title": "Title", "sourceURL": "https://a.example", "statusCode": 200}
        }));
        let ScrapeResult::Document(doc) = &result else {
            panic!("expected typed document, got {result:?}");
        };
        assert_eq!(doc.raw_html.as_deref(), Some("<html></html>"));
        let meta = doc.metadata.as_ref().unwrap();
        assert_eq!(meta.source_url.as_deref(), Some("https://a.example"));
        assert_eq!(meta.status_code, Some(200));
        assert_eq!(result.links().unwrap().len(), 1);
    }

    #[test]
    fn test_from_value_accepts_snake_case_raw_html() {
        let result = ScrapeResult::from_value(json!({"raw_html": "<p>x</p>"}));
        assert_eq!(result.raw_html(), Some("<p>x</p>"));
    }

    #[test]
    fn test_from_value_falls_back_to_mapping() {
        // Mixed list entries and a scalar metadata do not fit the typed shape.
        let result = ScrapeResult::from_value(json!({
            "markdown": "md",
            "links": ["https://a.example", 42, null],
            "metadata": "not a mapping"
        }));
        assert!(matches!(result, ScrapeResult::Mapping(_)));
        assert_eq!(result.markdown(), Some("md"));
        assert_eq!(
            result.links().unwrap().as_ref(),
            &["https://a.example".to_string()]
        );
        assert!(matches!(result.metadata(), Some(RawMetadata::Other(_))));
        assert_eq!(result.images(), None);
    }

    #[test]
    fn test_from_value_non_object_is_empty_mapping() {
        let result = ScrapeResult::from_value(json!(["not", "an", "object"]));
        assert_eq!(result, ScrapeResult::Mapping(Default::default()));
        assert_eq!(result.markdown(), None);
        assert!(result.metadata().is_none());
    }

    #[test]
    fn test_mapping_ignores_non_string_text_fields() {
        let result = ScrapeResult::from_value(json!({"html": 12, "metadata": null}));
        assert_eq!(result.html(), None);
        assert!(result.metadata().is_none());
    }

    #[test]
    fn test_scrape_endpoint_keeps_base_path() {
        let base = Url::parse("https://api.firecrawl.dev").unwrap();
        assert_eq!(
            scrape_endpoint(&base).unwrap().as_str(),
            "https://api.firecrawl.dev/v2/scrape"
        );
        let proxied = Url::parse("http://localhost:8080/firecrawl").unwrap();
        assert_eq!(
            scrape_endpoint(&proxied).unwrap().as_str(),
            "http://localhost:8080/firecrawl/v2/scrape"
        );
    }

    #[test]
    fn test_error_message_prefers_api_error_field() {
        assert_eq!(
            error_message(r#"{"success":false,"error":"Unauthorized: Invalid token"}"#, StatusCode::UNAUTHORIZED),
            "Unauthorized: Invalid token"
        );
        assert_eq!(error_message("", StatusCode::BAD_GATEWAY), "Bad Gateway");
        assert_eq!(error_message("  upstream down  ", StatusCode::BAD_GATEWAY), "upstream down");
    }

    #[tokio::test]
    async fn test_client_scrape_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/scrape"))
            .and(header("authorization", "Bearer fc-test"))
            .and(body_json(json!({
                "url": "https://example.com",
                "formats": ["markdown", "html", "rawHtml", "links", "images"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "markdown": "# Example",
                    "html": "<h1>Example</h1>",
                    "links": ["https://www.iana.org/domains/example"],
                    "metadata": {"title": "Example Domain", "creditsUsed": 1}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = FirecrawlClient::new(&config_for(&server)).unwrap();
        let result = client.scrape("https://example.com", &Format::ALL).await.unwrap();

        assert_eq!(result.markdown(), Some("# Example"));
        assert_eq!(result.html(), Some("<h1>Example</h1>"));
        assert_eq!(result.raw_html(), None);
        assert!(matches!(result.metadata(), Some(RawMetadata::Typed(_))));
    }

    #[tokio::test]
    async fn test_client_maps_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/scrape"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "error": "Unauthorized: Invalid token"
            })))
            .mount(&server)
            .await;

        let client = FirecrawlClient::new(&config_for(&server)).unwrap();
        let err = client.scrape("https://example.com", &Format::ALL).await.unwrap_err();
        match err {
            SnapshotError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Unauthorized: Invalid token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_client_unsuccessful_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/scrape"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "error": "Failed to scrape URL"
            })))
            .mount(&server)
            .await;

        let client = FirecrawlClient::new(&config_for(&server)).unwrap();
        let err = client.scrape("https://example.com", &Format::ALL).await.unwrap_err();
        assert!(matches!(err, SnapshotError::Api { status: 200, .. }));
        assert!(err.to_string().contains("Failed to scrape URL"));
    }

    #[tokio::test]
    async fn test_client_missing_data_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/scrape"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let client = FirecrawlClient::new(&config_for(&server)).unwrap();
        let err = client.scrape("https://example.com", &[Format::Markdown]).await.unwrap_err();
        assert!(err.to_string().contains("no data"));
    }

    #[tokio::test]
    async fn test_client_invalid_json_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/scrape"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let client = FirecrawlClient::new(&config_for(&server)).unwrap();
        let err = client.scrape("https://example.com", &Format::ALL).await.unwrap_err();
        assert!(matches!(err, SnapshotError::Http(_)));
    }

    #[test]
    fn test_document_round_trips_through_value() {
        let doc = Document {
            markdown: Some("m".into()),
            links: Some(vec![]),
            ..Default::default()
        };
        let value: Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["rawHtml"], Value::Null);
        assert_eq!(ScrapeResult::from_value(value), ScrapeResult::Document(doc));
    }
}
