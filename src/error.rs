use thiserror::Error;

pub type Result<T> = std::result::Result<T, SnapshotError>;

#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Missing or malformed settings, raised before any network use.
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// Transport-level failure talking to the scrape API.
    #[error("request failed: {0}")]
    Http(String),
    /// The scrape API answered, but not with a usable document.
    #[error("scrape api error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SnapshotError {
    pub fn config(msg: impl Into<String>) -> Self {
        SnapshotError::Config(msg.into())
    }

    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        SnapshotError::Api {
            status,
            message: msg.into(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for SnapshotError {
    fn from(e: reqwest::Error) -> Self {
        SnapshotError::Http(e.to_string())
    }
}
impl From<url::ParseError> for SnapshotError {
    fn from(e: url::ParseError) -> Self {
        SnapshotError::InvalidUrl(e.to_string())
    }
}
