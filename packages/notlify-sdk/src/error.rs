use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Backend rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("Notification not found: {0}")]
    NotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SdkError {
    /// Human-readable detail supplied by the backend, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SdkError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
