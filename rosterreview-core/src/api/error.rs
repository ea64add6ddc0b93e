/// Errors raised while talking to the player data API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            status_text: status_text.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
