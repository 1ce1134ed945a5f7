use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API URL: {0}")]
    Url(String),

    #[error("Not authorized by the backend")]
    Unauthorized,

    #[error("Backend responded {0}")]
    Status(u16),

    #[error("Unexpected response shape: {0}")]
    Decode(String),
}
