// errors.rs
use crate::api::ApiError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (backend API).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Backend Error: {0}")]
    Upstream(#[from] ApiError),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::Unauthorized(_) | ServerError::Upstream(ApiError::Unauthorized) => 401,
            ServerError::Upstream(_) => 502,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}
