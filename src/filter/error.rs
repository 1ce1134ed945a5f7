use thiserror::Error;

/// Rejections raised while building or updating a criteria snapshot.
/// Evaluating filters never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    #[error("filter '{name}' expects a {expected} value")]
    KindMismatch { name: String, expected: &'static str },

    #[error("invalid value for '{name}': {raw}")]
    InvalidValue { name: String, raw: String },
}
