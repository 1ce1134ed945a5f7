mod auth;
mod client;
mod error;
mod load;

pub use auth::{AuthContext, CurrentUser, SessionAuth};
pub use client::{ApiClient, RecordSource, Resource};
pub use error::ApiError;
pub use load::LoadState;
