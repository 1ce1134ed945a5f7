// src/api/load.rs

use crate::api::ApiError;
use tracing::debug;

/// Progress of one fetch from the backend. Filtering only ever happens on
/// `Ready` data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    /// Begin (or restart) a fetch. Previous data or errors are dropped.
    pub fn start(self) -> Self {
        LoadState::Loading
    }

    /// Settle a fetch. A result arriving when no fetch is in flight is stale
    /// and ignored.
    pub fn finish(self, result: Result<T, ApiError>) -> Self {
        match self {
            LoadState::Loading => match result {
                Ok(data) => LoadState::Ready(data),
                Err(e) => LoadState::Failed(e),
            },
            other => {
                debug!("Ignoring fetch result outside of a load");
                other
            }
        }
    }
}
