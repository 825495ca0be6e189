//! Error types for remote calls and dashboard operations.

use thiserror::Error;

use crate::domain::FoodId;

/// Result type for remote store calls
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// A remote call failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Remote store answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Response decode error: {0}")]
    Decode(String),

    #[error("Food plate {0} not found")]
    NotFound(FoodId),
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

/// Dashboard-level errors, returned to the presentation layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("No food plate is being edited")]
    NoEditTarget,

    #[error("Food plate {0} is not in the list")]
    UnknownFood(FoodId),

    #[error("Dashboard was unmounted before the call completed")]
    Detached,
}
