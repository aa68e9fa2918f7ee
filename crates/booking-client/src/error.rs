//! Error types for backend communication and grid reconciliation.

use chrono::NaiveDate;
use grid_engine::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a usable response (DNS, connect, TLS,
    /// timeout, ...). Retryable; the displayed grid is left intact.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend returned http {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body did not match the wire contract.
    #[error("malformed backend payload: {0}")]
    Decode(String),

    /// A fetched week payload violated the grid invariants.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A week response arrived for a week that is no longer displayed and
    /// was discarded.
    #[error("discarded response for week of {received}; week of {requested} is displayed")]
    StaleWeek {
        requested: NaiveDate,
        received: NaiveDate,
    },

    /// Slot computation was attempted before the tutor's session settings
    /// were loaded. Settings are never guessed.
    #[error("session settings unavailable; load them before offering slots")]
    SettingsUnavailable,

    /// The backend would not delete the booking. No finer taxonomy is
    /// promised for deletes.
    #[error("the booking could not be deleted")]
    DeleteFailed,
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Convenience alias used throughout booking-client.
pub type Result<T> = std::result::Result<T, ClientError>;
