//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ArchiveError`] - Failures surfaced by archive browsing and search
//! - [`StorageError`] - localStorage access failures

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
    /// Request was cancelled through its cancellation token
    #[error("Request aborted")]
    Aborted,
}

/// Errors from listing, reading, and searching the archive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
    #[error(transparent)]
    Fetch(FetchError),
    /// Superseded by a newer search. Expected, never shown to the user.
    #[error("Search aborted")]
    Aborted,
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ArchiveError {
    #[inline]
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

impl From<FetchError> for ArchiveError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Aborted => Self::Aborted,
            other => Self::Fetch(other),
        }
    }
}

/// localStorage errors for persisted preferences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,
    #[error("failed to save to localStorage")]
    SaveFailed,
}
