//! Pure classification of [`StoreError`] variants.
//!
//! Callers decide retry or ignore policy per [`ErrorKind`] instead of matching
//! on every variant.

use super::StoreError;

/// Broad category of a store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Credential, region or other client setup problem.
    Configuration,
    /// The request never got a response (dispatch failure, timeout).
    Transport,
    /// The service answered with an error.
    Service,
    /// A conditional write guard rejected the request.
    ConditionalGuard,
    /// A stored record could not be decoded.
    Data,
}

/// Maps a [`StoreError`] to its [`ErrorKind`].
///
/// - `Configuration` -> `Configuration`
/// - `ConnectionFailed` -> `Transport`
/// - `QueryFailed` -> `Service`
/// - `AlreadyExists` / `NotFound` -> `ConditionalGuard`
/// - `InvalidData` -> `Data`
///
/// # Examples
///
/// ```
/// use itemstore_core::storage::{error_kind, ErrorKind, StoreError};
///
/// let error = StoreError::ConnectionFailed("dns lookup failed".to_string());
/// assert_eq!(error_kind(&error), ErrorKind::Transport);
/// ```
pub fn error_kind(error: &StoreError) -> ErrorKind {
    match error {
        StoreError::Configuration(_) => ErrorKind::Configuration,
        StoreError::ConnectionFailed(_) => ErrorKind::Transport,
        StoreError::QueryFailed(_) => ErrorKind::Service,
        StoreError::AlreadyExists { .. } | StoreError::NotFound { .. } => {
            ErrorKind::ConditionalGuard
        }
        StoreError::InvalidData(_) => ErrorKind::Data,
    }
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        error_kind(self)
    }
}
