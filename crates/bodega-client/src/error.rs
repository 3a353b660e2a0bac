//! # Client Error Types
//!
//! Everything a backend call can fail with, split along the lines the UI
//! cares about:
//!
//! - `Auth` - the session is dead; the caller must return to the login
//!   screen. The client has already cleared its held token.
//! - `Api` - the backend rejected the request; carries the server-provided
//!   message (or a generic fallback) for the user-visible notification.
//! - `Http` - the request never produced a response (DNS, refused
//!   connection, timeout). Caller state is unchanged.
//! - `Config` - the client could not even be constructed.
//!
//! None of these are fatal: every one is recoverable by user retry.

use thiserror::Error;

/// Message shown when the backend returns no usable error body.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Errors surfaced by backend calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered 401. The held session has been cleared.
    #[error("Your session has expired. Please login again.")]
    Auth,

    /// The backend answered with a non-auth error status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request failed at the transport level.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// True when the caller should navigate to the login screen.
    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Auth)
    }
}

/// Convenience type alias for Results with ClientError.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_shows_server_message() {
        let err = ClientError::Api {
            status: 422,
            message: "Quantity exceeds available stock".to_string(),
        };
        assert_eq!(err.to_string(), "Quantity exceeds available stock");
        assert!(!err.is_auth());
    }

    #[test]
    fn test_auth_error_message() {
        let err = ClientError::Auth;
        assert!(err.is_auth());
        assert_eq!(
            err.to_string(),
            "Your session has expired. Please login again."
        );
    }
}
