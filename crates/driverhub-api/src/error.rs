//! API error types.

use driverhub_protocols::error_codes::{self, INVALID_ARGUMENT, UNKNOWN_COMMAND};
use driverhub_protocols::DriverError;
use thiserror::Error;

/// Failures turning an HTTP request into a command.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No route matches the method and path.
    #[error("No command mapped to {method} {path}")]
    NoRoute { method: String, path: String },

    /// A path segment is not valid percent-encoded UTF-8.
    #[error("Invalid path segment: {0}")]
    InvalidPath(String),

    /// The body is not a JSON object.
    #[error("Invalid request body: {message}")]
    InvalidBody {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The body could not be read, usually because it exceeds the limit.
    #[error("Unable to read request body (limit {limit} bytes): {message}")]
    UnreadableBody { limit: usize, message: String },
}

impl DecodeError {
    pub fn no_route(method: impl ToString, path: impl Into<String>) -> Self {
        Self::NoRoute {
            method: method.to_string(),
            path: path.into(),
        }
    }
}

/// Failures of the dispatch pipeline, each mapped to a protocol status.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] DecodeError),

    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl DispatchError {
    /// The protocol status reported for this failure.
    pub fn status(&self) -> i32 {
        match self {
            Self::MalformedRequest(_) => INVALID_ARGUMENT,
            Self::UnsupportedCommand(_) => UNKNOWN_COMMAND,
            Self::Driver(err) => error_codes::to_status(err),
        }
    }
}

/// Server startup and runtime failures.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use driverhub_protocols::error_codes::{NO_SUCH_SESSION, UNHANDLED_ERROR};

    #[test]
    fn test_malformed_request_status() {
        let err = DispatchError::from(DecodeError::no_route("GET", "/nowhere"));
        assert_eq!(err.status(), INVALID_ARGUMENT);
        assert!(err.to_string().contains("GET /nowhere"));
    }

    #[test]
    fn test_unsupported_command_status() {
        let err = DispatchError::UnsupportedCommand("getTitle".to_string());
        assert_eq!(err.status(), UNKNOWN_COMMAND);
    }

    #[test]
    fn test_driver_error_status() {
        let err = DispatchError::from(DriverError::no_such_session("abc"));
        assert_eq!(err.status(), NO_SUCH_SESSION);

        let err = DispatchError::from(DriverError::other("boom"));
        assert_eq!(err.status(), UNHANDLED_ERROR);
    }

    #[test]
    fn test_driver_error_is_transparent() {
        let err = DispatchError::from(DriverError::invalid_argument("bad url"));
        assert_eq!(err.to_string(), DriverError::invalid_argument("bad url").to_string());
    }
}
