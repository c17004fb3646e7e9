//! Failures raised by command handlers.

use std::fmt;

use thiserror::Error;

/// Recognized protocol-level failure kinds.
///
/// Each kind corresponds to one exception class of the remote WebDriver
/// vocabulary and resolves to exactly one numeric status through
/// [`crate::error_codes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ScriptTimeout,
    ElementClickIntercepted,
    ElementNotSelectable,
    ElementNotInteractable,
    ElementNotVisible,
    ImeActivationFailed,
    ImeNotAvailable,
    InvalidArgument,
    InvalidCookieDomain,
    InvalidCoordinates,
    InvalidElementState,
    InvalidSelector,
    Javascript,
    MoveTargetOutOfBounds,
    NoAlertPresent,
    NoSuchCookie,
    NoSuchElement,
    NoSuchFrame,
    NoSuchSession,
    NoSuchWindow,
    SessionNotCreated,
    StaleElementReference,
    Timeout,
    UnableToCaptureScreen,
    UnableToSetCookie,
    UnhandledAlert,
    UnsupportedCommand,
    Unknown,
}

impl ErrorKind {
    /// Every recognized kind, in table order.
    pub const ALL: [ErrorKind; 28] = [
        Self::ScriptTimeout,
        Self::ElementClickIntercepted,
        Self::ElementNotSelectable,
        Self::ElementNotInteractable,
        Self::ElementNotVisible,
        Self::ImeActivationFailed,
        Self::ImeNotAvailable,
        Self::InvalidArgument,
        Self::InvalidCookieDomain,
        Self::InvalidCoordinates,
        Self::InvalidElementState,
        Self::InvalidSelector,
        Self::Javascript,
        Self::MoveTargetOutOfBounds,
        Self::NoAlertPresent,
        Self::NoSuchCookie,
        Self::NoSuchElement,
        Self::NoSuchFrame,
        Self::NoSuchSession,
        Self::NoSuchWindow,
        Self::SessionNotCreated,
        Self::StaleElementReference,
        Self::Timeout,
        Self::UnableToCaptureScreen,
        Self::UnableToSetCookie,
        Self::UnhandledAlert,
        Self::UnsupportedCommand,
        Self::Unknown,
    ];

    /// The W3C error string a client sees for this kind.
    pub fn canonical_state(&self) -> &'static str {
        match self {
            Self::ScriptTimeout => "script timeout",
            Self::ElementClickIntercepted => "element click intercepted",
            Self::ElementNotSelectable => "element not selectable",
            Self::ElementNotInteractable => "element not interactable",
            Self::ElementNotVisible => "element not visible",
            Self::ImeActivationFailed | Self::ImeNotAvailable => "unsupported operation",
            Self::InvalidArgument => "invalid argument",
            Self::InvalidCookieDomain => "invalid cookie domain",
            Self::InvalidCoordinates => "invalid element coordinates",
            Self::InvalidElementState => "invalid element state",
            Self::InvalidSelector => "invalid selector",
            Self::Javascript => "javascript error",
            Self::MoveTargetOutOfBounds => "move target out of bounds",
            Self::NoAlertPresent => "no such alert",
            Self::NoSuchCookie => "no such cookie",
            Self::NoSuchElement => "no such element",
            Self::NoSuchFrame => "no such frame",
            Self::NoSuchSession => "invalid session id",
            Self::NoSuchWindow => "no such window",
            Self::SessionNotCreated => "session not created",
            Self::StaleElementReference => "stale element reference",
            Self::Timeout => "timeout",
            Self::UnableToCaptureScreen => "unable to capture screen",
            Self::UnableToSetCookie => "unable to set cookie",
            Self::UnhandledAlert => "unexpected alert open",
            Self::UnsupportedCommand => "unknown command",
            Self::Unknown => "unknown error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_state())
    }
}

/// A failure raised while executing a command.
///
/// `Protocol` carries a recognized kind. `Wrapped` is a generic failure that
/// may wrap the failure that caused it; the translator looks through exactly
/// one such layer.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{message}")]
    Protocol { kind: ErrorKind, message: String },

    #[error("{message}")]
    Wrapped {
        message: String,
        #[source]
        cause: Option<Box<DriverError>>,
    },
}

impl DriverError {
    /// Creates a failure of a recognized kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Protocol {
            kind,
            message: message.into(),
        }
    }

    /// Creates an unrecognized failure with no cause.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Wrapped {
            message: message.into(),
            cause: None,
        }
    }

    /// Wraps `cause` in a generic failure.
    pub fn wrap(message: impl Into<String>, cause: DriverError) -> Self {
        Self::Wrapped {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    pub fn no_such_session(session_id: &str) -> Self {
        Self::new(
            ErrorKind::NoSuchSession,
            format!("Session ID does not exist or is no longer active: {session_id}"),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn session_not_created(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SessionNotCreated, message)
    }

    /// The recognized kind of this failure, if it has one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Protocol { kind, .. } => Some(*kind),
            Self::Wrapped { .. } => None,
        }
    }

    /// The directly wrapped failure, if any.
    pub fn cause(&self) -> Option<&DriverError> {
        match self {
            Self::Protocol { .. } => None,
            Self::Wrapped { cause, .. } => cause.as_deref(),
        }
    }

    /// The message without the cause chain.
    pub fn message(&self) -> &str {
        match self {
            Self::Protocol { message, .. } | Self::Wrapped { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_argument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_protocol_error_has_kind() {
        let err = DriverError::new(ErrorKind::NoSuchElement, "missing #login");
        assert_eq!(err.kind(), Some(ErrorKind::NoSuchElement));
        assert!(err.cause().is_none());
        assert_eq!(err.to_string(), "missing #login");
    }

    #[test]
    fn test_other_error_has_no_kind() {
        let err = DriverError::other("boom");
        assert_eq!(err.kind(), None);
        assert!(err.cause().is_none());
    }

    #[test]
    fn test_wrap_exposes_cause() {
        let inner = DriverError::new(ErrorKind::StaleElementReference, "detached");
        let err = DriverError::wrap("click failed", inner);

        assert_eq!(err.kind(), None);
        assert_eq!(
            err.cause().and_then(DriverError::kind),
            Some(ErrorKind::StaleElementReference)
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_no_such_session_message() {
        let err = DriverError::no_such_session("abc-123");
        assert_eq!(err.kind(), Some(ErrorKind::NoSuchSession));
        assert!(err.message().contains("abc-123"));
    }

    #[test]
    fn test_json_error_is_invalid_argument() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DriverError::from(json_err);
        assert_eq!(err.kind(), Some(ErrorKind::InvalidArgument));
    }

    #[test]
    fn test_kind_display_is_state() {
        assert_eq!(ErrorKind::NoSuchSession.to_string(), "invalid session id");
        assert_eq!(ErrorKind::Unknown.to_string(), "unknown error");
    }

    #[test]
    fn test_all_kinds_unique() {
        let unique: std::collections::HashSet<_> = ErrorKind::ALL.iter().collect();
        assert_eq!(unique.len(), ErrorKind::ALL.len());
    }
}
