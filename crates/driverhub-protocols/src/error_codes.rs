//! Translation between failures, legacy numeric statuses and W3C states.
//!
//! The table below is the combined legacy JSON wire protocol and W3C
//! WebDriver error vocabulary. Third-party clients parse both the numbers and
//! the strings by value, so rows must not be reordered or renamed.

use crate::error::{DriverError, ErrorKind};

pub const SUCCESS: i32 = 0;
pub const NO_SUCH_SESSION: i32 = 6;
pub const NO_SUCH_ELEMENT: i32 = 7;
pub const NO_SUCH_FRAME: i32 = 8;
pub const UNKNOWN_COMMAND: i32 = 9;
pub const STALE_ELEMENT_REFERENCE: i32 = 10;
pub const ELEMENT_NOT_VISIBLE: i32 = 11;
pub const INVALID_ELEMENT_STATE: i32 = 12;
pub const UNHANDLED_ERROR: i32 = 13;
pub const ELEMENT_NOT_SELECTABLE: i32 = 15;
pub const JAVASCRIPT_ERROR: i32 = 17;
pub const XPATH_LOOKUP_ERROR: i32 = 19;
pub const TIMEOUT: i32 = 21;
pub const NO_SUCH_WINDOW: i32 = 23;
pub const INVALID_COOKIE_DOMAIN: i32 = 24;
pub const UNABLE_TO_SET_COOKIE: i32 = 25;
pub const UNEXPECTED_ALERT_PRESENT: i32 = 26;
pub const NO_ALERT_PRESENT: i32 = 27;
pub const ASYNC_SCRIPT_TIMEOUT: i32 = 28;
pub const INVALID_ELEMENT_COORDINATES: i32 = 29;
pub const IME_NOT_AVAILABLE: i32 = 30;
pub const IME_ENGINE_ACTIVATION_FAILED: i32 = 31;
pub const INVALID_SELECTOR_ERROR: i32 = 32;
pub const SESSION_NOT_CREATED: i32 = 33;
pub const MOVE_TARGET_OUT_OF_BOUNDS: i32 = 34;
pub const INVALID_XPATH_SELECTOR: i32 = 51;
pub const INVALID_XPATH_SELECTOR_RETURN_TYPER: i32 = 52;
pub const ELEMENT_NOT_INTERACTABLE: i32 = 60;
pub const INVALID_ARGUMENT: i32 = 61;
pub const NO_SUCH_COOKIE: i32 = 62;
pub const UNABLE_TO_CAPTURE_SCREEN: i32 = 63;
pub const ELEMENT_CLICK_INTERCEPTED: i32 = 64;
pub const METHOD_NOT_ALLOWED: i32 = 405;

/// State string reported for [`SUCCESS`].
pub const SUCCESS_STATE: &str = "success";

/// State string reported for any status without a canonical row.
pub const UNKNOWN_STATE: &str = "unknown error";

/// One row of the error vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct KnownError {
    pub status: i32,
    pub state: &'static str,
    pub http_status: u16,
    pub kind: ErrorKind,
    /// Row used when translating `kind` to a status.
    pub canonical_for_kind: bool,
    /// Row used when translating `status` to a state or HTTP code.
    pub canonical_for_status: bool,
}

const fn row(
    status: i32,
    state: &'static str,
    http_status: u16,
    kind: ErrorKind,
    canonical_for_kind: bool,
    canonical_for_status: bool,
) -> KnownError {
    KnownError {
        status,
        state,
        http_status,
        kind,
        canonical_for_kind,
        canonical_for_status,
    }
}

pub static KNOWN_ERRORS: &[KnownError] = &[
    row(ASYNC_SCRIPT_TIMEOUT, "script timeout", 500, ErrorKind::ScriptTimeout, true, true),
    row(ELEMENT_CLICK_INTERCEPTED, "element click intercepted", 400, ErrorKind::ElementClickIntercepted, true, true),
    row(ELEMENT_NOT_SELECTABLE, "element not selectable", 400, ErrorKind::ElementNotSelectable, true, true),
    row(ELEMENT_NOT_INTERACTABLE, "element not interactable", 400, ErrorKind::ElementNotInteractable, true, true),
    row(ELEMENT_NOT_VISIBLE, "element not visible", 400, ErrorKind::ElementNotVisible, true, true),
    row(IME_ENGINE_ACTIVATION_FAILED, "unsupported operation", 500, ErrorKind::ImeActivationFailed, true, true),
    row(IME_NOT_AVAILABLE, "unsupported operation", 500, ErrorKind::ImeNotAvailable, true, true),
    row(INVALID_ARGUMENT, "invalid argument", 400, ErrorKind::InvalidArgument, true, true),
    row(INVALID_COOKIE_DOMAIN, "invalid cookie domain", 400, ErrorKind::InvalidCookieDomain, true, true),
    row(INVALID_ELEMENT_COORDINATES, "invalid element coordinates", 400, ErrorKind::InvalidCoordinates, true, true),
    row(INVALID_ELEMENT_STATE, "invalid element state", 400, ErrorKind::InvalidElementState, true, true),
    row(INVALID_SELECTOR_ERROR, "invalid selector", 400, ErrorKind::InvalidSelector, true, true),
    row(INVALID_XPATH_SELECTOR, "invalid selector", 400, ErrorKind::InvalidSelector, false, true),
    row(INVALID_XPATH_SELECTOR_RETURN_TYPER, "invalid selector", 400, ErrorKind::InvalidSelector, false, true),
    row(JAVASCRIPT_ERROR, "javascript error", 500, ErrorKind::Javascript, true, true),
    row(METHOD_NOT_ALLOWED, "unknown method", 405, ErrorKind::UnsupportedCommand, false, true),
    row(METHOD_NOT_ALLOWED, "unsupported operation", 500, ErrorKind::UnsupportedCommand, false, false),
    row(MOVE_TARGET_OUT_OF_BOUNDS, "move target out of bounds", 500, ErrorKind::MoveTargetOutOfBounds, true, true),
    row(NO_ALERT_PRESENT, "no such alert", 404, ErrorKind::NoAlertPresent, true, true),
    row(NO_SUCH_COOKIE, "no such cookie", 404, ErrorKind::NoSuchCookie, true, true),
    row(NO_SUCH_ELEMENT, "no such element", 404, ErrorKind::NoSuchElement, true, true),
    row(NO_SUCH_FRAME, "no such frame", 404, ErrorKind::NoSuchFrame, true, true),
    row(NO_SUCH_SESSION, "invalid session id", 404, ErrorKind::NoSuchSession, true, true),
    row(NO_SUCH_WINDOW, "no such window", 404, ErrorKind::NoSuchWindow, true, true),
    row(SESSION_NOT_CREATED, "session not created", 500, ErrorKind::SessionNotCreated, true, true),
    row(STALE_ELEMENT_REFERENCE, "stale element reference", 404, ErrorKind::StaleElementReference, true, true),
    row(TIMEOUT, "timeout", 500, ErrorKind::Timeout, true, true),
    row(XPATH_LOOKUP_ERROR, "invalid selector", 400, ErrorKind::InvalidSelector, false, true),
    row(UNABLE_TO_CAPTURE_SCREEN, "unable to capture screen", 500, ErrorKind::UnableToCaptureScreen, true, true),
    row(UNABLE_TO_SET_COOKIE, "unable to set cookie", 500, ErrorKind::UnableToSetCookie, true, true),
    row(UNEXPECTED_ALERT_PRESENT, "unexpected alert open", 500, ErrorKind::UnhandledAlert, true, true),
    row(UNHANDLED_ERROR, "unknown error", 500, ErrorKind::Unknown, true, true),
    row(UNKNOWN_COMMAND, "unknown command", 404, ErrorKind::UnsupportedCommand, true, true),
];

/// Status for a recognized kind.
pub fn status_for_kind(kind: ErrorKind) -> i32 {
    KNOWN_ERRORS
        .iter()
        .find(|known| known.kind == kind && known.canonical_for_kind)
        .map_or(UNHANDLED_ERROR, |known| known.status)
}

/// Status for a raised failure.
///
/// A recognized kind maps directly. Otherwise the directly wrapped cause is
/// tried once; anything deeper resolves to [`UNHANDLED_ERROR`].
pub fn to_status(err: &DriverError) -> i32 {
    if let Some(kind) = err.kind() {
        return status_for_kind(kind);
    }
    match err.cause().and_then(DriverError::kind) {
        Some(kind) => status_for_kind(kind),
        None => UNHANDLED_ERROR,
    }
}

fn canonical_row(status: i32) -> Option<&'static KnownError> {
    KNOWN_ERRORS
        .iter()
        .find(|known| known.status == status && known.canonical_for_status)
}

/// Canonical state for a status.
pub fn to_state(status: i32) -> &'static str {
    if status == SUCCESS {
        return SUCCESS_STATE;
    }
    canonical_row(status).map_or(UNKNOWN_STATE, |known| known.state)
}

/// HTTP status used by the W3C dialect for a protocol status.
pub fn http_status(status: i32) -> u16 {
    if status == SUCCESS {
        return 200;
    }
    canonical_row(status).map_or(500, |known| known.http_status)
}

/// Legacy status for a W3C state string.
pub fn status_for_state(state: &str) -> i32 {
    if state == SUCCESS_STATE {
        return SUCCESS;
    }
    KNOWN_ERRORS
        .iter()
        .find(|known| known.state == state && known.canonical_for_kind)
        .map_or(UNHANDLED_ERROR, |known| known.status)
}

#[cfg(test)]
#[path = "error_codes_tests.rs"]
mod tests;
