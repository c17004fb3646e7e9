//! Protocol responses.

use serde::Serialize;
use serde_json::Value;

use crate::error_codes::{self, SUCCESS, SUCCESS_STATE};

/// The outcome of one dispatched command.
///
/// `state` is always the canonical state for `status`; it can only change
/// through [`Response::set_status`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    status: i32,
    state: &'static str,
    session_id: Option<String>,
    value: Value,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: SUCCESS,
            state: SUCCESS_STATE,
            session_id: None,
            value: Value::Null,
        }
    }
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// A successful response carrying `value`.
    pub fn success(session_id: Option<String>, value: Value) -> Self {
        Self {
            session_id,
            value,
            ..Self::default()
        }
    }

    /// A failed response with the given status.
    pub fn failure(status: i32, session_id: Option<String>, value: Value) -> Self {
        let mut response = Self::success(session_id, value);
        response.set_status(status);
        response
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn state(&self) -> &'static str {
        self.state
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS
    }

    /// Sets the status and the state derived from it.
    pub fn set_status(&mut self, status: i32) {
        self.status = status;
        self.state = error_codes::to_state(status);
    }

    pub fn set_session_id(&mut self, session_id: Option<String>) {
        self.session_id = session_id;
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}
