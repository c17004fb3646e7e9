//! Session lifecycle handlers.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use driverhub_protocols::{Command, Dialect, DriverError, Handler, Response, SessionStore};

/// Reports that the server is ready to accept sessions.
pub struct Status;

#[async_trait]
impl Handler for Status {
    async fn execute(&self, _command: &Command) -> Result<Response, DriverError> {
        Ok(Response::success(
            None,
            json!({
                "ready": true,
                "message": "driverhub is ready to create sessions",
                "build": { "version": env!("CARGO_PKG_VERSION") },
                "os": {
                    "name": std::env::consts::OS,
                    "arch": std::env::consts::ARCH,
                },
            }),
        ))
    }
}

/// Lists every live session with its capabilities.
pub struct GetAllSessions {
    sessions: Arc<dyn SessionStore>,
}

impl GetAllSessions {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl Handler for GetAllSessions {
    async fn execute(&self, _command: &Command) -> Result<Response, DriverError> {
        let sessions: Vec<Value> = self
            .sessions
            .list()
            .iter()
            .map(|session| json!({ "id": session.id, "capabilities": session.capabilities }))
            .collect();
        Ok(Response::success(None, Value::Array(sessions)))
    }
}

/// Creates a session and negotiates its dialect.
///
/// A `capabilities` payload selects W3C; a payload with only
/// `desiredCapabilities` selects the legacy protocol.
pub struct NewSession {
    sessions: Arc<dyn SessionStore>,
}

impl NewSession {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl Handler for NewSession {
    async fn execute(&self, command: &Command) -> Result<Response, DriverError> {
        let (capabilities, dialect) = requested_capabilities(command)?;
        let session = self.sessions.create(capabilities, dialect)?;
        Ok(Response::success(
            Some(session.id.clone()),
            Value::Object(session.capabilities.clone()),
        ))
    }
}

fn requested_capabilities(command: &Command) -> Result<(Map<String, Value>, Dialect), DriverError> {
    if let Some(capabilities) = command.parameter("capabilities") {
        let capabilities = capabilities
            .as_object()
            .ok_or_else(|| DriverError::invalid_argument("'capabilities' must be an object"))?;
        return Ok((merge_w3c_capabilities(capabilities)?, Dialect::W3c));
    }
    match command.parameter("desiredCapabilities") {
        Some(Value::Object(desired)) => Ok((desired.clone(), Dialect::Oss)),
        Some(_) => Err(DriverError::invalid_argument(
            "'desiredCapabilities' must be an object",
        )),
        None => Err(DriverError::session_not_created(
            "No capabilities found in the new session request",
        )),
    }
}

/// Merges `alwaysMatch` with the first `firstMatch` entry.
///
/// An object without either key is taken as the capabilities themselves.
fn merge_w3c_capabilities(
    capabilities: &Map<String, Value>,
) -> Result<Map<String, Value>, DriverError> {
    let always = capabilities.get("alwaysMatch");
    let first = capabilities.get("firstMatch");
    if always.is_none() && first.is_none() {
        return Ok(capabilities.clone());
    }

    let mut merged = match always {
        Some(Value::Object(always)) => always.clone(),
        Some(Value::Null) | None => Map::new(),
        Some(_) => return Err(DriverError::invalid_argument("'alwaysMatch' must be an object")),
    };
    let first = match first {
        Some(Value::Array(entries)) => entries.first(),
        Some(Value::Null) | None => None,
        Some(_) => return Err(DriverError::invalid_argument("'firstMatch' must be an array")),
    };
    if let Some(entry) = first {
        let entry = entry
            .as_object()
            .ok_or_else(|| DriverError::invalid_argument("'firstMatch' entries must be objects"))?;
        for (key, value) in entry {
            if merged.contains_key(key) {
                return Err(DriverError::invalid_argument(format!(
                    "Capability '{key}' appears in both alwaysMatch and firstMatch"
                )));
            }
            merged.insert(key.clone(), value.clone());
        }
    }
    Ok(merged)
}

/// Returns the capabilities of the addressed session.
pub struct GetSessionCapabilities {
    sessions: Arc<dyn SessionStore>,
}

impl GetSessionCapabilities {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl Handler for GetSessionCapabilities {
    async fn execute(&self, command: &Command) -> Result<Response, DriverError> {
        let session = self.sessions.get(command.require_session_id()?)?;
        Ok(Response::success(
            Some(session.id.clone()),
            Value::Object(session.capabilities.clone()),
        ))
    }
}

/// Ends the addressed session.
pub struct DeleteSession {
    sessions: Arc<dyn SessionStore>,
}

impl DeleteSession {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl Handler for DeleteSession {
    async fn execute(&self, command: &Command) -> Result<Response, DriverError> {
        let session = self.sessions.remove(command.require_session_id()?)?;
        Ok(Response::success(Some(session.id.clone()), Value::Null))
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
