//! Session store collaborator interface.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dialect::Dialect;
use crate::error::DriverError;

/// A live automation session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub capabilities: Map<String, Value>,
    pub dialect: Dialect,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: impl Into<String>, capabilities: Map<String, Value>, dialect: Dialect) -> Self {
        Self {
            id: id.into(),
            capabilities,
            dialect,
            created_at: Utc::now(),
        }
    }

    pub fn browser_name(&self) -> Option<&str> {
        self.capabilities.get("browserName").and_then(Value::as_str)
    }
}

/// Default capabilities for a browser, registered at startup or through the
/// driver configuration command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfile {
    pub browser_name: String,
    #[serde(default)]
    pub capabilities: Map<String, Value>,
}

/// Storage for sessions, consumed by handler factories.
pub trait SessionStore: Send + Sync {
    /// Looks up a session, failing with `NoSuchSession`.
    fn get(&self, session_id: &str) -> Result<Arc<Session>, DriverError>;

    /// Creates a session for the requested capabilities.
    fn create(
        &self,
        capabilities: Map<String, Value>,
        dialect: Dialect,
    ) -> Result<Arc<Session>, DriverError>;

    /// Removes a session, failing with `NoSuchSession`.
    fn remove(&self, session_id: &str) -> Result<Arc<Session>, DriverError>;

    /// All live sessions.
    fn list(&self) -> Vec<Arc<Session>>;

    /// Registers or replaces a driver profile.
    fn add_driver(&self, profile: DriverProfile);

    /// Registered driver profiles.
    fn drivers(&self) -> Vec<DriverProfile>;
}

/// Resolves the dialect a session negotiated at creation.
pub trait DialectSource: Send + Sync {
    fn dialect_for(&self, session_id: &str) -> Option<Dialect>;
}

impl<T: SessionStore + ?Sized> DialectSource for T {
    fn dialect_for(&self, session_id: &str) -> Option<Dialect> {
        self.get(session_id).ok().map(|session| session.dialect)
    }
}
