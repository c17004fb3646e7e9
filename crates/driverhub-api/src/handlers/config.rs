//! Administrative driver configuration.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use driverhub_protocols::{Command, DriverError, DriverProfile, Handler, Response, SessionStore};

/// Registers a driver profile from `{"browserName": .., "capabilities": {..}}`.
///
/// A profile for the same browser replaces the earlier one.
pub struct AddDriverConfig {
    sessions: Arc<dyn SessionStore>,
}

impl AddDriverConfig {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl Handler for AddDriverConfig {
    async fn execute(&self, command: &Command) -> Result<Response, DriverError> {
        let profile: DriverProfile =
            serde_json::from_value(Value::Object(command.parameters().clone()))?;
        if profile.browser_name.trim().is_empty() {
            return Err(DriverError::invalid_argument("'browserName' must not be empty"));
        }
        info!(browser = %profile.browser_name, "Adding driver configuration");
        self.sessions.add_driver(profile);
        Ok(Response::success(None, Value::Null))
    }
}
