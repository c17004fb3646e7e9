//! In-memory session store.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::{debug, info};
use uuid::Uuid;

use driverhub_protocols::{Dialect, DriverError, DriverProfile, Session, SessionStore};

/// Session store keeping sessions and driver profiles in process memory.
///
/// When no driver profile is registered, any capabilities are accepted.
/// Once profiles exist, a requested `browserName` must match one of them and
/// the profile's capabilities fill in whatever the request leaves out.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, Arc<Session>>,
    drivers: RwLock<Vec<DriverProfile>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with driver profiles.
    pub fn with_drivers(drivers: impl IntoIterator<Item = DriverProfile>) -> Self {
        let store = Self::new();
        for profile in drivers {
            store.add_driver(profile);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn select_profile(
        &self,
        requested: Option<&str>,
    ) -> Result<Option<DriverProfile>, DriverError> {
        let drivers = self.drivers.read();
        if drivers.is_empty() {
            return Ok(None);
        }
        match requested {
            Some(name) => drivers
                .iter()
                .find(|profile| profile.browser_name.eq_ignore_ascii_case(name))
                .cloned()
                .map(Some)
                .ok_or_else(|| {
                    DriverError::session_not_created(format!(
                        "No driver configured for browser '{name}'"
                    ))
                }),
            None => Ok(drivers.first().cloned()),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, session_id: &str) -> Result<Arc<Session>, DriverError> {
        self.sessions
            .get(session_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DriverError::no_such_session(session_id))
    }

    fn create(
        &self,
        capabilities: Map<String, Value>,
        dialect: Dialect,
    ) -> Result<Arc<Session>, DriverError> {
        let requested = capabilities.get("browserName").and_then(Value::as_str);
        let merged = match self.select_profile(requested)? {
            Some(profile) => {
                let mut merged = profile.capabilities.clone();
                merged.insert(
                    "browserName".to_string(),
                    Value::String(profile.browser_name.clone()),
                );
                for (key, value) in capabilities {
                    merged.insert(key, value);
                }
                merged
            }
            None => capabilities,
        };

        let session = Arc::new(Session::new(Uuid::new_v4().to_string(), merged, dialect));
        self.sessions.insert(session.id.clone(), session.clone());
        info!(
            session_id = %session.id,
            dialect = %dialect,
            browser = session.browser_name().unwrap_or("<any>"),
            "Created session"
        );
        Ok(session)
    }

    fn remove(&self, session_id: &str) -> Result<Arc<Session>, DriverError> {
        let (_, session) = self
            .sessions
            .remove(session_id)
            .ok_or_else(|| DriverError::no_such_session(session_id))?;
        info!(session_id = %session_id, "Removed session");
        Ok(session)
    }

    fn list(&self) -> Vec<Arc<Session>> {
        let mut sessions: Vec<_> = self
            .sessions
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        sessions.sort_by_key(|session| session.created_at);
        sessions
    }

    fn add_driver(&self, profile: DriverProfile) {
        let mut drivers = self.drivers.write();
        let existing = drivers
            .iter()
            .position(|p| p.browser_name.eq_ignore_ascii_case(&profile.browser_name));
        debug!(browser = %profile.browser_name, replaced = existing.is_some(), "Registered driver profile");
        match existing {
            Some(index) => drivers[index] = profile,
            None => drivers.push(profile),
        }
    }

    fn drivers(&self) -> Vec<DriverProfile> {
        self.drivers.read().clone()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
