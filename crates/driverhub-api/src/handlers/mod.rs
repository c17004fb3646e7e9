//! Handlers this layer answers without a browser behind it.

mod config;
mod session;

use std::sync::Arc;

use driverhub_core::HandlerRegistry;
use driverhub_protocols::{names, Handler, SessionStore};

pub use config::AddDriverConfig;
pub use session::{DeleteSession, GetAllSessions, GetSessionCapabilities, NewSession, Status};

/// Binds the built-in handlers to their command names.
pub fn register_builtin_handlers(registry: &HandlerRegistry) {
    bind(registry, names::STATUS, |_| Status);
    bind(registry, names::GET_ALL_SESSIONS, GetAllSessions::new);
    bind(registry, names::NEW_SESSION, NewSession::new);
    bind(registry, names::GET_CAPABILITIES, GetSessionCapabilities::new);
    bind(registry, names::QUIT, DeleteSession::new);
    bind(registry, names::ADD_DRIVER_CONFIG, AddDriverConfig::new);
}

fn bind<H>(registry: &HandlerRegistry, name: &str, build: fn(Arc<dyn SessionStore>) -> H)
where
    H: Handler + 'static,
{
    registry.register(name, move |sessions: Arc<dyn SessionStore>| -> Box<dyn Handler> {
        Box::new(build(sessions))
    });
}
