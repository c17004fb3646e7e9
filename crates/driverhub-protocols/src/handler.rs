//! Command handler traits.

use std::sync::Arc;

use async_trait::async_trait;

use crate::command::Command;
use crate::error::DriverError;
use crate::response::Response;
use crate::session::SessionStore;

/// Executes one protocol command.
///
/// Handlers may await long-running browser work; any failure they return is
/// translated into a protocol error by the dispatcher.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn execute(&self, command: &Command) -> Result<Response, DriverError>;
}

/// Builds a handler bound to the session store, once per dispatch.
pub trait HandlerFactory: Send + Sync {
    fn create(&self, sessions: Arc<dyn SessionStore>) -> Box<dyn Handler>;
}

impl<F> HandlerFactory for F
where
    F: Fn(Arc<dyn SessionStore>) -> Box<dyn Handler> + Send + Sync,
{
    fn create(&self, sessions: Arc<dyn SessionStore>) -> Box<dyn Handler> {
        self(sessions)
    }
}
