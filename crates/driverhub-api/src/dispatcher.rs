//! Request dispatch pipeline.
//!
//! Every request moves through route matching, handler lookup, body decoding,
//! execution and encoding.
//! A failure at any step becomes a protocol error response; nothing escapes
//! to the transport.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::http::{Method, Uri};
use futures::FutureExt;
use serde_json::json;
use tracing::{error, trace};

use driverhub_core::HandlerRegistry;
use driverhub_protocols::{
    Command, Dialect, DialectSource, DriverError, HandlerFactory, Response, SessionStore,
};

use crate::codec::{codec_for, CommandCodec};
use crate::error::{DecodeError, DispatchError};
use crate::handlers::register_builtin_handlers;
use crate::transport::{HttpRequest, HttpResponse};

/// Routes HTTP requests to command handlers and encodes their results.
///
/// Shared by all in-flight requests; the route table and handler registry may
/// be extended while requests are running.
pub struct Dispatcher {
    codec: Arc<CommandCodec>,
    registry: Arc<HandlerRegistry>,
    dialects: Arc<dyn DialectSource>,
    default_dialect: Dialect,
}

impl Dispatcher {
    pub fn new(
        codec: Arc<CommandCodec>,
        registry: Arc<HandlerRegistry>,
        dialects: Arc<dyn DialectSource>,
        default_dialect: Dialect,
    ) -> Self {
        Self {
            codec,
            registry,
            dialects,
            default_dialect,
        }
    }

    /// A dispatcher with the built-in route catalog and handlers, backed by
    /// `sessions`.
    pub fn with_builtins<S>(sessions: Arc<S>, default_dialect: Dialect) -> Self
    where
        S: SessionStore + 'static,
    {
        let registry = HandlerRegistry::new(sessions.clone());
        register_builtin_handlers(&registry);
        Self::new(
            Arc::new(CommandCodec::new()),
            Arc::new(registry),
            sessions,
            default_dialect,
        )
    }

    pub fn command_codec(&self) -> &CommandCodec {
        &self.codec
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn default_dialect(&self) -> Dialect {
        self.default_dialect
    }

    /// Binds a command name to a route.
    pub fn register_command(&self, name: impl Into<String>, method: Method, template: &str) {
        self.codec.define_command(name, method, template);
    }

    /// Binds a command name to a handler factory.
    pub fn register_handler<F>(&self, name: impl Into<String>, factory: F)
    where
        F: HandlerFactory + 'static,
    {
        self.registry.register(name, factory);
    }

    /// Handles one request. Never fails: every error is encoded as a protocol
    /// error response.
    pub async fn handle_request(&self, request: HttpRequest) -> HttpResponse {
        trace!(method = %request.method, path = %request.path(), "Handling request");

        let (response, session_dialect) = self.dispatch(&request).await;

        if response.is_success() {
            trace!(method = %request.method, path = %request.path(), "Finished request");
        } else {
            trace!(
                method = %request.method,
                path = %request.path(),
                status = response.status(),
                state = response.state(),
                "Error on request"
            );
        }

        let dialect = session_dialect
            .or_else(|| {
                response
                    .session_id()
                    .and_then(|id| self.dialects.dialect_for(id))
            })
            .unwrap_or(self.default_dialect);
        codec_for(dialect).encode(&response)
    }

    /// Encodes a request that never reached the decoder, such as one whose
    /// body could not be read.
    pub fn reject(&self, method: &Method, uri: &Uri, error: DecodeError) -> HttpResponse {
        trace!(method = %method, path = %uri.path(), error = %error, "Error on request");
        let response = failure(None, DispatchError::from(error));
        codec_for(self.default_dialect).encode(&response)
    }

    async fn dispatch(&self, request: &HttpRequest) -> (Response, Option<Dialect>) {
        let matched = match self.codec.match_route(request) {
            Ok(matched) => matched,
            Err(err) => return (failure(None, err.into()), None),
        };
        // Looked up before the handler runs, since quit removes the session.
        let session_dialect = matched
            .session_id()
            .and_then(|id| self.dialects.dialect_for(id));

        // An unhandled command is unsupported whatever its body holds.
        let Some(factory) = self.registry.lookup(matched.name()) else {
            let err = DispatchError::UnsupportedCommand(matched.name().to_string());
            return (failure(matched.session_id(), err), session_dialect);
        };

        let session_id = matched.session_id().map(str::to_string);
        let command = match matched.into_command(&request.body) {
            Ok(command) => command,
            Err(err) => return (failure(session_id.as_deref(), err.into()), session_dialect),
        };

        let response = match self.invoke(factory, &command).await {
            Ok(mut response) => {
                if response.session_id().is_none() {
                    response.set_session_id(command.session_id().map(str::to_string));
                }
                response
            }
            Err(err) => failure(command.session_id(), err.into()),
        };
        (response, session_dialect)
    }

    async fn invoke(
        &self,
        factory: Arc<dyn HandlerFactory>,
        command: &Command,
    ) -> Result<Response, DriverError> {
        let sessions = self.registry.sessions();
        let execution = async move {
            let handler = factory.create(sessions);
            handler.execute(command).await
        };
        match AssertUnwindSafe(execution).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!(command = %command.name(), panic = %message, "Handler panicked");
                Err(DriverError::other(format!("Handler panicked: {message}")))
            }
        }
    }
}

fn failure(session_id: Option<&str>, err: DispatchError) -> Response {
    Response::failure(
        err.status(),
        session_id.map(str::to_string),
        json!({ "message": err.to_string() }),
    )
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
