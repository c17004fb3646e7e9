//! Hub server implementation.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use driverhub_config::ServerConfig;

use crate::dispatcher::Dispatcher;
use crate::error::ServerError;
use crate::http::routes::create_router;
use crate::state::AppState;

/// Serves the dispatcher over HTTP.
pub struct HubServer {
    config: ServerConfig,
    dispatcher: Arc<Dispatcher>,
}

impl HubServer {
    pub fn new(config: ServerConfig, dispatcher: Arc<Dispatcher>) -> Self {
        Self { config, dispatcher }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Start the server and run until `shutdown` resolves.
    pub async fn run(&self, shutdown: impl Future<Output = ()> + Send + 'static) -> Result<(), ServerError> {
        let addr = self.addr();
        let socket: SocketAddr = addr
            .parse()
            .map_err(|source| ServerError::InvalidAddress {
                addr: addr.clone(),
                source,
            })?;
        let listener = TcpListener::bind(socket)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        let state = Arc::new(AppState::new(
            self.dispatcher.clone(),
            self.config.max_body_bytes,
        ));
        let app = create_router(state);

        info!(
            addr = %socket,
            dialect = %self.dispatcher.default_dialect(),
            "driverhub listening"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("driverhub stopped");
        Ok(())
    }
}
