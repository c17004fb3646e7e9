//! Server initialization and startup logic for driverhub.

use std::sync::{Arc, OnceLock};

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use driverhub_api::{Dispatcher, HubServer};
use driverhub_config::{Config, ConfigValidator, LoggingConfig};
use driverhub_core::MemorySessionStore;

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize tracing with console output and, when configured, a daily
/// rolling log file.
///
/// `RUST_LOG` takes precedence over the configured level.
pub(crate) fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console = if config.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).with_ansi(true).boxed()
    };

    let file = match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("driverhub")
                .filename_suffix("log")
                .max_log_files(30)
                .build(directory)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().with_writer(writer).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .init();

    Ok(())
}

/// Validate the configuration, logging warnings and failing on errors.
pub(crate) fn validate(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let warnings = ConfigValidator::validate(config)?.into_result()?;
    for warning in warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }
    Ok(())
}

/// Build the dispatcher described by the configuration.
pub(crate) fn build_dispatcher(config: &Config) -> Dispatcher {
    let sessions = Arc::new(MemorySessionStore::with_drivers(config.driver_profiles()));
    Dispatcher::with_builtins(sessions, config.protocol.default_dialect)
}

/// Run the server in foreground until Ctrl+C.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting driverhub v{}", env!("CARGO_PKG_VERSION"));
    validate(&config)?;

    let dispatcher = Arc::new(build_dispatcher(&config));
    info!(
        routes = dispatcher.command_codec().len(),
        handlers = dispatcher.registry().len(),
        drivers = config.drivers.len(),
        "Dispatcher ready"
    );

    let server = HubServer::new(config.server.clone(), dispatcher);
    server.run(shutdown_signal()).await?;
    Ok(())
}

/// Print the route table, one route per line, followed by handled commands
/// that no route reaches.
pub(crate) fn print_routes(config: &Config, handled_only: bool) {
    let dispatcher = build_dispatcher(config);
    let codec = dispatcher.command_codec();
    let registry = dispatcher.registry();
    for route in codec.routes() {
        let handled = registry.contains(&route.name);
        if handled_only && !handled {
            continue;
        }
        let marker = if handled { "*" } else { " " };
        println!(
            "{marker} {:<7} {:<60} {}",
            route.method.as_str(),
            route.template.as_str(),
            route.name
        );
    }
    for name in registry.names() {
        if !codec.contains(&name) {
            println!("* {:<7} {:<60} {}", "-", "(no route)", name);
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}
