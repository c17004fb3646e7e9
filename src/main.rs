//! driverhub - remote WebDriver protocol front end
//!
//! Main entry point for the driverhub CLI and server.

mod cli;
mod server;

use clap::Parser;

use driverhub_config::ConfigLoader;

use crate::cli::{Cli, Commands};
use crate::server::{init_tracing, print_routes, run_server, validate};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = ConfigLoader::load_or_default(&cli.config)?;

    match cli.command {
        None => {
            init_tracing(&config.logging)?;
            run_server(config).await
        }
        Some(Commands::Run {
            host,
            port,
            dialect,
        }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dialect) = dialect {
                config.protocol.default_dialect = dialect;
            }
            init_tracing(&config.logging)?;
            run_server(config).await
        }
        Some(Commands::Routes { handled }) => {
            print_routes(&config, handled);
            Ok(())
        }
        Some(Commands::CheckConfig) => {
            init_tracing(&config.logging)?;
            validate(&config)?;
            println!("{}: ok", cli.config.display());
            Ok(())
        }
    }
}
