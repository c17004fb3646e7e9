//! CLI definitions for driverhub.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use driverhub_protocols::Dialect;

/// driverhub CLI.
#[derive(Parser)]
#[command(name = "driverhub")]
#[command(about = "Remote WebDriver protocol front end")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        env = "DRIVERHUB_CONFIG",
        default_value = "config/driverhub.toml",
        global = true
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run {
        /// Server host, overrides the configuration file
        #[arg(long)]
        host: Option<String>,

        /// Server port, overrides the configuration file
        #[arg(long)]
        port: Option<u16>,

        /// Dialect for responses not tied to a session (w3c, oss)
        #[arg(long)]
        dialect: Option<Dialect>,
    },

    /// Print the route table
    Routes {
        /// Only list routes whose command has a built-in handler
        #[arg(long)]
        handled: bool,
    },

    /// Load and validate the configuration file
    CheckConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_overrides() {
        let cli = Cli::parse_from([
            "driverhub", "run", "--host", "0.0.0.0", "--port", "5555", "--dialect", "oss",
        ]);
        match cli.command {
            Some(Commands::Run { host, port, dialect }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(5555));
                assert_eq!(dialect, Some(Dialect::Oss));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::parse_from(["driverhub", "check-config"]);
        assert!(matches!(cli.command, Some(Commands::CheckConfig)));
        if std::env::var_os("DRIVERHUB_CONFIG").is_none() {
            assert_eq!(cli.config, PathBuf::from("config/driverhub.toml"));
        }
    }

    #[test]
    fn test_invalid_dialect_rejected() {
        assert!(Cli::try_parse_from(["driverhub", "run", "--dialect", "json"]).is_err());
    }
}
