//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use driverhub_protocols::{Dialect, DriverProfile};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub protocol: ProtocolConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Driver profiles registered at startup.
    #[serde(default)]
    pub drivers: Vec<DriverConfig>,
}

impl Config {
    /// Driver profiles in the form the session store expects.
    pub fn driver_profiles(&self) -> Vec<DriverProfile> {
        self.drivers.iter().map(DriverConfig::to_profile).collect()
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest request body accepted before the request is rejected as
    /// malformed.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4444
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}

/// Wire protocol configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Dialect used for responses that belong to no known session.
    #[serde(default)]
    pub default_dialect: Dialect,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,

    /// Directory for daily rolling log files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            directory: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// A driver profile entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    pub browser_name: String,

    #[serde(default)]
    pub capabilities: Map<String, Value>,
}

impl DriverConfig {
    pub fn to_profile(&self) -> DriverProfile {
        DriverProfile {
            browser_name: self.browser_name.clone(),
            capabilities: self.capabilities.clone(),
        }
    }
}
