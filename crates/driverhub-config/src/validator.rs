//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::Config;

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Bodies smaller than this are unlikely to fit a file upload.
const SMALL_BODY_LIMIT: usize = 64 * 1024;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Converts collected errors into a single [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.is_valid() {
            return Ok(self.warnings);
        }
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::Rejected(joined))
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_logging(config, &mut result);
        Self::validate_drivers(config, &mut result);

        Ok(result)
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }

        if config.server.max_body_bytes == 0 {
            result.add_error(ValidationError::new(
                "server.max_body_bytes",
                "max_body_bytes must be greater than 0",
            ));
        } else if config.server.max_body_bytes < SMALL_BODY_LIMIT {
            result.add_warning(ValidationWarning::new(
                "server.max_body_bytes",
                "max_body_bytes is below 64 KiB, file uploads and screenshots may be rejected",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        // Directives such as "driverhub_api=trace" are handed to EnvFilter as-is.
        if level.contains('=') {
            return;
        }
        if !LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!("Unknown log level '{}', valid values: {:?}", level, LEVELS),
            ));
        }
    }

    fn validate_drivers(config: &Config, result: &mut ValidationResult) {
        let mut seen = HashSet::new();
        for (index, driver) in config.drivers.iter().enumerate() {
            let path = format!("drivers[{}].browser_name", index);
            if driver.browser_name.trim().is_empty() {
                result.add_error(ValidationError::new(path, "browser_name cannot be empty"));
                continue;
            }
            if !seen.insert(driver.browser_name.to_ascii_lowercase()) {
                result.add_error(ValidationError::new(
                    path,
                    format!("Duplicate driver profile '{}'", driver.browser_name),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
