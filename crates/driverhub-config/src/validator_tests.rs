use super::*;
use crate::schema::DriverConfig;

fn driver(name: &str) -> DriverConfig {
    DriverConfig {
        browser_name: name.to_string(),
        capabilities: Default::default(),
    }
}

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_invalid_port() {
    let mut config = Config::default();
    config.server.port = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "server.port"));
}

#[test]
fn test_validate_empty_host() {
    let mut config = Config::default();
    config.server.host = String::new();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "server.host"));
}

#[test]
fn test_validate_zero_body_limit() {
    let mut config = Config::default();
    config.server.max_body_bytes = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "server.max_body_bytes"));
}

#[test]
fn test_validate_small_body_limit_warning() {
    let mut config = Config::default();
    config.server.max_body_bytes = 1024;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "server.max_body_bytes"));
}

#[test]
fn test_validate_log_level() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "logging.level"));
}

#[test]
fn test_validate_log_directive_passes_through() {
    let mut config = Config::default();
    config.logging.level = "info,driverhub_api=trace".to_string();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_validate_uppercase_level() {
    let mut config = Config::default();
    config.logging.level = "DEBUG".to_string();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_validate_duplicate_drivers() {
    let mut config = Config::default();
    config.drivers = vec![driver("chrome"), driver("Chrome")];

    let result = ConfigValidator::validate(&config).unwrap();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "drivers[1].browser_name");
}

#[test]
fn test_validate_empty_driver_name() {
    let mut config = Config::default();
    config.drivers = vec![driver(" ")];

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
}

#[test]
fn test_into_result_joins_errors() {
    let mut config = Config::default();
    config.server.port = 0;
    config.server.host = String::new();

    let err = ConfigValidator::validate(&config)
        .unwrap()
        .into_result()
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("server.port"));
    assert!(message.contains("server.host"));
}

#[test]
fn test_into_result_returns_warnings() {
    let mut config = Config::default();
    config.server.max_body_bytes = 10;

    let warnings = ConfigValidator::validate(&config)
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(warnings.len(), 1);
}
