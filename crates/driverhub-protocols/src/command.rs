//! Decoded protocol commands.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DriverError;

/// Ordered parameter mapping of a command.
pub type Parameters = Map<String, Value>;

/// One decoded protocol operation.
///
/// Built once by the command codec and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
    #[serde(default)]
    parameters: Parameters,
}

impl Command {
    pub fn new(name: impl Into<String>, session_id: Option<String>, parameters: Parameters) -> Self {
        Self {
            name: name.into(),
            session_id,
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// The session id, or `NoSuchSession` when the command is not
    /// session-scoped.
    pub fn require_session_id(&self) -> Result<&str, DriverError> {
        self.session_id()
            .ok_or_else(|| DriverError::no_such_session("<none>"))
    }

    /// A required string parameter.
    pub fn string_parameter(&self, key: &str) -> Result<&str, DriverError> {
        self.parameter(key)
            .and_then(Value::as_str)
            .ok_or_else(|| DriverError::invalid_argument(format!("missing string parameter '{key}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn params(value: Value) -> Parameters {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_command_accessors() {
        let cmd = Command::new(
            "findElement",
            Some("s-1".to_string()),
            params(json!({"using": "css selector", "value": "#q"})),
        );
        assert_eq!(cmd.name(), "findElement");
        assert_eq!(cmd.session_id(), Some("s-1"));
        assert_eq!(cmd.string_parameter("using").unwrap(), "css selector");
    }

    #[test]
    fn test_parameters_keep_insertion_order() {
        let mut parameters = Parameters::new();
        parameters.insert("z".to_string(), json!(1));
        parameters.insert("a".to_string(), json!(2));
        let cmd = Command::new("status", None, parameters);
        let keys: Vec<_> = cmd.parameters().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_missing_string_parameter() {
        let cmd = Command::new("get", Some("s".to_string()), Parameters::new());
        let err = cmd.string_parameter("url").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidArgument));
    }

    #[test]
    fn test_require_session_id() {
        let cmd = Command::new("quit", None, Parameters::new());
        let err = cmd.require_session_id().unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::NoSuchSession));
    }

    #[test]
    fn test_serialize_camel_case() {
        let cmd = Command::new("quit", Some("abc".to_string()), Parameters::new());
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["sessionId"], "abc");
    }
}
