//! Wire-protocol dialects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DriverError;

/// The protocol variant a client speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Legacy JSON wire protocol with numeric statuses.
    Oss,
    /// W3C WebDriver with string error states.
    #[default]
    W3c,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oss => "oss",
            Self::W3c => "w3c",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "oss" | "legacy" => Ok(Self::Oss),
            "w3c" => Ok(Self::W3c),
            other => Err(DriverError::invalid_argument(format!(
                "unknown dialect: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dialect() {
        assert_eq!("w3c".parse::<Dialect>().unwrap(), Dialect::W3c);
        assert_eq!("OSS".parse::<Dialect>().unwrap(), Dialect::Oss);
        assert_eq!("legacy".parse::<Dialect>().unwrap(), Dialect::Oss);
        assert!("json".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_default_dialect() {
        assert_eq!(Dialect::default(), Dialect::W3c);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Dialect::Oss).unwrap(), "\"oss\"");
        let parsed: Dialect = serde_json::from_str("\"w3c\"").unwrap();
        assert_eq!(parsed, Dialect::W3c);
    }
}
