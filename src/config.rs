//! Credential configuration for the remote analysis service.
//!
//! Credentials are resolved from a local `.env` file (if present) and the
//! process environment. Both the short variable names and the long names
//! used by some deployments are accepted:
//!
//! | Setting  | Short name         | Long name                               |
//! |----------|--------------------|-----------------------------------------|
//! | Endpoint | `AZURE_DI_ENDPOINT` | `AZURE_DOCUMENT_INTELLIGENCE_ENDPOINT` |
//! | Key      | `AZURE_DI_KEY`      | `AZURE_DOCUMENT_INTELLIGENCE_KEY`      |

use std::env;

use crate::error::{Error, Result};

/// Environment variable holding the service endpoint URL.
pub const ENDPOINT_VAR: &str = "AZURE_DI_ENDPOINT";

/// Environment variable holding the service API key.
pub const KEY_VAR: &str = "AZURE_DI_KEY";

const ENDPOINT_VAR_LONG: &str = "AZURE_DOCUMENT_INTELLIGENCE_ENDPOINT";
const KEY_VAR_LONG: &str = "AZURE_DOCUMENT_INTELLIGENCE_KEY";

/// Resolved service credentials.
#[derive(Debug, Clone, Default)]
pub struct Config {
    endpoint: Option<String>,
    key: Option<String>,
}

impl Config {
    /// Create a config with explicit credentials.
    pub fn new(endpoint: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            endpoint: non_empty(endpoint.into()),
            key: non_empty(key.into()),
        }
    }

    /// Resolve credentials from `.env` and the process environment.
    ///
    /// The short variable names take precedence over the long ones.
    pub fn from_env() -> Self {
        // Loads .env into the process environment; existing variables win.
        dotenvy::dotenv().ok();

        Self {
            endpoint: lookup(&[ENDPOINT_VAR, ENDPOINT_VAR_LONG]),
            key: lookup(&[KEY_VAR, KEY_VAR_LONG]),
        }
    }

    /// Get the configured endpoint, if any.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Get the configured API key, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Check whether both endpoint and key are configured.
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some() && self.key.is_some()
    }

    /// Names of the credentials that are not set, by their canonical
    /// (short) environment variable names.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.endpoint.is_none() {
            missing.push(ENDPOINT_VAR);
        }
        if self.key.is_none() {
            missing.push(KEY_VAR);
        }
        missing
    }

    /// Return `(endpoint, key)` or a [`Error::Configuration`] naming the
    /// unset variables. Called before any remote request is attempted.
    pub(crate) fn require(&self) -> Result<(&str, &str)> {
        match (self.endpoint.as_deref(), self.key.as_deref()) {
            (Some(endpoint), Some(key)) => Ok((endpoint, key)),
            _ => Err(Error::Configuration {
                missing: self
                    .missing_credentials()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            }),
        }
    }
}

fn lookup(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| env::var(name).ok())
        .and_then(non_empty)
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config() {
        let config = Config::new("https://example.cognitiveservices.azure.com", "secret");
        assert!(config.is_configured());
        assert!(config.missing_credentials().is_empty());
        assert_eq!(
            config.endpoint(),
            Some("https://example.cognitiveservices.azure.com")
        );
    }

    #[test]
    fn test_missing_credentials_listed() {
        let config = Config::default();
        assert!(!config.is_configured());
        assert_eq!(config.missing_credentials(), vec![ENDPOINT_VAR, KEY_VAR]);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::new("https://example.com", "");
        assert!(!config.is_configured());
        assert_eq!(config.missing_credentials(), vec![KEY_VAR]);
    }

    #[test]
    fn test_require_reports_missing_names() {
        let config = Config::default();
        let err = config.require().unwrap_err();
        match err {
            Error::Configuration { missing } => {
                assert_eq!(missing, vec![ENDPOINT_VAR.to_string(), KEY_VAR.to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_values_are_missing() {
        let config = Config::new("   ", "key");
        assert_eq!(config.missing_credentials(), vec![ENDPOINT_VAR]);
    }
}
