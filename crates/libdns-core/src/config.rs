//! Provider configuration types
//!
//! Credentials are opaque strings: any placeholder syntax in them must be
//! resolved by the host before the configuration reaches this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS provider configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// LuaDNS provider
    #[serde(rename = "luadns")]
    LuaDns {
        /// Account email (HTTP Basic username)
        email: String,
        /// API key (HTTP Basic password)
        api_key: String,
        /// Base URL override (defaults to the public LuaDNS API)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        endpoint: Option<String>,
    },

    /// Custom provider
    Custom {
        /// Factory name to use
        factory: String,
        /// Custom configuration data
        config: serde_json::Value,
    },
}

impl ProviderConfig {
    /// LuaDNS configuration against the public API
    pub fn luadns(email: impl Into<String>, api_key: impl Into<String>) -> Self {
        ProviderConfig::LuaDns {
            email: email.into(),
            api_key: api_key.into(),
            endpoint: None,
        }
    }

    /// Validate the provider configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            ProviderConfig::LuaDns {
                email,
                api_key,
                endpoint,
            } => {
                if email.is_empty() {
                    return Err(crate::Error::config("email is required"));
                }
                if api_key.is_empty() {
                    return Err(crate::Error::config("API key is required"));
                }
                if let Some(url) = endpoint
                    && !url.starts_with("https://")
                    && !url.starts_with("http://")
                {
                    return Err(crate::Error::config(format!(
                        "LuaDNS endpoint must use HTTP or HTTPS scheme. Got: {}",
                        url
                    )));
                }
                Ok(())
            }
            ProviderConfig::Custom { factory, config } => {
                if factory.is_empty() {
                    return Err(crate::Error::config(
                        "Custom provider factory cannot be empty",
                    ));
                }
                if config.is_null() {
                    return Err(crate::Error::config(
                        "Custom provider config cannot be null",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Get the provider type name
    pub fn type_name(&self) -> &str {
        match self {
            ProviderConfig::LuaDns { .. } => "luadns",
            ProviderConfig::Custom { factory, .. } => factory,
        }
    }
}

// Keeps the API key out of logs
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderConfig::LuaDns {
                email, endpoint, ..
            } => f
                .debug_struct("LuaDns")
                .field("email", email)
                .field("api_key", &"<REDACTED>")
                .field("endpoint", endpoint)
                .finish(),
            ProviderConfig::Custom { factory, .. } => f
                .debug_struct("Custom")
                .field("factory", factory)
                .field("config", &"<REDACTED>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_credentials() {
        assert!(ProviderConfig::luadns("ops@example.com", "key").validate().is_ok());

        let err = ProviderConfig::luadns("", "key").validate().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: email is required");

        let err = ProviderConfig::luadns("ops@example.com", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: API key is required");
    }

    #[test]
    fn test_validate_endpoint_scheme() {
        let config = ProviderConfig::LuaDns {
            email: "ops@example.com".to_string(),
            api_key: "key".to_string(),
            endpoint: Some("ftp://api.luadns.com".to_string()),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_tagged() {
        let config: ProviderConfig = serde_json::from_value(serde_json::json!({
            "type": "luadns",
            "email": "ops@example.com",
            "api_key": "key",
        }))
        .unwrap();

        assert_eq!(config.type_name(), "luadns");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ProviderConfig::luadns("ops@example.com", "super-secret-key");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("ops@example.com"));
    }
}
