//! Auth configuration types
//!
//! Static credentials only: the SDK never exchanges or refreshes tokens.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Authentication configuration
///
/// Deserialized from the `auth` section of a client config file:
///
/// ```yaml
/// auth:
///   type: bearer
///   token: "..."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Bearer token in the `Authorization` header
    Bearer {
        /// The bearer token
        token: String,
    },

    /// API key in a header
    ApiKey {
        /// Header name (defaults to `X-API-Key`)
        #[serde(default)]
        header_name: Option<String>,
        /// Prefix to add before the value (e.g., "Token ")
        #[serde(default)]
        prefix: Option<String>,
        /// The API key value
        value: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Custom headers
    CustomHeaders {
        /// Headers to add to each request
        headers: HashMap<String, String>,
    },
}

impl AuthConfig {
    /// Create bearer token auth
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Check whether any credentials are configured
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Short name used in logs (never includes the secret)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bearer { .. } => "bearer",
            Self::ApiKey { .. } => "api_key",
            Self::Basic { .. } => "basic",
            Self::CustomHeaders { .. } => "custom_headers",
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(config.is_none());
        assert_eq!(config.kind(), "none");
    }

    #[test]
    fn test_auth_config_deserialize_bearer() {
        let config: AuthConfig = serde_yaml::from_str("type: bearer\ntoken: abc").unwrap();
        assert_eq!(config, AuthConfig::bearer("abc"));
    }

    #[test]
    fn test_auth_config_deserialize_api_key_defaults() {
        let config: AuthConfig = serde_yaml::from_str("type: api_key\nvalue: k-1").unwrap();
        assert_eq!(
            config,
            AuthConfig::ApiKey {
                header_name: None,
                prefix: None,
                value: "k-1".to_string(),
            }
        );
        assert_eq!(config.kind(), "api_key");
    }
}
