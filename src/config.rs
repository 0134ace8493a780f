//! Client configuration
//!
//! Loaded from a YAML (or JSON) file, then overridden by `LAKEHOUSE_*`
//! environment variables.
//!
//! ```yaml
//! service_url: https://lakehouse.example.com
//! service_name: lakehouse
//! timeout_secs: 60
//! auth:
//!   type: bearer
//!   token: "..."
//! headers:
//!   X-Tenant: acme
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::StringMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Service root used when none is configured
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";

/// Service name appended to the service root
pub const DEFAULT_SERVICE_NAME: &str = "lakehouse";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding `service_url`
pub const ENV_SERVICE_URL: &str = "LAKEHOUSE_SERVICE_URL";
/// Environment variable overriding `service_name`
pub const ENV_SERVICE_NAME: &str = "LAKEHOUSE_SERVICE_NAME";
/// Environment variable holding a bearer token
pub const ENV_TOKEN: &str = "LAKEHOUSE_TOKEN";
/// Environment variable overriding `timeout_secs`
pub const ENV_TIMEOUT_SECS: &str = "LAKEHOUSE_TIMEOUT_SECS";

/// Configuration for a [`LakehouseClient`](crate::LakehouseClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root URL
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Service name, appended to `service_url` as a path segment
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Authentication
    #[serde(default)]
    pub auth: AuthConfig,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: StringMap,

    /// User agent override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            service_name: default_service_name(),
            auth: AuthConfig::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            headers: StringMap::new(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a config for the given service root
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            ..Self::default()
        }
    }

    /// Set authentication (builder style)
    #[must_use]
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    /// Set the service name (builder style)
    #[must_use]
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Load a config file, then apply environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let mut config = Self::from_yaml_str(&content)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from YAML (JSON is accepted too)
    ///
    /// Environment variables are not consulted.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Build a config from defaults and environment variables only
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`
    ///
    /// Empty values are ignored. A token replaces any configured auth with
    /// bearer auth. An unparseable timeout is ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_SERVICE_URL) {
            self.service_url = url;
        }
        if let Some(name) = get(ENV_SERVICE_NAME) {
            self.service_name = name;
        }
        if let Some(token) = get(ENV_TOKEN) {
            self.auth = AuthConfig::bearer(token);
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            match secs.trim().parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring invalid {ENV_TIMEOUT_SECS}: {secs}"),
            }
        }
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        if self.service_url.trim().is_empty() {
            return Err(Error::missing_field("service_url"));
        }
        if self.service_name.contains('/') {
            return Err(Error::invalid_value(
                "service_name",
                "must be a single path segment",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "timeout_secs",
                "must be greater than zero",
            ));
        }
        self.base_url()?;
        Ok(())
    }

    /// Base URL every endpoint path is joined to
    ///
    /// `service_url` plus `service_name` as a trailing path segment. An empty
    /// `service_name` leaves `service_url` as is.
    pub fn base_url(&self) -> Result<Url> {
        let mut url = Url::parse(self.service_url.trim())?;
        if !self.service_name.is_empty() {
            url.path_segments_mut()
                .map_err(|()| {
                    Error::invalid_value(
                        "service_url",
                        format!("{} cannot be a base URL", self.service_url),
                    )
                })?
                .pop_if_empty()
                .push(&self.service_name);
        }
        Ok(url)
    }

    /// HTTP transport settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let timeout = Duration::from_secs(self.timeout_secs);
        let mut builder = HttpClientConfig::builder().timeout(timeout);
        for (key, value) in &self.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        builder.build()
    }
}
