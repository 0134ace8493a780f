//! Error types for the lakehouse SDK
//!
//! Every public API returns `Result<T, Error>` where `Error` is defined here.
//! Errors raised by the HTTP collaborator travel through the pager untouched.

use thiserror::Error;

/// The main error type for the lakehouse SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Endpoint Binding Errors
    // ============================================================================
    #[error("Unknown endpoint: {name}")]
    UnknownEndpoint { name: String },

    #[error("Endpoint '{endpoint}' does not accept parameter '{param}'")]
    UnknownParameter { endpoint: String, param: String },

    #[error("Endpoint '{endpoint}' requires parameter '{param}'")]
    MissingParameter { endpoint: String, param: String },

    #[error("Invalid value for parameter '{param}' of '{endpoint}': {message}")]
    InvalidParameterValue {
        endpoint: String,
        param: String,
        message: String,
    },

    #[error("Endpoint '{endpoint}' is not paginated")]
    NotPaginated { endpoint: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Pagination cursor '{param}' must not be set by the caller (got '{value}')")]
    CursorPreset { param: String, value: String },

    #[error("Pager is exhausted: no more pages to fetch")]
    PagerExhausted,

    #[error("Server returned the same cursor twice: {cursor}")]
    RepeatedCursor { cursor: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an unknown endpoint error
    pub fn unknown_endpoint(name: impl Into<String>) -> Self {
        Self::UnknownEndpoint { name: name.into() }
    }

    /// Create an unknown parameter error
    pub fn unknown_param(endpoint: impl Into<String>, param: impl Into<String>) -> Self {
        Self::UnknownParameter {
            endpoint: endpoint.into(),
            param: param.into(),
        }
    }

    /// Create a missing parameter error
    pub fn missing_param(endpoint: impl Into<String>, param: impl Into<String>) -> Self {
        Self::MissingParameter {
            endpoint: endpoint.into(),
            param: param.into(),
        }
    }

    /// Create an invalid parameter value error
    pub fn invalid_param(
        endpoint: impl Into<String>,
        param: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameterValue {
            endpoint: endpoint.into(),
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create a cursor preset error
    pub fn cursor_preset(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self::CursorPreset {
            param: param.into(),
            value: value.into(),
        }
    }

    /// HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a caller bug rather than an upstream failure
    ///
    /// These are raised before any request is sent.
    pub fn is_client_misuse(&self) -> bool {
        matches!(
            self,
            Error::UnknownEndpoint { .. }
                | Error::UnknownParameter { .. }
                | Error::MissingParameter { .. }
                | Error::InvalidParameterValue { .. }
                | Error::NotPaginated { .. }
                | Error::CursorPreset { .. }
                | Error::PagerExhausted
        )
    }
}

/// Result type alias for the lakehouse SDK
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("service_url");
        assert_eq!(
            err.to_string(),
            "Missing required config field: service_url"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::cursor_preset("start", "tok");
        assert_eq!(
            err.to_string(),
            "Pagination cursor 'start' must not be set by the caller (got 'tok')"
        );

        let err = Error::unknown_param("list_buckets", "colour");
        assert_eq!(
            err.to_string(),
            "Endpoint 'list_buckets' does not accept parameter 'colour'"
        );
    }

    #[test]
    fn test_status() {
        assert_eq!(Error::http_status(503, "").status(), Some(503));
        assert_eq!(Error::PagerExhausted.status(), None);
    }

    #[test]
    fn test_is_client_misuse() {
        assert!(Error::PagerExhausted.is_client_misuse());
        assert!(Error::cursor_preset("start", "x").is_client_misuse());
        assert!(Error::unknown_endpoint("nope").is_client_misuse());
        assert!(Error::missing_param("get_bucket", "bucket_id").is_client_misuse());

        assert!(!Error::http_status(500, "").is_client_misuse());
        assert!(!Error::RepeatedCursor {
            cursor: "a".to_string()
        }
        .is_client_misuse());
        assert!(!Error::config("bad").is_client_misuse());
    }
}
