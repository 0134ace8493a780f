//! Endpoint descriptors and request binding
//!
//! An [`Endpoint`] is one row of the REST binding table: a method, a path
//! template such as `/v1/catalogs/{catalog_id}/tables`, and the query
//! parameters it accepts. Binding checks parameter names before anything is
//! sent, then turns them into a URL and query pairs.

use crate::error::{Error, Result};
use crate::pagination::START_PARAM;
use crate::types::{scalar_to_string, JsonObject, JsonValue, Method};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Matches a whole path segment naming a parameter: `{bucket_id}`
static PATH_PARAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{([a-z_][a-z0-9_]*)\}$").unwrap());

/// Query parameters shared by every list endpoint
pub const LIST_QUERY: &[&str] = &[START_PARAM, "limit"];

/// One remote procedure of the control-plane API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name, e.g. `list_buckets`
    pub name: &'static str,
    /// Resource group, e.g. `buckets`
    pub resource: &'static str,
    /// HTTP method
    pub method: Method,
    /// Path template relative to the service base URL
    pub path: &'static str,
    /// Accepted query parameters
    pub query: &'static [&'static str],
    /// Whether a JSON request body is accepted
    pub body: bool,
    /// Whether responses are `{items, next}` pages
    pub paginated: bool,
}

impl Endpoint {
    /// Describe an endpoint with no query parameters and no body
    pub const fn new(
        name: &'static str,
        resource: &'static str,
        method: Method,
        path: &'static str,
    ) -> Self {
        Self {
            name,
            resource,
            method,
            path,
            query: &[],
            body: false,
            paginated: false,
        }
    }

    /// Set the accepted query parameters
    #[must_use]
    pub const fn with_query(self, query: &'static [&'static str]) -> Self {
        Self { query, ..self }
    }

    /// Accept a JSON request body
    #[must_use]
    pub const fn with_body(self) -> Self {
        Self { body: true, ..self }
    }

    /// Mark as a paginated list endpoint
    #[must_use]
    pub const fn paginated(self) -> Self {
        Self {
            paginated: true,
            ..self
        }
    }

    /// Names of the parameters substituted into the path
    pub fn path_params(&self) -> Vec<&'static str> {
        self.path
            .split('/')
            .filter_map(path_param_name)
            .collect()
    }

    /// Check whether `name` is a path or query parameter of this endpoint
    pub fn accepts(&self, name: &str) -> bool {
        self.query.iter().any(|q| *q == name) || self.path_params().iter().any(|p| *p == name)
    }

    /// Validate parameter names and path parameter values
    pub fn validate(&self, params: &JsonObject) -> Result<()> {
        for key in params.keys() {
            if !self.accepts(key) {
                return Err(Error::unknown_param(self.name, key.as_str()));
            }
        }

        for name in self.path_params() {
            let value = params
                .get(name)
                .ok_or_else(|| Error::missing_param(self.name, name))?;
            match scalar_to_string(value) {
                Some(s) if s.is_empty() => {
                    return Err(Error::invalid_param(self.name, name, "must not be empty"));
                }
                Some(_) => {}
                None => {
                    return Err(Error::invalid_param(
                        self.name,
                        name,
                        format!("expected a string or number, got {value}"),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Build the URL and query pairs for a call against `base`
    pub fn bind(&self, base: &Url, params: &JsonObject) -> Result<BoundRequest> {
        self.validate(params)?;

        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                Error::invalid_value("service_url", format!("{base} cannot be a base URL"))
            })?;
            segments.pop_if_empty();
            for segment in self.path.split('/').filter(|s| !s.is_empty()) {
                match path_param_name(segment) {
                    Some(name) => {
                        // validate() guarantees a non-empty scalar
                        let value = params
                            .get(name)
                            .and_then(scalar_to_string)
                            .unwrap_or_default();
                        segments.push(&value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        let path_params = self.path_params();
        let mut query = Vec::new();
        for (key, value) in params {
            if !path_params.iter().any(|p| *p == key.as_str()) {
                push_query(&mut query, key, value);
            }
        }

        Ok(BoundRequest {
            method: self.method,
            url,
            query,
        })
    }
}

/// A request ready to be handed to the HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundRequest {
    /// HTTP method
    pub method: Method,
    /// Full URL, path parameters substituted
    pub url: Url,
    /// Query pairs
    pub query: Vec<(String, String)>,
}

/// Extract `name` from a `{name}` path segment
fn path_param_name(segment: &'static str) -> Option<&'static str> {
    PATH_PARAM_REGEX
        .captures(segment)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Append one parameter as query pairs
///
/// `null` is skipped, arrays repeat the key, objects are sent as JSON.
fn push_query(query: &mut Vec<(String, String)>, key: &str, value: &JsonValue) {
    match value {
        JsonValue::Null => {}
        JsonValue::Array(values) => {
            for v in values {
                push_query(query, key, v);
            }
        }
        JsonValue::Object(_) => query.push((key.to_string(), value.to_string())),
        scalar => {
            if let Some(s) = scalar_to_string(scalar) {
                query.push((key.to_string(), s));
            }
        }
    }
}
