//! Pagination types and traits
//!
//! Defines the request/response envelope shared by every paginated listing
//! and the `ListOperation` seam the pager calls through.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::future::Future;
use url::Url;

/// Query parameter carrying the continuation cursor
pub const START_PARAM: &str = "start";

/// Base used to resolve relative `next.href` values
const RELATIVE_BASE: &str = "http://localhost/";

// ============================================================================
// Page Request
// ============================================================================

/// Filter and query options sent with every page of a listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageRequest {
    params: JsonObject,
}

impl PageRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request from an existing parameter map
    pub fn from_params(params: JsonObject) -> Self {
        Self { params }
    }

    /// Add a parameter (builder style)
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Remove a parameter
    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        self.params.remove(key)
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.params.get(key)
    }

    /// The continuation cursor, if one is set
    pub fn cursor(&self) -> Option<&str> {
        self.params.get(START_PARAM).and_then(JsonValue::as_str)
    }

    /// Set the continuation cursor
    pub fn set_cursor(&mut self, cursor: impl Into<String>) {
        self.params
            .insert(START_PARAM.to_string(), JsonValue::String(cursor.into()));
    }

    /// Borrow the underlying parameter map
    pub fn params(&self) -> &JsonObject {
        &self.params
    }

    /// Consume the request and return the parameter map
    pub fn into_params(self) -> JsonObject {
        self.params
    }

    /// Check whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Reject a caller-supplied cursor
    ///
    /// A `start` key holding `null` or `""` is treated as absent and removed.
    pub(crate) fn ensure_no_cursor(&mut self) -> Result<()> {
        match self.params.get(START_PARAM) {
            None => Ok(()),
            Some(JsonValue::Null) => {
                self.params.remove(START_PARAM);
                Ok(())
            }
            Some(JsonValue::String(s)) if s.is_empty() => {
                self.params.remove(START_PARAM);
                Ok(())
            }
            Some(JsonValue::String(s)) => Err(Error::cursor_preset(START_PARAM, s.as_str())),
            Some(other) => Err(Error::cursor_preset(START_PARAM, other.to_string())),
        }
    }
}

impl From<JsonObject> for PageRequest {
    fn from(params: JsonObject) -> Self {
        Self::from_params(params)
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for PageRequest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Page Response
// ============================================================================

/// Link to the following page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextLink {
    /// URL whose query string carries the next cursor
    pub href: String,
}

impl NextLink {
    /// Create a link
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// Extract the continuation cursor from this link
    pub fn cursor(&self) -> Result<Option<String>> {
        extract_cursor(&self.href, START_PARAM)
    }
}

/// One page of a listing: the items plus an optional link to the next page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// Records on this page (may be empty)
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Continuation descriptor; absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NextLink>,
}

impl<T> PageResponse<T> {
    /// A page with no continuation
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// A page followed by another one at `href`
    pub fn with_next(items: Vec<T>, href: impl Into<String>) -> Self {
        Self {
            items,
            next: Some(NextLink::new(href)),
        }
    }

    /// The cursor for the following page, `None` when this is the last page
    pub fn next_cursor(&self) -> Result<Option<String>> {
        match &self.next {
            Some(link) => link.cursor(),
            None => Ok(None),
        }
    }
}

/// Extract a query parameter from an absolute or relative URL
///
/// Empty values count as absent.
pub fn extract_cursor(href: &str, param: &str) -> Result<Option<String>> {
    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)?.join(href)?,
        Err(e) => return Err(e.into()),
    };

    Ok(url
        .query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty()))
}

// ============================================================================
// List Operation
// ============================================================================

/// A single paginated list call
///
/// Implemented by the client's endpoint listers and by any closure of shape
/// `Fn(PageRequest) -> impl Future<Output = Result<PageResponse<T>>>`.
#[async_trait]
pub trait ListOperation<T>: Send + Sync {
    /// Fetch one page using the given parameters
    async fn list(&self, request: PageRequest) -> Result<PageResponse<T>>;
}

#[async_trait]
impl<T, F, Fut> ListOperation<T> for F
where
    T: Send + 'static,
    F: Fn(PageRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PageResponse<T>>> + Send + 'static,
{
    async fn list(&self, request: PageRequest) -> Result<PageResponse<T>> {
        (self)(request).await
    }
}
