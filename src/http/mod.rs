//! HTTP client module
//!
//! The transport every endpoint call goes through.
//!
//! # Features
//!
//! - **Authentication**: Integration with the auth module
//! - **Error Classification**: Non-2xx statuses become `Error::HttpStatus`
//! - **JSON Decoding**: Typed responses via serde
//!
//! There is no retry or backoff; callers that want them wrap the client.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
