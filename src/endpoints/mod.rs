//! Endpoint module
//!
//! The REST binding layer as a static table instead of one method per call.
//!
//! # Overview
//!
//! Each [`Endpoint`] names a method, a path template and the parameters it
//! accepts. [`Endpoint::bind`] rejects unknown or missing parameters before
//! any I/O and produces a [`BoundRequest`] for the HTTP client.

mod endpoint;
mod registry;

pub use endpoint::{BoundRequest, Endpoint, LIST_QUERY};
pub use registry::{all, find, list_endpoints, lookup, ENDPOINTS};
