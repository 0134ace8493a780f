//! Authentication module
//!
//! Supports: Bearer, API Key, Basic, Custom Headers
//!
//! Credentials are static; resolving or refreshing them is left to the caller.

mod authenticator;
mod types;

pub use authenticator::{Authenticator, DEFAULT_API_KEY_HEADER};
pub use types::AuthConfig;

#[cfg(test)]
mod tests;
