//! Tests for the auth module

use super::*;
use base64::Engine;
use std::collections::HashMap;

fn build(auth: &Authenticator) -> reqwest::Request {
    let client = reqwest::Client::new();
    let req = client.get("https://example.com/v1/buckets");
    auth.apply(req).build().unwrap()
}

#[test]
fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let built = build(&auth);
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_bearer_auth() {
    let auth = Authenticator::new(AuthConfig::bearer("tok-123"));
    let built = build(&auth);
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer tok-123"
    );
}

#[test]
fn test_api_key_default_header() {
    let auth = Authenticator::new(AuthConfig::ApiKey {
        header_name: None,
        prefix: None,
        value: "test-key-123".to_string(),
    });

    let built = build(&auth);
    assert_eq!(
        built.headers().get(DEFAULT_API_KEY_HEADER).unwrap(),
        "test-key-123"
    );
}

#[test]
fn test_api_key_header_with_prefix() {
    let auth = Authenticator::new(AuthConfig::ApiKey {
        header_name: Some("Authorization".to_string()),
        prefix: Some("Token ".to_string()),
        value: "my-token".to_string(),
    });

    let built = build(&auth);
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Token my-token"
    );
}

#[test]
fn test_basic_auth() {
    let auth = Authenticator::new(AuthConfig::Basic {
        username: "user".to_string(),
        password: "pass".to_string(),
    });

    let built = build(&auth);
    let expected = format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode("user:pass")
    );
    assert_eq!(built.headers().get("Authorization").unwrap(), &expected);
}

#[test]
fn test_custom_headers() {
    let mut headers = HashMap::new();
    headers.insert("X-Tenant".to_string(), "acme".to_string());
    headers.insert("X-Workspace".to_string(), "ws-1".to_string());
    let auth = Authenticator::new(AuthConfig::CustomHeaders { headers });

    let built = build(&auth);
    assert_eq!(built.headers().get("X-Tenant").unwrap(), "acme");
    assert_eq!(built.headers().get("X-Workspace").unwrap(), "ws-1");
}

#[test]
fn test_debug_hides_secret() {
    let auth = Authenticator::new(AuthConfig::bearer("super-secret"));
    let debug = format!("{auth:?}");
    assert!(debug.contains("bearer"));
    assert!(!debug.contains("super-secret"));
}
