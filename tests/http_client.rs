//! End-to-end tests of the HTTP transport against a mock licensing server

use httpmock::prelude::*;
use licensegate::{AuthClient, ClientConfig, HwidSource};
use pretty_assertions::assert_eq;
use serde_json::json;

struct FixedSource;

impl HwidSource for FixedSource {
    fn query(&self) -> String {
        "1122334455".to_string()
    }
}

fn client_for(server: &MockServer) -> AuthClient {
    let config = ClientConfig::new(server.url("/api/v1"), "app-secret", "demo", "1.0");
    AuthClient::new(config).unwrap().with_hwid_source(FixedSource)
}

#[test]
fn test_login_success_passthrough() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/login")
            .header("content-type", "application/json")
            .header("user-agent", "demo/1.0")
            .json_body(json!({
                "secret": "app-secret",
                "username": "alice",
                "password": "hunter2",
                "hwid": "1122334455"
            }));
        then.status(200).json_body(json!({
            "success": true,
            "user": { "username": "alice", "expiry": null, "hwid": "1122334455" }
        }));
    });

    let client = client_for(&server);
    let response = client.login("alice", "hunter2", None);

    mock.assert();
    assert!(response.success());
    assert_eq!(
        response.as_value(),
        &json!({
            "success": true,
            "user": { "username": "alice", "expiry": null, "hwid": "1122334455" }
        })
    );
    assert_eq!(response.user().unwrap().username, "alice");
}

#[test]
fn test_login_rejected_on_401_passes_body_through() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/v1/login");
        then.status(401)
            .json_body(json!({ "success": false, "error": "Invalid credentials" }));
    });

    let client = client_for(&server);
    let response = client.login("alice", "wrong", Some("explicit-hwid"));

    assert!(!response.success());
    assert_eq!(response.error(), Some("Invalid credentials"));
}

#[test]
fn test_check_license_sends_exact_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/check")
            .body(r#"{"secret":"app-secret","license":"ABC-123"}"#);
        then.status(200).json_body(json!({
            "success": true,
            "license": { "key": "ABC-123", "is_used": true, "created_at": "2026-01-15T10:00:00" }
        }));
    });

    let client = client_for(&server);
    let response = client.check_license("ABC-123");

    mock.assert();
    let license = response.license().unwrap();
    assert_eq!(license.key, "ABC-123");
    assert!(license.is_used);
}

#[test]
fn test_register_posts_to_register_endpoint() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/register").json_body(json!({
            "secret": "app-secret",
            "username": "bob",
            "password": "pw",
            "license": "KEY-9",
            "hwid": "1122334455"
        }));
        then.status(200)
            .json_body(json!({ "success": true, "message": "Registration successful" }));
    });

    let client = client_for(&server);
    let response = client.register("bob", "pw", "KEY-9", None);

    mock.assert();
    assert!(response.success());
    assert_eq!(response.get("message"), Some(&json!("Registration successful")));
}

#[test]
fn test_html_body_is_parse_failure() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/v1/check");
        then.status(502).body("<html>error</html>");
    });

    let client = client_for(&server);
    let response = client.check_license("ABC-123");

    assert_eq!(
        response.as_value(),
        &json!({ "success": false, "error": "Failed to parse response" })
    );
}

#[test]
fn test_connection_refused_is_transport_failure() {
    let config = ClientConfig::new("http://127.0.0.1:1/api/v1", "app-secret", "demo", "1.0");
    let client = AuthClient::new(config).unwrap();

    let response = client.login("alice", "pw", Some("hw"));

    assert!(!response.success());
    let error = response.error().unwrap();
    assert!(!error.is_empty());
    assert_ne!(error, "Failed to parse response");
}

#[test]
fn test_trailing_slash_in_base_url() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/check");
        then.status(200).json_body(json!({ "success": true }));
    });

    let config = ClientConfig::new(server.url("/api/v1/"), "app-secret", "demo", "1.0");
    let client = AuthClient::new(config).unwrap();

    assert!(client.check_license("X").success());
    mock.assert();
}

#[test]
fn test_invalid_utf8_body_is_parse_failure() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/v1/check");
        then.status(200)
            .header("content-type", "application/json")
            .body(b"{\"success\":true,\"name\":\"\xff\xfe\"}".to_vec());
    });

    let client = client_for(&server);
    let response = client.check_license("ABC-123");

    assert!(!response.success());
    assert_eq!(response.error(), Some("Failed to parse response"));
    assert_eq!(response.get("name"), None);
}
