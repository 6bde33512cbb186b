//! Test utilities for licensegate
//!
//! A transport double that records outgoing requests, so callers can check
//! exactly what their client would have sent without a network.

use parking_lot::Mutex;

use crate::error::TransportError;
use crate::transport::Transport;

/// One captured request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: String,
}

/// Transport double returning a canned reply
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use licensegate::{AuthClient, ClientConfig};
/// use licensegate::testing::RecordingTransport;
///
/// let transport = Arc::new(RecordingTransport::replying(r#"{"success":true}"#));
/// let config = ClientConfig::new("https://auth.example.com/api/v1", "secret", "demo", "1.0");
/// let client = AuthClient::with_transport(config, transport.clone()).unwrap();
///
/// assert!(client.check_license("ABC-123").success());
/// assert_eq!(
///     transport.requests()[0].body,
///     r#"{"secret":"secret","license":"ABC-123"}"#
/// );
/// ```
#[derive(Debug)]
pub struct RecordingTransport {
    reply: Result<Vec<u8>, String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingTransport {
    /// Complete every request with `body`
    pub fn replying(body: impl Into<Vec<u8>>) -> Self {
        Self {
            reply: Ok(body.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

impl Transport for RecordingTransport {
    fn post_json(&self, url: &str, body: String) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().push(RecordedRequest {
            url: url.to_string(),
            body,
        });

        match &self.reply {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(TransportError::other(message.clone())),
        }
    }
}
