//! Transport module - how request bodies reach the licensing service

pub mod context;
pub mod http;

pub use context::{ContextStats, TransportContext};
pub use http::{HttpTransport, REQUEST_TIMEOUT};

use crate::error::TransportError;

/// Sends a JSON body and hands back the raw response body.
///
/// Implementations must not share mutable per-call state, since one client
/// may be used from several threads at once.
pub trait Transport: Send + Sync {
    /// POST `body` to `url` with `Content-Type: application/json`.
    ///
    /// `Ok` carries the raw response body once the exchange completed,
    /// whatever the HTTP status; `Err` means no body is available.
    fn post_json(&self, url: &str, body: String) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn post_json(&self, url: &str, body: String) -> Result<Vec<u8>, TransportError> {
        (**self).post_json(url, body)
    }
}
