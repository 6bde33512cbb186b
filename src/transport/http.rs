/// HTTP transport backed by reqwest's blocking client
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use super::Transport;
use super::context::TransportContext;
use crate::error::TransportError;

/// Fixed timeout for every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default transport: one blocking POST per call, no connection reuse
#[derive(Debug, Clone)]
pub struct HttpTransport {
    context: TransportContext,
    user_agent: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Acquire the shared transport context and check that the HTTP
    /// backend can be initialized
    pub fn new(user_agent: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_timeout(user_agent, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(
        user_agent: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let context = TransportContext::acquire()?;
        let user_agent = user_agent.into();

        // Surface backend init failures at construction, not per request
        context.handle(timeout, &user_agent)?;

        Ok(Self {
            context,
            user_agent,
            timeout,
        })
    }

    pub fn context(&self) -> &TransportContext {
        &self.context
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: String) -> Result<Vec<u8>, TransportError> {
        let client = self.context.handle(self.timeout, &self.user_agent)?;

        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(TransportError::Request)?;

        tracing::debug!(url, status = response.status().as_u16(), "response received");

        // Raw bytes: decoding is the parser's job, lossy UTF-8 would hide bad bodies
        let bytes = response.bytes().map_err(TransportError::Body)?;
        Ok(bytes.to_vec())
    }
}
