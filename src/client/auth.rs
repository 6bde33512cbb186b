//! The auth client: login, license check and registration.

use serde::Serialize;

use super::request::{
    CHECK_ENDPOINT, CheckRequest, LOGIN_ENDPOINT, LoginRequest, REGISTER_ENDPOINT,
    RegisterRequest,
};
use crate::config::{ClientConfig, load_embedded_config};
use crate::error::ClientError;
use crate::hwid::{HwidSource, platform_source};
use crate::response::Response;
use crate::transport::{HttpTransport, Transport};

/// Client for the licensing service (blocking).
///
/// Every request operation returns a [`Response`]; transport and parse
/// failures come back as `{"success": false, "error": ...}` rather than as
/// an `Err`. Safe to share between threads.
pub struct AuthClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
    hwid_source: Box<dyn HwidSource>,
}

impl AuthClient {
    /// Create a client using the default HTTP transport
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let transport = HttpTransport::new(config.user_agent())?;
        Self::with_transport(config, transport)
    }

    /// Create a client from the configuration baked in at build time
    pub fn from_embedded() -> Result<Self, ClientError> {
        Self::new(load_embedded_config()?)
    }

    /// Create a client with a caller-supplied transport
    pub fn with_transport(
        config: ClientConfig,
        transport: impl Transport + 'static,
    ) -> Result<Self, ClientError> {
        config.validate()?;

        Ok(Self {
            config,
            transport: Box::new(transport),
            hwid_source: platform_source(),
        })
    }

    /// Replace the source used when a call omits the hardware id
    pub fn with_hwid_source(mut self, source: impl HwidSource + 'static) -> Self {
        self.hwid_source = Box::new(source);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Hardware id this client sends when the caller doesn't pass one
    pub fn hwid(&self) -> String {
        self.hwid_source.query()
    }

    /// Authenticate a user. An absent or empty `hwid` is computed locally.
    pub fn login(&self, username: &str, password: &str, hwid: Option<&str>) -> Response {
        let hwid = self.resolve_hwid(hwid);

        let payload = LoginRequest {
            secret: &self.config.app_secret,
            username,
            password,
            hwid: &hwid,
        };

        self.http_post(LOGIN_ENDPOINT, &payload)
    }

    /// Check whether a license key is valid
    pub fn check_license(&self, license_key: &str) -> Response {
        let payload = CheckRequest {
            secret: &self.config.app_secret,
            license: license_key,
        };

        self.http_post(CHECK_ENDPOINT, &payload)
    }

    /// Register a new user against a license key
    pub fn register(
        &self,
        username: &str,
        password: &str,
        license_key: &str,
        hwid: Option<&str>,
    ) -> Response {
        let hwid = self.resolve_hwid(hwid);

        let payload = RegisterRequest {
            secret: &self.config.app_secret,
            username,
            password,
            license: license_key,
            hwid: &hwid,
        };

        self.http_post(REGISTER_ENDPOINT, &payload)
    }

    fn resolve_hwid(&self, hwid: Option<&str>) -> String {
        match hwid {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => self.hwid_source.query(),
        }
    }

    fn http_post<P: Serialize>(&self, endpoint: &str, payload: &P) -> Response {
        let body = match serde_json::to_string(payload) {
            Ok(body) => body,
            Err(e) => return Response::failure(e.to_string()),
        };

        let url = self.config.endpoint_url(endpoint);
        tracing::debug!(endpoint, url = %url, "POST");

        let raw = match self.transport.post_json(&url, body) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(endpoint, error = %e, "transport failure");
                return Response::failure(e.to_string());
            }
        };

        match serde_json::from_slice::<serde_json::Value>(&raw) {
            Ok(value) => Response::from(value),
            Err(e) => {
                tracing::warn!(endpoint, error = %e, body_len = raw.len(), "response is not JSON");
                Response::parse_failure()
            }
        }
    }
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
