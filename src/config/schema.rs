/// Configuration schema for the auth client
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ClientError;

/// Fixed per-application settings, set once when the client is built
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the licensing API (e.g. `https://auth.example.com/api/v1`)
    pub api_url: String,

    /// Application secret sent with every request
    pub app_secret: String,

    /// Application name, reported in the User-Agent
    #[serde(default)]
    pub app_name: String,

    /// Application version, reported in the User-Agent
    #[serde(default)]
    pub version: String,
}

impl ClientConfig {
    pub fn new(
        api_url: impl Into<String>,
        app_secret: impl Into<String>,
        app_name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            app_secret: app_secret.into(),
            app_name: app_name.into(),
            version: version.into(),
        }
    }

    /// Full URL for an endpoint path such as `/login`
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), endpoint)
    }

    /// User-Agent header value: `<app_name>/<version>`, or the crate's own
    /// name when the application didn't set one
    pub fn user_agent(&self) -> String {
        match (self.app_name.is_empty(), self.version.is_empty()) {
            (true, _) => format!("licensegate/{}", env!("CARGO_PKG_VERSION")),
            (false, true) => self.app_name.clone(),
            (false, false) => format!("{}/{}", self.app_name, self.version),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.api_url.is_empty() {
            return Err(ClientError::InvalidConfig("api_url cannot be empty".to_string()));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(
                "api_url must start with http:// or https://".to_string(),
            ));
        }

        if self.app_secret.is_empty() {
            return Err(ClientError::InvalidConfig("app_secret cannot be empty".to_string()));
        }

        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("app_secret", &"<redacted>")
            .field("app_name", &self.app_name)
            .field("version", &self.version)
            .finish()
    }
}
