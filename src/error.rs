//! Error types for client construction and transport calls

use thiserror::Error;

/// Errors that can occur while building an [`AuthClient`](crate::AuthClient)
///
/// Request operations never return these; see [`Response`](crate::Response).
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No configuration was baked in at build time
    #[error("No embedded configuration: {0} was not set at build time")]
    MissingEmbedded(&'static str),

    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`ClientConfig`](crate::ClientConfig)
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// HTTP backend could not be initialized
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors reported by a [`Transport`](crate::Transport)
#[derive(Error, Debug)]
pub enum TransportError {
    /// Per-call HTTP client could not be created
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request did not complete (DNS, connect, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// TLS settings could not be built
    #[error("Failed to initialize TLS: {0}")]
    Tls(#[source] rustls::Error),

    /// Failure reported by a non-HTTP transport
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Create a transport error from a plain message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
