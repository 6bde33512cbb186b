//! licensegate - client SDK for a licensing/authentication service
//!
//! Authenticates end users and validates license keys with blocking JSON
//! POSTs. Each request carries the application secret and, for user
//! requests, a hardware identifier.
//!
//! ```no_run
//! use licensegate::{AuthClient, ClientConfig};
//!
//! let config = ClientConfig::new("https://auth.example.com/api/v1", "app-secret", "myapp", "1.0");
//! let client = AuthClient::new(config)?;
//!
//! let result = client.login("alice", "password", None);
//! if result.success() {
//!     if let Some(user) = result.user() {
//!         println!("Welcome, {}!", user.username);
//!     }
//! } else {
//!     println!("Error: {}", result.error().unwrap_or("unknown error"));
//! }
//! # Ok::<(), licensegate::ClientError>(())
//! ```
//!
//! Failures never escape as `Err` from a request: transport errors and
//! unparseable bodies come back as `{"success": false, "error": ...}`.

pub mod client;
pub mod config;
pub mod error;
pub mod hwid;
pub mod response;
pub mod testing;
pub mod transport;

pub use client::AuthClient;
pub use config::ClientConfig;
pub use error::{ClientError, TransportError};
pub use hwid::{HwidSource, get_hwid};
pub use response::{LicenseInfo, Response, UserInfo};
pub use transport::{HttpTransport, Transport, TransportContext};
