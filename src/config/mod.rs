/// Configuration module - Build and load client configuration
pub mod schema;
pub mod loader;
pub mod embedded;

pub use schema::ClientConfig;
pub use loader::{adjacent_config_path, load_config, resolve_config};
pub use embedded::load_embedded_config;
