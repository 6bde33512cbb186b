/// Hardware identifier module - identifier sent with login and register
pub mod source;

pub use source::{get_hwid, platform_source, FallbackSource, HwidSource, UNKNOWN_HWID};

#[cfg(windows)]
pub use source::VolumeSerialSource;
