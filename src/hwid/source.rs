//! Hardware identifier sources
//!
//! Each source answers one question: what identifier should go into the
//! `hwid` field when the caller didn't supply one.

/// Value sent when no platform identifier can be obtained
pub const UNKNOWN_HWID: &str = "unknown";

/// Something that can produce a hardware identifier
pub trait HwidSource: Send + Sync {
    /// Compute the identifier. Never fails; returns [`UNKNOWN_HWID`] instead.
    fn query(&self) -> String;
}

/// Serial number of the primary system volume (`C:\`), in decimal
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeSerialSource;

#[cfg(windows)]
impl HwidSource for VolumeSerialSource {
    fn query(&self) -> String {
        use std::ptr;
        use winapi::shared::minwindef::DWORD;
        use winapi::um::fileapi::GetVolumeInformationA;

        let root = b"C:\\\0";
        let mut serial: DWORD = 0;

        let ok = unsafe {
            GetVolumeInformationA(
                root.as_ptr() as *const i8,
                ptr::null_mut(),
                0,
                &mut serial,
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                0,
            )
        };

        if ok != 0 {
            serial.to_string()
        } else {
            tracing::debug!(
                error = %std::io::Error::last_os_error(),
                "volume serial lookup failed"
            );
            UNKNOWN_HWID.to_string()
        }
    }
}

/// Source for platforms without a supported identifier
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSource;

impl HwidSource for FallbackSource {
    fn query(&self) -> String {
        UNKNOWN_HWID.to_string()
    }
}

/// The source compiled in for the current platform
pub fn platform_source() -> Box<dyn HwidSource> {
    #[cfg(windows)]
    {
        Box::new(VolumeSerialSource)
    }

    #[cfg(not(windows))]
    {
        Box::new(FallbackSource)
    }
}

/// Compute the hardware identifier for this machine. Not cached.
pub fn get_hwid() -> String {
    platform_source().query()
}
