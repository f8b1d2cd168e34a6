//! Operating system detection and platform-family classification.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sysinfo::System;

use crate::error::Error;

/// Operating system types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    Macos,
    Linux,
    Unknown,
}

/// Platform family a download toolset is built for.
///
/// Every supported OS collapses into one of exactly two families; the
/// installer only dispatches on "Windows-like or not".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Posix,
    Windows,
}

static HOST_OS: Lazy<Os> = Lazy::new(probe);

fn probe() -> Os {
    match System::name().as_deref() {
        Some("Windows") => Os::Windows,
        Some("macOS") => Os::Macos,
        Some(name) if name.starts_with("Linux") => Os::Linux,
        _ => Os::Unknown,
    }
}

/// Detect the current operating system.
pub fn detect() -> Os {
    *HOST_OS
}

impl Os {
    /// Classify this OS into its platform family.
    ///
    /// `Os::Unknown` has no family; requests cannot be built for a host
    /// the probe could not identify.
    pub fn family(self) -> Result<Family, Error> {
        match self {
            Os::Windows => Ok(Family::Windows),
            Os::Macos | Os::Linux => Ok(Family::Posix),
            Os::Unknown => Err(Error::UnsupportedOs),
        }
    }
}

impl Family {
    /// Family of the host this process runs on.
    pub fn current() -> Result<Family, Error> {
        detect().family()
    }
}
