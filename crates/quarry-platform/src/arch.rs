//! Architecture detection.

use serde::{Deserialize, Serialize};

/// CPU architecture types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X86,
    X86_64,
    Arm,
    Arm64,
    Unknown,
}

/// Detect current architecture.
pub fn detect() -> Arch {
    let cpu_arch = sysinfo::System::cpu_arch();
    match cpu_arch.as_str() {
        "i386" | "i686" => Arch::X86,
        "x86_64" => Arch::X86_64,
        "arm" | "armv7l" => Arch::Arm,
        "aarch64" | "arm64" => Arch::Arm64,
        _ => Arch::Unknown,
    }
}
