//! Download toolset selection.

use quarry_platform::Family;

/// Binary name of the download toolset on POSIX-family hosts.
pub const POSIX_TOOLSET: &str = "webget";

/// Binary name of the download toolset on Windows-family hosts.
pub const WINDOWS_TOOLSET: &str = "webget.exe";

/// Name of the download binary for a platform family.
///
/// Total over the family enum. Architecture only selects which pre-built
/// toolset package the harness fetched, never the binary name.
pub fn toolset_binary(family: Family) -> &'static str {
    match family {
        Family::Posix => POSIX_TOOLSET,
        Family::Windows => WINDOWS_TOOLSET,
    }
}
