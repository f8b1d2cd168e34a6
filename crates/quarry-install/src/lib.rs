//! Dependency installation workflow for the Quarry harness.
//!
//! One [`Installer::execute`] call takes a package from URI to registered
//! dependency path in four ordered steps: resolve the download toolset,
//! download the archive, extract it, register the result. Toolset
//! resolution fails fast; download, extraction, and registration run as
//! one unit of work under a configurable [`RetryPolicy`], and the whole
//! workflow races a caller-supplied cancellation token.

pub mod error;
pub mod extract;
pub mod format;
pub mod installer;
pub mod paths;
pub mod request;
pub mod retry;
pub mod toolset;

pub use error::InstallError;
pub use extract::{ArchiveExtractor, ExtractError};
pub use format::{ArchiveFormat, TarCompress};
pub use installer::Installer;
pub use paths::InstallPaths;
pub use request::{InstallRequest, RequestError};
pub use retry::{RetryError, RetryPolicy};
pub use toolset::toolset_binary;
