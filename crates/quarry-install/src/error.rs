//! Error taxonomy for the install workflow.

use std::io;

use thiserror::Error;

use quarry_exec::ExecError;
use quarry_registry::RegistryError;

use crate::extract::ExtractError;

/// Failures of the install workflow.
///
/// `MissingToolset`, `UnsupportedArchive`, and `Workspace` are
/// preconditions: they abort before the first download attempt and are
/// never retried. `Exec`, `Extract`, and `Registry` are transient and go
/// through the retry policy; exhaustion wraps the last of them in
/// `RetriesExhausted`. `Cancelled` is a distinct outcome, not a failure
/// classification.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The download toolset is absent from the registry. The message
    /// prefix is a contract: harness components match on it.
    #[error("Missing required package. Install the '{name}' toolset before installing dependencies")]
    MissingToolset { name: String },

    #[error("'{file_name}' has no recognized archive extension")]
    UnsupportedArchive { file_name: String },

    #[error("failed to prepare packages root: {0}")]
    Workspace(#[source] io::Error),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("installation cancelled")]
    Cancelled,

    #[error("installation failed after {attempts} attempts")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<InstallError>,
    },
}

impl InstallError {
    /// Transient-failure predicate for the default retry classification:
    /// everything the download/extract/register chain raises retries,
    /// preconditions and cancellation do not.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Exec(_) | Self::Extract(_) | Self::Registry(_))
    }
}
