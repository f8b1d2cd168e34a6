//! Archive extraction seam.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::format::ArchiveFormat;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to extract '{archive}': {reason}")]
    Failed { archive: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Extraction collaborator: unpacks `archive` into `destination`.
///
/// Implementations must tolerate an existing destination — a retried
/// attempt re-extracts over the previous output.
#[async_trait]
pub trait ArchiveExtractor: Send + Sync {
    async fn extract(
        &self,
        archive: &Path,
        destination: &Path,
        format: ArchiveFormat,
    ) -> Result<(), ExtractError>;
}
