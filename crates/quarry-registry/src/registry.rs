use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A name-to-filesystem-location record for an installed package or
/// toolset.
///
/// Created once when an install succeeds and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyPath {
    pub name: String,
    pub path: PathBuf,
}

impl DependencyPath {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry lookup for '{name}' failed: {reason}")]
    Lookup { name: String, reason: String },

    #[error("failed to register '{name}': {reason}")]
    Register { name: String, reason: String },
}

/// Package registry collaborator.
///
/// Lookup resolves toolsets before an install runs; registration records
/// the installed package. Absence is data (`Ok(None)`), not an error —
/// the caller decides whether a missing entry is fatal. The registry
/// enforces its own concurrency discipline.
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Look up a previously registered dependency by logical name.
    async fn get_package(&self, name: &str) -> Result<Option<DependencyPath>, RegistryError>;

    /// Record an installed dependency.
    async fn register_package(&self, dep: DependencyPath) -> Result<(), RegistryError>;
}
