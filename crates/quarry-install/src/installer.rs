//! Retry-wrapped installation workflow.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use quarry_exec::{CommandLine, CommandRunner};
use quarry_registry::{DependencyPath, PackageRegistry};

use crate::error::InstallError;
use crate::extract::ArchiveExtractor;
use crate::format::ArchiveFormat;
use crate::paths::{InstallPaths, uri_file_name};
use crate::request::InstallRequest;
use crate::retry::{self, RetryError, RetryPolicy};
use crate::toolset::toolset_binary;

/// Installs one package per [`Installer::execute`] call: resolve the
/// download toolset, fetch the archive, extract it, register the result.
///
/// Collaborators are injected; the installer itself owns no I/O beyond
/// preparing the packages root and cleaning up the downloaded archive.
pub struct Installer {
    registry: Arc<dyn PackageRegistry>,
    extractor: Arc<dyn ArchiveExtractor>,
    runner: Arc<dyn CommandRunner>,
    packages_root: PathBuf,
    retry: RetryPolicy,
}

impl Installer {
    pub fn new(
        registry: Arc<dyn PackageRegistry>,
        extractor: Arc<dyn ArchiveExtractor>,
        runner: Arc<dyn CommandRunner>,
        packages_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            extractor,
            runner,
            packages_root: packages_root.into(),
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the default retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn packages_root(&self) -> &Path {
        &self.packages_root
    }

    /// Run the full install workflow for one request.
    ///
    /// Exactly one terminal outcome per call: the registered dependency
    /// path, a permanent precondition failure, `RetriesExhausted`
    /// carrying the last attempt's error, or `Cancelled`. The whole
    /// workflow races the token; an in-flight download or extraction is
    /// abandoned as soon as cancellation is observed.
    pub async fn execute(
        &self,
        request: &InstallRequest,
        cancel: &CancellationToken,
    ) -> Result<DependencyPath, InstallError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(InstallError::Cancelled),
            outcome = self.run(request, cancel) => outcome,
        }
    }

    async fn run(
        &self,
        request: &InstallRequest,
        cancel: &CancellationToken,
    ) -> Result<DependencyPath, InstallError> {
        let toolset = toolset_binary(request.platform());
        let resolved = self
            .registry
            .get_package(toolset)
            .await?
            .ok_or_else(|| InstallError::MissingToolset {
                name: toolset.to_string(),
            })?;
        debug!(toolset, path = %resolved.path.display(), "download toolset resolved");

        let file_name = uri_file_name(request.package_uri());
        let format = ArchiveFormat::from_file_name(file_name).ok_or_else(|| {
            InstallError::UnsupportedArchive {
                file_name: file_name.to_string(),
            }
        })?;
        let paths = InstallPaths::derive(&self.packages_root, request.package_uri());

        tokio::fs::create_dir_all(&self.packages_root)
            .await
            .map_err(InstallError::Workspace)?;

        let paths = &paths;
        let outcome = retry::run(&self.retry, cancel, InstallError::is_transient, move || {
            self.attempt(request, toolset, paths, format)
        })
        .await;

        match outcome {
            Ok(dep) => {
                info!(
                    package = request.package_name(),
                    path = %dep.path.display(),
                    "package installed"
                );
                Ok(dep)
            }
            Err(RetryError::Cancelled) => Err(InstallError::Cancelled),
            Err(RetryError::Exhausted {
                source: InstallError::Cancelled,
                ..
            }) => Err(InstallError::Cancelled),
            Err(RetryError::Exhausted { attempts, source }) => {
                warn!(
                    package = request.package_name(),
                    attempts,
                    error = %source,
                    "installation failed"
                );
                Err(InstallError::RetriesExhausted {
                    attempts,
                    source: Box::new(source),
                })
            }
        }
    }

    /// One download + extract + register unit of work.
    ///
    /// No partial-success state survives an attempt: the downloaded
    /// archive is removed on every exit path, and a retry re-runs the
    /// whole sequence over the same derived paths.
    async fn attempt(
        &self,
        request: &InstallRequest,
        toolset: &str,
        paths: &InstallPaths,
        format: ArchiveFormat,
    ) -> Result<DependencyPath, InstallError> {
        let _download = DownloadGuard::new(&paths.download);

        let command = CommandLine::new(toolset)
            .arg(request.package_uri())
            .current_dir(&self.packages_root);
        debug!(command = %command, "downloading package archive");
        self.runner.run(&command).await?;

        debug!(
            archive = %paths.download.display(),
            destination = %paths.extraction.display(),
            "extracting package archive"
        );
        self.extractor
            .extract(&paths.download, &paths.extraction, format)
            .await?;

        let dep = DependencyPath::new(request.package_name(), paths.extraction.clone());
        self.registry.register_package(dep.clone()).await?;
        Ok(dep)
    }
}

/// Owns the downloaded archive for the duration of one attempt.
///
/// The extraction directory is the installed artifact; the archive is
/// removed when the guard drops, on success, failure, and cancellation
/// alike, so no attempt leaves a stale or partial download behind.
struct DownloadGuard<'a> {
    path: &'a Path,
}

impl<'a> DownloadGuard<'a> {
    fn new(path: &'a Path) -> Self {
        Self { path }
    }
}

impl Drop for DownloadGuard<'_> {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(error) = std::fs::remove_file(self.path) {
                debug!(path = %self.path.display(), %error, "failed to remove downloaded archive");
            }
        }
    }
}
