use std::io;
use std::process::ExitStatus;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::command::CommandLine;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("'{command}' failed with {status}")]
    NonZeroExit { command: String, status: ExitStatus },
}

/// Process execution collaborator.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command to completion; any non-success exit is an error.
    async fn run(&self, command: &CommandLine) -> Result<(), ExecError>;
}

/// Production runner backed by `tokio::process`.
///
/// Children are spawned with `kill_on_drop`, so dropping the in-flight
/// future (cancellation) tears the process down with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioRunner;

impl TokioRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for TokioRunner {
    async fn run(&self, command: &CommandLine) -> Result<(), ExecError> {
        let mut cmd = tokio::process::Command::new(command.program());
        cmd.args(command.get_args());
        if let Some(dir) = command.working_dir() {
            cmd.current_dir(dir);
        }
        cmd.kill_on_drop(true);

        debug!(command = %command, "spawning process");
        let status = cmd.status().await.map_err(|source| ExecError::Spawn {
            command: command.to_string(),
            source,
        })?;

        if !status.success() {
            return Err(ExecError::NonZeroExit {
                command: command.to_string(),
                status,
            });
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn successful_exit_is_ok() {
        let runner = TokioRunner::new();
        let cmd = CommandLine::new("sh").arg("-c").arg("exit 0");
        runner.run(&cmd).await.unwrap();
    }

    #[tokio::test]
    async fn nonzero_exit_is_error() {
        let runner = TokioRunner::new();
        let cmd = CommandLine::new("sh").arg("-c").arg("exit 7");
        let err = runner.run(&cmd).await.unwrap_err();
        match err {
            ExecError::NonZeroExit { status, .. } => assert_eq!(status.code(), Some(7)),
            other => panic!("expected NonZeroExit, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let runner = TokioRunner::new();
        let cmd = CommandLine::new("quarry-no-such-binary-52341");
        let err = runner.run(&cmd).await.unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
    }

    #[tokio::test]
    async fn runs_in_requested_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let runner = TokioRunner::new();
        let cmd = CommandLine::new("sh")
            .arg("-c")
            .arg("touch marker")
            .current_dir(dir.path());
        runner.run(&cmd).await.unwrap();
        assert!(dir.path().join("marker").exists());
    }
}
