//! Process invocation seam for Quarry.
//!
//! [`CommandLine`] is plain data — orchestration code derives and logs
//! the exact invocation before anything runs. [`CommandRunner`] is the
//! effect trait; [`TokioRunner`] is the production implementation.

mod command;
mod runner;

pub use command::CommandLine;
pub use runner::{CommandRunner, ExecError, TokioRunner};
