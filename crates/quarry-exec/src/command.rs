use std::fmt;
use std::path::{Path, PathBuf};

/// A command line to hand to a [`crate::CommandRunner`].
///
/// Program, arguments, working directory. Building one has no side
/// effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_args() {
        let cmd = CommandLine::new("webget").arg("--quiet").args(["a", "b"]);
        assert_eq!(cmd.program(), "webget");
        assert_eq!(cmd.get_args(), &["--quiet", "a", "b"]);
    }

    #[test]
    fn display_renders_program_and_args() {
        let cmd = CommandLine::new("webget").arg("https://example.com/pkg.tar.gz");
        assert_eq!(cmd.to_string(), "webget https://example.com/pkg.tar.gz");
    }

    #[test]
    fn display_without_args_is_program_only() {
        assert_eq!(CommandLine::new("webget").to_string(), "webget");
    }

    #[test]
    fn working_dir_defaults_to_none() {
        let cmd = CommandLine::new("webget");
        assert!(cmd.working_dir().is_none());
        let cmd = cmd.current_dir("/opt/packages");
        assert_eq!(cmd.working_dir(), Some(Path::new("/opt/packages")));
    }
}
