//! Subprocess execution utilities.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::builder::CommandSpec;
use crate::util::errors::ExecutionError;

/// Log target of the command echo; kept visible even under `--quiet`.
pub const ECHO_TARGET: &str = "extforge::echo";

/// Runs one external command to completion.
///
/// The orchestrator only talks to this trait, so tests can swap in a stub
/// that records commands instead of spawning them.
pub trait Executor {
    /// Run `command`, blocking until it exits.
    fn run(&mut self, command: &CommandSpec) -> Result<(), ExecutionError>;
}

/// Executor that spawns real processes.
///
/// The command line is logged before spawning; the child inherits stdout
/// and stderr so tool diagnostics reach the operator unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run(&mut self, command: &CommandSpec) -> Result<(), ExecutionError> {
        let command_line = command.display_command();
        tracing::info!(target: ECHO_TARGET, "{}", command_line);

        let program = find_executable(&command.program).ok_or_else(|| ExecutionError::NotFound {
            program: command.program.display().to_string(),
        })?;
        tracing::debug!(program = %program.display(), "resolved executable");

        let status = ProcessBuilder::new(&program)
            .args(&command.args)
            .status()
            .map_err(|source| ExecutionError::Spawn {
                program: command.program.display().to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecutionError::Failed {
                command: command_line,
                status: status.code(),
            })
        }
    }
}

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Execute with inherited stdio and return the exit status.
    pub fn status(&self) -> std::io::Result<ExitStatus> {
        self.build_command().status()
    }
}

/// Find an executable in PATH (or check a path that names one directly).
pub fn find_executable(name: impl AsRef<OsStr>) -> Option<PathBuf> {
    which::which(name).ok()
}
