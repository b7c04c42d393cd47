//! Test utilities for extforge unit tests.
//!
//! Provides a stub [`Executor`] that records the commands it is asked to
//! run instead of spawning them, plus fixtures for source trees.
//!
//! # Example
//!
//! ```rust,ignore
//! use extforge::test_support::{write_sources, RecordingExecutor};
//!
//! #[test]
//! fn test_example() {
//!     let mut exec = RecordingExecutor::new().fail_on("swig", 1);
//!     // Pass `&mut exec` to `ops::build` and inspect `exec.calls()`...
//! }
//! ```

pub mod fixtures;

use crate::builder::CommandSpec;
use crate::util::errors::ExecutionError;
use crate::util::process::Executor;

pub use fixtures::*;

/// Executor stub that records every command.
///
/// Commands succeed unless their program matches a configured failure.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: Vec<CommandSpec>,
    failures: Vec<(String, i32)>,
}

impl RecordingExecutor {
    /// Create an executor where every command succeeds.
    pub fn new() -> Self {
        RecordingExecutor::default()
    }

    /// Make commands whose program is `program` exit with `code`.
    pub fn fail_on(mut self, program: &str, code: i32) -> Self {
        self.failures.push((program.to_string(), code));
        self
    }

    /// All commands run so far, in order.
    pub fn calls(&self) -> &[CommandSpec] {
        &self.calls
    }

    /// Program of each recorded command, in order.
    pub fn programs(&self) -> Vec<String> {
        self.calls
            .iter()
            .map(|c| c.program.display().to_string())
            .collect()
    }
}

impl Executor for RecordingExecutor {
    fn run(&mut self, command: &CommandSpec) -> Result<(), ExecutionError> {
        self.calls.push(command.clone());

        let program = command.program.display().to_string();
        match self.failures.iter().find(|(p, _)| *p == program) {
            Some((_, code)) => Err(ExecutionError::Failed {
                command: command.display_command(),
                status: Some(*code),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_executor_records_and_fails() {
        let mut exec = RecordingExecutor::new().fail_on("c++", 7);

        assert!(exec.run(&CommandSpec::new("swig").arg("foo.i")).is_ok());
        let err = exec.run(&CommandSpec::new("c++")).unwrap_err();

        assert_eq!(err.status(), Some(7));
        assert_eq!(exec.programs(), vec!["swig", "c++"]);
        assert_eq!(exec.calls()[0].args, vec!["foo.i"]);
    }
}
