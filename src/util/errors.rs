//! Error types for the build pipeline.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Failure to run one external tool.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("`{program}` not found in PATH")]
    NotFound { program: String },

    #[error("failed to spawn `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed with {}", describe_status(.status))]
    Failed {
        command: String,
        /// Exit code, or `None` when the process was killed by a signal
        status: Option<i32>,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl ExecutionError {
    /// The tool's own exit code, if it ran and exited normally.
    pub fn status(&self) -> Option<i32> {
        match self {
            ExecutionError::Failed { status, .. } => *status,
            _ => None,
        }
    }
}

/// Error from a complete build.
///
/// The first failing step aborts the pipeline; no later step runs.
#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error("invalid build request: {0}")]
    #[diagnostic(
        code(extforge::configuration),
        help("pass an existing source file, e.g. `extforge src/graph.cc`")
    )]
    Configuration(String),

    #[error("failed to create build directory `{}`", .path.display())]
    #[diagnostic(
        code(extforge::filesystem),
        help("check that the path is valid and writable")
    )]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("code generation failed")]
    #[diagnostic(
        code(extforge::codegen),
        help("see the generator output above; the compile step was skipped")
    )]
    Codegen(#[source] ExecutionError),

    #[error("compilation failed")]
    #[diagnostic(
        code(extforge::compile),
        help("see the compiler output above")
    )]
    Compile(#[source] ExecutionError),
}

impl BuildError {
    /// Process exit code that reflects this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::Codegen(e) | BuildError::Compile(e) => match e.status() {
                Some(code) if code != 0 => code,
                _ => 1,
            },
            BuildError::Configuration(_) | BuildError::Filesystem { .. } => 1,
        }
    }
}
