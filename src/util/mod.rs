//! Shared utilities

pub mod config;
pub mod errors;
pub mod fs;
pub mod process;

pub use config::ToolchainConfig;
pub use errors::{BuildError, ExecutionError};
pub use process::{Executor, SystemExecutor};
