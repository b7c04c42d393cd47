//! extforge - build a Python extension module from a SWIG interface
//!
//! This crate resolves every artifact path of an extension build from a
//! single source file, assembles the code generator and compiler command
//! lines, and runs them in order, stopping at the first failure.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for extforge unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a recording executor stub and source
/// tree fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{BuildPlan, BuildRequest, Tag};
pub use ops::{build, BuildOptions, BuildOutcome};
pub use util::{BuildError, ExecutionError, ToolchainConfig};
