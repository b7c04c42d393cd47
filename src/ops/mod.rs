//! High-level operations.

pub mod ext_build;

pub use ext_build::{build, BuildOptions, BuildOutcome};
