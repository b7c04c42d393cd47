//! Command construction for the two external build steps.
//!
//! Builders are pure: they read a resolved plan and the toolchain
//! configuration and never touch the filesystem.

pub mod command;
pub mod compiler;
pub mod swig;

pub use command::CommandSpec;
pub use compiler::compile_command;
pub use swig::codegen_command;
