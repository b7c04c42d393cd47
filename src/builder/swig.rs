//! Interface code generator (SWIG) invocation.

use crate::core::BuildPlan;
use crate::util::config::ToolchainConfig;

use super::CommandSpec;

/// Target language and flavor: Python 3 bindings over C++ sources.
pub const TARGET_FLAGS: [&str; 3] = ["-python", "-c++", "-py3"];

/// Build the code generation command for `plan`.
///
/// Emits native builtin types instead of Python shadow classes, names the
/// module, sends helper files to the build directory, and writes the wrapper
/// to the planned path. The interface file is always the last argument.
pub fn codegen_command(plan: &BuildPlan, toolchain: &ToolchainConfig) -> CommandSpec {
    CommandSpec::new(toolchain.generator())
        .args(TARGET_FLAGS)
        .arg("-builtin")
        .arg("-module")
        .arg(plan.module_name.as_str())
        .arg("-outdir")
        .arg(plan.build_dir.display().to_string())
        .arg("-o")
        .arg(plan.wrapper.display().to_string())
        .arg(plan.interface.display().to_string())
}
