//! Implementation of an extension module build.
//!
//! The pipeline is strictly linear:
//! validate → ensure build dir → resolve paths → codegen → compile.
//! The first failure ends the build; nothing after it runs.

use serde::Serialize;

use crate::builder::{codegen_command, compile_command, CommandSpec};
use crate::core::{resolve, BuildPlan, BuildRequest};
use crate::util::config::ToolchainConfig;
use crate::util::errors::BuildError;
use crate::util::fs::ensure_dir;
use crate::util::process::Executor;

/// Options for a build.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Resolve and construct commands only; touch nothing, spawn nothing
    pub dry_run: bool,
}

/// What a build resolved and ran.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    pub plan: BuildPlan,
    pub codegen: CommandSpec,
    pub compile: CommandSpec,
}

/// Build one extension module.
///
/// `toolchain` supplies defaults the request does not override; `executor`
/// runs the two external commands in order.
pub fn build(
    request: &BuildRequest,
    toolchain: &ToolchainConfig,
    executor: &mut dyn Executor,
    opts: &BuildOptions,
) -> Result<BuildOutcome, BuildError> {
    request.validate()?;

    let plan = resolve(request);
    let span = tracing::info_span!("build", module = %plan.module_name);
    let _enter = span.enter();

    let codegen = codegen_command(&plan, toolchain);
    let compile = compile_command(&plan, request, toolchain);

    if opts.dry_run {
        tracing::debug!("dry run, skipping execution");
        return Ok(BuildOutcome {
            plan,
            codegen,
            compile,
        });
    }

    if plan.needs_build_dir() {
        ensure_dir(&plan.build_dir)?;
    }

    tracing::debug!(interface = %plan.interface.display(), "generating wrapper");
    executor.run(&codegen).map_err(BuildError::Codegen)?;

    tracing::debug!(extension = %plan.extension.display(), "compiling extension");
    executor.run(&compile).map_err(BuildError::Compile)?;

    Ok(BuildOutcome {
        plan,
        codegen,
        compile,
    })
}
