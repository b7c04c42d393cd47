//! `extforge <SOURCE>`: build one extension module

use anyhow::{Context, Result};

use crate::cli::BuildArgs;
use extforge::core::{BuildRequest, Tag};
use extforge::ops::{build, BuildOptions};
use extforge::util::config::{
    global_toolchain_config_path, load_toolchain_config, project_toolchain_config_path,
};
use extforge::util::SystemExecutor;

pub fn execute(args: BuildArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;

    // Load toolchain configuration (global + project + --config), then env
    let global_path = global_toolchain_config_path();
    let mut toolchain = load_toolchain_config(
        global_path.as_deref(),
        &project_toolchain_config_path(&cwd),
        args.config.as_deref(),
    )?;
    toolchain.apply_env();

    let emit_plan = args.plan;
    let opts = BuildOptions {
        dry_run: args.dry_run || args.plan,
    };
    let request = to_request(args)?;

    let outcome = build(&request, &toolchain, &mut SystemExecutor, &opts)?;

    if emit_plan {
        let json = serde_json::to_string_pretty(&outcome)
            .context("failed to serialize build plan")?;
        println!("{}", json);
    } else if opts.dry_run {
        println!("{}", outcome.codegen.display_command());
        println!("{}", outcome.compile.display_command());
    } else {
        eprintln!(
            "    Finished `{}` -> {}",
            outcome.plan.module_name,
            outcome.plan.extension.display()
        );
    }

    Ok(())
}

fn to_request(args: BuildArgs) -> Result<BuildRequest> {
    let source = args.source.context("missing required argument <SOURCE>")?;

    // An explicit tag value turns tagging on by itself
    let tag = Tag::new(args.have_tag || args.tag.is_some(), args.tag);

    Ok(BuildRequest {
        source,
        additional_sources: args.additional_sources,
        build_dir: args.build_dir,
        interface: args.interface,
        extension: args.extension,
        wrapper: args.wrapper,
        module: args.module,
        include_path: args.include_path,
        lib_path: args.lib_path,
        lib_name: args.lib_name,
        tag,
    })
}
