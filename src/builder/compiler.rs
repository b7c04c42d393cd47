//! C++ compiler invocation producing the extension module.

use std::path::Path;

use crate::core::{BuildPlan, BuildRequest};
use crate::util::config::ToolchainConfig;

use super::CommandSpec;

/// Flags every extension build is compiled with.
pub const BASE_FLAGS: [&str; 5] = ["-O3", "-Wall", "-std=c++11", "-shared", "-fPIC"];

/// Build the compile-and-link command for `plan`.
///
/// Argument layout:
/// 1. base flags, then configured `cxxflags`
/// 2. `-I<source_dir>`
/// 3. primary source, wrapper, additional sources (in request order)
/// 4. Python include dir, library dir, library name; each taken from the
///    request, else the toolchain, else left out
/// 5. configured `ldflags`
/// 6. `-o <extension>`
pub fn compile_command(
    plan: &BuildPlan,
    request: &BuildRequest,
    toolchain: &ToolchainConfig,
) -> CommandSpec {
    let settings = &toolchain.toolchain;

    let mut cmd = CommandSpec::new(toolchain.compiler())
        .args(BASE_FLAGS)
        .args(settings.cxxflags.iter().cloned())
        .arg(include_flag(&plan.source_dir))
        .arg(plan.source.display().to_string())
        .arg(plan.wrapper.display().to_string())
        .args(
            request
                .additional_sources
                .iter()
                .map(|p| p.display().to_string()),
        );

    let include_path = request
        .include_path
        .as_deref()
        .or(settings.python_include_path.as_deref());
    if let Some(dir) = include_path {
        cmd = cmd.arg(include_flag(dir));
    }

    let lib_path = request
        .lib_path
        .as_deref()
        .or(settings.python_lib_path.as_deref());
    if let Some(dir) = lib_path {
        cmd = cmd.arg(format!("-L{}", dir.display()));
    }

    let lib_name = request
        .lib_name
        .as_deref()
        .or(settings.python_lib.as_deref());
    if let Some(lib) = lib_name {
        cmd = cmd.arg(format!("-l{}", lib));
    }

    cmd.args(settings.ldflags.iter().cloned())
        .arg("-o")
        .arg(plan.extension.display().to_string())
}

fn include_flag(dir: &Path) -> String {
    format!("-I{}", dir.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::core::resolve;

    fn python_toolchain() -> ToolchainConfig {
        let mut toolchain = ToolchainConfig::default();
        toolchain.toolchain.python_include_path = Some(PathBuf::from("/usr/include/python3.11"));
        toolchain.toolchain.python_lib_path = Some(PathBuf::from("/usr/lib/python3.11/config"));
        toolchain.toolchain.python_lib = Some("python3.11".to_string());
        toolchain
    }

    #[test]
    fn test_compile_command_minimal() {
        let req = BuildRequest::new("foo.cc");
        let plan = resolve(&req);
        let cmd = compile_command(&plan, &req, &ToolchainConfig::default());

        assert_eq!(cmd.program, PathBuf::from("c++"));
        assert_eq!(
            cmd.args,
            vec![
                "-O3",
                "-Wall",
                "-std=c++11",
                "-shared",
                "-fPIC",
                "-I.",
                "foo.cc",
                "./foo_wrapper.cc",
                "-o",
                plan.extension.display().to_string().as_str(),
            ]
        );
    }

    #[test]
    fn test_compile_command_omits_unset_python_flags() {
        let req = BuildRequest::new("foo.cc");
        let plan = resolve(&req);
        let cmd = compile_command(&plan, &req, &ToolchainConfig::default());

        // Only the source-dir include, no library flags
        assert_eq!(cmd.args.iter().filter(|a| a.starts_with("-I")).count(), 1);
        assert!(!cmd.args.iter().any(|a| a.starts_with("-L")));
        assert!(!cmd.args.iter().any(|a| a.starts_with("-l")));
    }

    #[test]
    fn test_compile_command_source_region_order() {
        let req = BuildRequest::new("foo.cc")
            .additional_source("a.cc")
            .additional_source("b.cc");
        let plan = resolve(&req);
        let cmd = compile_command(&plan, &req, &ToolchainConfig::default());

        let start = cmd.args.iter().position(|a| a == "foo.cc").unwrap();
        assert_eq!(
            &cmd.args[start..start + 4],
            ["foo.cc", "./foo_wrapper.cc", "a.cc", "b.cc"]
        );
    }

    #[test]
    fn test_compile_command_toolchain_defaults() {
        let req = BuildRequest::new("src/graph.cc").build_dir("out");
        let plan = resolve(&req);
        let cmd = compile_command(&plan, &req, &python_toolchain());

        let tail: Vec<&str> = cmd.args.iter().rev().take(5).rev().map(String::as_str).collect();
        assert_eq!(
            tail,
            vec![
                "-I/usr/include/python3.11",
                "-L/usr/lib/python3.11/config",
                "-lpython3.11",
                "-o",
                plan.extension.to_str().unwrap(),
            ]
        );
        assert!(cmd.args.contains(&"-Isrc".to_string()));
    }

    #[test]
    fn test_compile_command_request_overrides_toolchain() {
        let req = BuildRequest::new("foo.cc")
            .include_path("/opt/py/include")
            .lib_path("/opt/py/lib")
            .lib_name("python3.12");
        let plan = resolve(&req);
        let cmd = compile_command(&plan, &req, &python_toolchain());

        assert!(cmd.args.contains(&"-I/opt/py/include".to_string()));
        assert!(cmd.args.contains(&"-L/opt/py/lib".to_string()));
        assert!(cmd.args.contains(&"-lpython3.12".to_string()));
        assert!(!cmd.args.iter().any(|a| a.contains("python3.11")));
    }

    #[test]
    fn test_compile_command_extra_flags_placement() {
        let mut toolchain = python_toolchain();
        toolchain.toolchain.compiler = Some(PathBuf::from("clang++"));
        toolchain.toolchain.cxxflags = vec!["-g".to_string()];
        toolchain.toolchain.ldflags = vec!["-Wl,-undefined,dynamic_lookup".to_string()];

        let req = BuildRequest::new("foo.cc");
        let plan = resolve(&req);
        let cmd = compile_command(&plan, &req, &toolchain);

        assert_eq!(cmd.program, PathBuf::from("clang++"));
        let pos = |flag: &str| cmd.args.iter().position(|a| a == flag).unwrap();
        assert_eq!(pos("-g"), BASE_FLAGS.len());
        assert!(pos("-g") < pos("-I."));
        assert_eq!(pos("-Wl,-undefined,dynamic_lookup"), pos("-lpython3.11") + 1);
        assert_eq!(pos("-o"), cmd.args.len() - 2);
    }
}
