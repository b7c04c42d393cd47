//! Build plan: every path a build reads or writes, resolved up front.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::request::{source_stem, BuildRequest};

/// Extension of the generated wrapper source.
pub const WRAPPER_EXTENSION: &str = "cc";

/// File suffix of a loadable extension module on this platform.
pub fn module_suffix() -> &'static str {
    if cfg!(windows) {
        "pyd"
    } else {
        "so"
    }
}

/// Resolved paths and module name for one build.
///
/// Each field is either the caller's override or derived from
/// `source_dir`, `source_base` and `build_dir` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    /// Primary source, exactly as given
    pub source: PathBuf,
    /// Directory holding the source (`.` when it has none)
    pub source_dir: PathBuf,
    /// Source file name without its extension
    pub source_base: String,
    pub build_dir: PathBuf,
    pub interface: PathBuf,
    pub extension: PathBuf,
    pub wrapper: PathBuf,
    /// Module name after tagging
    pub module_name: String,
}

impl BuildPlan {
    /// Whether the build directory must be created before running tools.
    pub fn needs_build_dir(&self) -> bool {
        self.build_dir != Path::new(".")
    }
}

/// Derive a [`BuildPlan`] from a request.
///
/// Never fails; an empty source stem must be rejected beforehand with
/// [`BuildRequest::validate`]. Output is a pure function of the request
/// unless the tag policy reads the clock.
pub fn resolve(request: &BuildRequest) -> BuildPlan {
    let source = request.source.clone();
    let parent = source.parent().filter(|p| !p.as_os_str().is_empty());
    let source_dir = parent
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let source_base = source_stem(&source);

    let build_dir = request
        .build_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    // A bare file name keeps a bare interface name (`foo.i`, not `./foo.i`)
    let interface = request.interface.clone().unwrap_or_else(|| {
        let file_name = format!("{}.i", source_base);
        match parent {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    });

    let extension = request.extension.clone().unwrap_or_else(|| {
        build_dir.join(format!("_{}.{}", source_base, module_suffix()))
    });

    let wrapper = request.wrapper.clone().unwrap_or_else(|| {
        build_dir.join(format!("{}_wrapper.{}", source_base, WRAPPER_EXTENSION))
    });

    let base_module = request.module.as_deref().unwrap_or(&source_base);
    let module_name = request.tag.apply(base_module);

    tracing::debug!(
        source = %source.display(),
        module = %module_name,
        build_dir = %build_dir.display(),
        "resolved build plan"
    );

    BuildPlan {
        source,
        source_dir,
        source_base,
        build_dir,
        interface,
        extension,
        wrapper,
        module_name,
    }
}
