//! User-facing build request.

use std::path::{Path, PathBuf};

use crate::core::tag::Tag;
use crate::util::errors::BuildError;

/// Everything the caller supplies for one build.
///
/// Only `source` is required. Every other field is an override; `None`
/// means "derive the default" (see [`crate::core::plan::resolve`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildRequest {
    /// Primary source file; its stem names every derived artifact
    pub source: PathBuf,
    /// Extra sources compiled after the wrapper, in order
    pub additional_sources: Vec<PathBuf>,
    /// Output directory (default `.`)
    pub build_dir: Option<PathBuf>,
    /// Interface-description input (default `<source_dir>/<stem>.i`)
    pub interface: Option<PathBuf>,
    /// Extension module output (default `<build_dir>/_<stem>.<suffix>`)
    pub extension: Option<PathBuf>,
    /// Generated wrapper output (default `<build_dir>/<stem>_wrapper.cc`)
    pub wrapper: Option<PathBuf>,
    /// Module name (default `<stem>`), tagged afterwards
    pub module: Option<String>,
    /// Python headers directory
    pub include_path: Option<PathBuf>,
    /// Python library directory
    pub lib_path: Option<PathBuf>,
    /// Python library to link against, without the `-l`
    pub lib_name: Option<String>,
    /// Module name tagging policy
    pub tag: Tag,
}

impl BuildRequest {
    /// Create a request for `source` with all defaults.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        BuildRequest {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn additional_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.additional_sources.push(path.into());
        self
    }

    pub fn build_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.build_dir = Some(path.into());
        self
    }

    pub fn interface(mut self, path: impl Into<PathBuf>) -> Self {
        self.interface = Some(path.into());
        self
    }

    pub fn extension(mut self, path: impl Into<PathBuf>) -> Self {
        self.extension = Some(path.into());
        self
    }

    pub fn wrapper(mut self, path: impl Into<PathBuf>) -> Self {
        self.wrapper = Some(path.into());
        self
    }

    pub fn module(mut self, name: impl Into<String>) -> Self {
        self.module = Some(name.into());
        self
    }

    pub fn include_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.include_path = Some(path.into());
        self
    }

    pub fn lib_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lib_path = Some(path.into());
        self
    }

    pub fn lib_name(mut self, name: impl Into<String>) -> Self {
        self.lib_name = Some(name.into());
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    /// Check the request before anything touches the filesystem or spawns.
    ///
    /// The source must be a non-empty path to an existing regular file with
    /// a non-empty stem.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.source.as_os_str().is_empty() {
            return Err(BuildError::Configuration(
                "source path is empty".to_string(),
            ));
        }

        // `graph/` names a directory, not a file; its base name is empty
        let trailing_separator = self
            .source
            .to_string_lossy()
            .ends_with(std::path::is_separator);
        if trailing_separator || source_stem(&self.source).is_empty() {
            return Err(BuildError::Configuration(format!(
                "source `{}` has an empty base name",
                self.source.display()
            )));
        }

        if !self.source.exists() {
            return Err(BuildError::Configuration(format!(
                "source `{}` does not exist",
                self.source.display()
            )));
        }

        if !self.source.is_file() {
            return Err(BuildError::Configuration(format!(
                "source `{}` is not a file",
                self.source.display()
            )));
        }

        Ok(())
    }
}

/// File name of `path` with its last extension removed.
pub(crate) fn source_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
