//! Toolchain configuration for extforge.
//!
//! Defaults for the external tools and the Python include/library
//! locations live in `toolchain.toml`:
//! - Global: `~/.extforge/toolchain.toml` - User-wide defaults
//! - Project: `.extforge/toolchain.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, an explicit
//! `--config` file over both, and environment variables over everything.
//! Command-line overrides on the build request beat all of these.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default code generator executable.
pub const DEFAULT_GENERATOR: &str = "swig";

/// Default C++ compiler driver.
pub const DEFAULT_COMPILER: &str = "c++";

/// Environment variables read by [`ToolchainConfig::apply_env`].
pub mod env {
    pub const GENERATOR: &str = "EXTFORGE_GENERATOR";
    pub const COMPILER: &str = "EXTFORGE_COMPILER";
    pub const PYTHON_INCLUDE_PATH: &str = "PYTHON_INCLUDE_PATH";
    pub const PYTHON_LIB_PATH: &str = "PYTHON_LIB_PATH";
    pub const PYTHON_LIB: &str = "PYTHON_LIB";
}

/// Toolchain configuration injected into command construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Toolchain settings
    pub toolchain: ToolchainSettings,
}

/// Tool locations and Python build defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSettings {
    /// Interface code generator (e.g., /usr/local/bin/swig)
    pub generator: Option<PathBuf>,

    /// C++ compiler driver (e.g., /usr/bin/clang++)
    pub compiler: Option<PathBuf>,

    /// Directory containing `Python.h`
    pub python_include_path: Option<PathBuf>,

    /// Directory containing the Python library
    pub python_lib_path: Option<PathBuf>,

    /// Python library name, without `-l` (e.g., python3.11)
    pub python_lib: Option<String>,

    /// Additional compiler flags
    #[serde(default)]
    pub cxxflags: Vec<String>,

    /// Additional linker flags
    #[serde(default)]
    pub ldflags: Vec<String>,
}

impl ToolchainConfig {
    /// Load toolchain configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read toolchain config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse toolchain config: {}", path.display()))
    }

    /// Load toolchain configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to load toolchain config from {}: {:#}",
                    path.display(),
                    e
                );
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Code generator to invoke.
    pub fn generator(&self) -> &Path {
        self.toolchain
            .generator
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_GENERATOR))
    }

    /// Compiler driver to invoke.
    pub fn compiler(&self) -> &Path {
        self.toolchain
            .compiler
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_COMPILER))
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: ToolchainConfig) {
        let other = other.toolchain;
        if other.generator.is_some() {
            self.toolchain.generator = other.generator;
        }
        if other.compiler.is_some() {
            self.toolchain.compiler = other.compiler;
        }
        if other.python_include_path.is_some() {
            self.toolchain.python_include_path = other.python_include_path;
        }
        if other.python_lib_path.is_some() {
            self.toolchain.python_lib_path = other.python_lib_path;
        }
        if other.python_lib.is_some() {
            self.toolchain.python_lib = other.python_lib;
        }
        if !other.cxxflags.is_empty() {
            self.toolchain.cxxflags = other.cxxflags;
        }
        if !other.ldflags.is_empty() {
            self.toolchain.ldflags = other.ldflags;
        }
    }

    /// Apply environment overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply environment overrides using `lookup`. Empty values are ignored.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(v) = get(env::GENERATOR) {
            self.toolchain.generator = Some(PathBuf::from(v));
        }
        if let Some(v) = get(env::COMPILER) {
            self.toolchain.compiler = Some(PathBuf::from(v));
        }
        if let Some(v) = get(env::PYTHON_INCLUDE_PATH) {
            self.toolchain.python_include_path = Some(PathBuf::from(v));
        }
        if let Some(v) = get(env::PYTHON_LIB_PATH) {
            self.toolchain.python_lib_path = Some(PathBuf::from(v));
        }
        if let Some(v) = get(env::PYTHON_LIB) {
            self.toolchain.python_lib = Some(v);
        }
    }
}

/// Load merged toolchain configuration from files.
///
/// Order of precedence (highest to lowest):
/// 1. Explicit config file (must load if given)
/// 2. Project config (.extforge/toolchain.toml)
/// 3. Global config (~/.extforge/toolchain.toml)
/// 4. Defaults
///
/// Environment overrides are applied separately with
/// [`ToolchainConfig::apply_env`].
pub fn load_toolchain_config(
    global_path: Option<&Path>,
    project_path: &Path,
    explicit_path: Option<&Path>,
) -> Result<ToolchainConfig> {
    let mut config = ToolchainConfig::default();

    if let Some(global_path) = global_path {
        if global_path.exists() {
            config.merge(ToolchainConfig::load_or_default(global_path));
        }
    }

    if project_path.exists() {
        config.merge(ToolchainConfig::load_or_default(project_path));
    }

    if let Some(explicit_path) = explicit_path {
        config.merge(ToolchainConfig::load(explicit_path)?);
    }

    Ok(config)
}

/// Get the global extforge config directory (~/.extforge).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".extforge"))
}

/// Get the global toolchain config path (~/.extforge/toolchain.toml).
pub fn global_toolchain_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("toolchain.toml"))
}

/// Get the project toolchain config path (.extforge/toolchain.toml).
pub fn project_toolchain_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".extforge").join("toolchain.toml")
}
