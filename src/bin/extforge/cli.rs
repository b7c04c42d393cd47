//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser};
use clap_complete::Shell;

/// extforge - build a Python extension module from a SWIG interface and C++ sources
#[derive(Parser)]
#[command(name = "extforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,

    #[command(flatten)]
    pub build: BuildArgs,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Primary source file to compile
    #[arg(value_name = "SOURCE", required_unless_present = "completions")]
    pub source: Option<PathBuf>,

    /// Additional source to compile (repeatable)
    #[arg(
        short = 'a',
        long = "additional-sources",
        alias = "additional_sources",
        value_name = "PATH"
    )]
    pub additional_sources: Vec<PathBuf>,

    /// Output directory [default: .]
    #[arg(short = 'b', long = "build", value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Interface file [default: <source_dir>/<source_base>.i]
    #[arg(short = 'i', long, value_name = "PATH")]
    pub interface: Option<PathBuf>,

    /// Extension module output [default: <build>/_<source_base>.so]
    #[arg(short = 'e', long, value_name = "PATH")]
    pub extension: Option<PathBuf>,

    /// Generated wrapper output [default: <build>/<source_base>_wrapper.cc]
    #[arg(short = 'w', long, value_name = "PATH")]
    pub wrapper: Option<PathBuf>,

    /// Module name [default: <source_base>]
    #[arg(short = 'm', long, value_name = "NAME")]
    pub module: Option<String>,

    /// Directory containing Python headers
    #[arg(
        short = 'I',
        long = "include-path",
        alias = "python-include-path",
        value_name = "DIR"
    )]
    pub include_path: Option<PathBuf>,

    /// Directory containing the Python library
    #[arg(
        short = 'L',
        long = "lib-path",
        alias = "python-lib-path",
        value_name = "DIR"
    )]
    pub lib_path: Option<PathBuf>,

    /// Python library to link (without -l)
    #[arg(
        short = 'l',
        long = "lib-name",
        alias = "python-lib",
        value_name = "NAME"
    )]
    pub lib_name: Option<String>,

    /// Tag the module name with a timestamp
    #[arg(short = 't', long)]
    pub have_tag: bool,

    /// Tag the module name with TAG (implies --have-tag)
    #[arg(short = 'T', long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Toolchain config file, applied over global and project config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the commands without running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Emit the build plan as JSON (no build)
    #[arg(long, conflicts_with = "dry_run")]
    pub plan: bool,
}
