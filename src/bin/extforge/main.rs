//! extforge CLI - build a Python extension module from a SWIG interface

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use extforge::util::process::ECHO_TARGET;
use extforge::BuildError;

mod cli;
mod commands;

use cli::Cli;

fn main() {
    if let Err(e) = run() {
        let code = match e.downcast::<BuildError>() {
            Ok(err) => {
                let code = err.exit_code();
                eprintln!("{:?}", miette::Report::new(err));
                code
            }
            Err(e) => {
                eprintln!("error: {:#}", e);
                1
            }
        };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging; RUST_LOG wins over the flags, except that the
    // command echo stays on at every level
    let default_filter = if cli.verbose {
        "extforge=debug"
    } else if cli.quiet {
        "extforge=warn"
    } else {
        "extforge=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter))
        .add_directive(format!("{}=info", ECHO_TARGET).parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    match cli.completions {
        Some(shell) => commands::completions::execute(shell),
        None => commands::build::execute(cli.build),
    }
}
