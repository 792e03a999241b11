//! CLI module containing the main entry point logic.
//!
//! This module is separated from main.rs so the argument handling and exit
//! code mapping stay testable; the binary's only job is `process::exit`.

use clap::Parser as ClapParser;
use std::path::PathBuf;

use crate::error::{Error, FAILURE_EXIT_CODE};
use crate::interpreter::Interpreter;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the machfile tool.
#[derive(ClapParser)]
#[command(name = "machfile")]
#[command(version = PKG_VERSION)]
#[command(about = "Run Dockerfile-like directives directly on the local machine", long_about = None)]
struct Cli {
    /// Directive file to execute
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Unexpected extra arguments (reported as a usage error)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    extra: Vec<String>,

    /// Base directory for relative COPY sources
    #[arg(long, value_name = "DIR")]
    context: Option<PathBuf>,
}

/// Usage line printed on an argument-count error. Goes to stdout, not stderr.
fn print_usage() {
    println!("Usage: machfile [OPTIONS] <FILE>");
}

/// Main CLI logic; returns the process exit code.
///
/// Exactly one positional argument is accepted. Zero or two-plus arguments
/// produce a usage message and exit code 1 before any file is read.
#[must_use]
pub fn run_cli() -> i32 {
    let cli = Cli::parse();

    let Some(file) = cli.file else {
        print_usage();
        return FAILURE_EXIT_CODE;
    };
    if !cli.extra.is_empty() {
        print_usage();
        return FAILURE_EXIT_CODE;
    }

    let mut interpreter = Interpreter::new().with_context(cli.context);
    match interpreter.run_file(&file) {
        Ok(()) => 0,
        Err(error) => {
            // A failed RUN already printed the child's captured stderr at
            // the failure site; a summary line here would be a duplicate.
            if !matches!(error, Error::CommandFailed { .. }) {
                eprintln!("{error}");
            }
            error.exit_code()
        }
    }
}
