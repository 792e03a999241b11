//! # machfile
//!
//! Reads a Dockerfile-like file and runs its `RUN`, `COPY` and `USER`
//! directives against the local machine, in file order, stopping at the
//! first failure.
//!
//! ## Usage
//!
//! - Execute a directive file: `machfile ./Machfile`
//! - Resolve COPY sources elsewhere: `machfile --context ./assets ./Machfile`
//!
//! See README.md for the supported directive subset.

fn main() {
    std::process::exit(machfile::cli::run_cli());
}
