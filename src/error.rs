//! Error types for the directive interpreter.
//!
//! All true errors are fatal to the run. They are returned as values up to
//! the top-level driver, which owns the single `process::exit`; nothing in
//! the library exits the process itself.

use std::io;
use std::path::PathBuf;

/// Exit code for usage errors, copy failures and unreadable input.
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error reading file '{}': {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    /// `COPY` with anything other than exactly two whitespace-separated
    /// paths. Paths containing spaces are unsupported by the format.
    #[error("Invalid COPY command: {line}")]
    InvalidCopy { line: String },

    /// The shell (or `sudo`) binary could not be spawned at all.
    #[error("Error running command '{command}': {source}")]
    Spawn { command: String, source: io::Error },

    /// The child exited non-zero. Its captured stderr has already been
    /// printed by the time this error is constructed.
    #[error("Command failed with exit code {code}: {command}")]
    CommandFailed { command: String, code: i32 },

    #[error("Error copying {source_path} to {destination}: {source}")]
    Copy {
        source_path: String,
        destination: String,
        source: io::Error,
    },

    /// Directory copies have no merge semantics.
    #[error("Destination directory already exists: {destination}")]
    DestinationExists { destination: String },
}

impl Error {
    /// The process exit code this error maps to.
    ///
    /// A failed `RUN` propagates the child's own exit code; everything else
    /// maps to [`FAILURE_EXIT_CODE`].
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CommandFailed { code, .. } => *code,
            _ => FAILURE_EXIT_CODE,
        }
    }
}
