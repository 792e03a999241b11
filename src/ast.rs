// Directive definitions for the machfile format

/// One semantic instruction parsed from a line of the input file.
///
/// Directives are ephemeral: each is executed as soon as its line is read and
/// nothing is retained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `RUN <command>`: free-form shell text to execute.
    Run { command: String },
    /// `COPY <src> <dst>`: copy a file or directory tree.
    Copy { source: String, destination: String },
    /// `USER <name>`: impersonation target for subsequent `RUN` directives.
    SetUser { name: String },
    /// Any other non-empty line; advisory only, never fatal.
    Unsupported { raw: String },
    /// Blank line or `#` comment.
    Ignored,
}
