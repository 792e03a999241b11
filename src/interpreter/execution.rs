//! Process-spawning and path-copy effects.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use crate::error::Error;

/// Shell used for RUN directives when no override is configured.
const DEFAULT_SHELL: &str = "sh";

/// Environment variable that overrides the shell used for RUN directives.
pub const SHELL_ENV_VAR: &str = "MACHFILE_SHELL";

/// Resolve the shell binary used to execute RUN directives.
///
/// Honors `MACHFILE_SHELL` when the named binary can be found on `PATH`,
/// otherwise falls back to `sh`.
pub(crate) fn resolve_shell() -> String {
    if let Ok(custom) = std::env::var(SHELL_ENV_VAR)
        && which::which(&custom).is_ok()
    {
        return custom;
    }
    DEFAULT_SHELL.to_string()
}

/// Build the argument vector for a RUN directive.
///
/// The command text is always passed as a single argv element to
/// `<shell> -c`; impersonation prepends `sudo -u <user>` rather than splicing
/// the user into a second shell string.
pub(crate) fn command_argv(command: &str, user: Option<&str>, shell: &str) -> Vec<String> {
    match user {
        Some(user) => vec![
            "sudo".to_string(),
            "-u".to_string(),
            user.to_string(),
            shell.to_string(),
            "-c".to_string(),
            command.to_string(),
        ],
        None => vec![shell.to_string(), "-c".to_string(), command.to_string()],
    }
}

/// Execute a RUN directive, capturing stdout and stderr separately.
///
/// On success the captured stdout is printed. On a non-zero exit the captured
/// stderr is printed to the error stream and the child's own exit code is
/// carried back in the returned error. Output is never streamed live.
pub(crate) fn run_command(command: &str, user: Option<&str>, shell: &str) -> Result<(), Error> {
    let argv = command_argv(command, user, shell);

    let output = Command::new(&argv[0])
        .args(&argv[1..])
        .output()
        .map_err(|source| Error::Spawn {
            command: command.to_string(),
            source,
        })?;

    if output.status.success() {
        print!("{}", String::from_utf8_lossy(&output.stdout));
        // Captured output may not end in a newline, so flush explicitly.
        let _ = io::stdout().flush();
        Ok(())
    } else {
        eprint!("{}", String::from_utf8_lossy(&output.stderr));
        Err(Error::CommandFailed {
            command: command.to_string(),
            // A signal death carries no exit code; report a plain failure.
            code: output.status.code().unwrap_or(crate::error::FAILURE_EXIT_CODE),
        })
    }
}

/// Execute a COPY directive.
///
/// File sources overwrite an existing destination file; directory sources are
/// copied recursively and refuse an existing destination directory (there are
/// no merge semantics). Prints a confirmation line on success.
pub(crate) fn copy_path(source: &Path, destination: &Path) -> Result<(), Error> {
    let metadata =
        fs::metadata(source).map_err(|e| copy_error(source, destination, e))?;

    if metadata.is_dir() {
        if destination.is_dir() {
            return Err(Error::DestinationExists {
                destination: destination.display().to_string(),
            });
        }
        copy_dir_recursive(source, destination)
            .map_err(|e| copy_error(source, destination, e))?;
    } else {
        copy_file_with_times(source, destination)
            .map_err(|e| copy_error(source, destination, e))?;
    }

    println!("Copied {} to {}", source.display(), destination.display());
    Ok(())
}

fn copy_error(source: &Path, destination: &Path, err: io::Error) -> Error {
    Error::Copy {
        source_path: source.display().to_string(),
        destination: destination.display().to_string(),
        source: err,
    }
}

/// Copy a single file, carrying over its modified time.
///
/// `fs::copy` already carries permission bits.
fn copy_file_with_times(source: &Path, destination: &Path) -> io::Result<()> {
    fs::copy(source, destination)?;
    copy_mtime(source, destination)
}

/// Apply the source's modified time to the destination.
fn copy_mtime(source: &Path, destination: &Path) -> io::Result<()> {
    let modified = fs::metadata(source)?.modified()?;
    // Read-only open suffices for futimens; directories cannot be opened
    // for writing on Unix.
    fs::File::open(destination)?.set_modified(modified)
}

/// Recursively copy a directory tree.
///
/// `fs::copy` carries permission bits for files; directory permissions and
/// modified times are applied from the source entry after creation.
fn copy_dir_recursive(source: &Path, destination: &Path) -> io::Result<()> {
    fs::create_dir_all(destination)?;
    fs::set_permissions(destination, fs::metadata(source)?.permissions())?;

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = destination.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            copy_file_with_times(&entry.path(), &target)?;
        }
    }
    // Applied last so writing the entries does not clobber the directory's
    // own modified time.
    copy_mtime(source, destination)
}
