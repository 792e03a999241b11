// Line classification for the machfile format.
//
// Each line is parsed independently; no state is carried between lines and
// nothing here touches the filesystem or spawns processes, so every branch
// is unit-testable in isolation.

use crate::ast::Directive;
use crate::error::Error;

/// Classify a single line of a machfile.
///
/// The line is trimmed of surrounding whitespace first. An invalid `COPY`
/// (anything other than keyword + source + destination) is the only
/// parse-level error; unknown keywords are returned as
/// [`Directive::Unsupported`] so the caller can warn and continue.
pub fn parse_line(line: &str) -> Result<Directive, Error> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(Directive::Ignored);
    }

    if let Some(command) = line.strip_prefix("RUN ") {
        return Ok(Directive::Run {
            command: command.to_string(),
        });
    }

    if line.starts_with("COPY ") {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(Error::InvalidCopy {
                line: line.to_string(),
            });
        }
        return Ok(Directive::Copy {
            source: parts[1].to_string(),
            destination: parts[2].to_string(),
        });
    }

    if let Some(name) = line.strip_prefix("USER ") {
        // Trailing whitespace would otherwise end up inside the sudo argv.
        return Ok(Directive::SetUser {
            name: name.trim().to_string(),
        });
    }

    Ok(Directive::Unsupported {
        raw: line.to_string(),
    })
}
