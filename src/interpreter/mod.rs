// Interpreter that executes directives against the local machine

mod execution;

pub use execution::SHELL_ENV_VAR;

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::Directive;
use crate::error::Error;
use crate::parser;

/// Executes machfile directives line by line, in file order.
///
/// The only state carried between lines is the current impersonation target
/// (last `USER` wins, never cleared) plus fixed configuration captured at
/// construction. Execution is fully synchronous: each directive completes
/// before the next line is read, and the first RUN or COPY failure aborts
/// the whole run.
pub struct Interpreter {
    current_user: Option<String>,
    context: Option<PathBuf>,
    shell: String,
}

impl Interpreter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_user: None,
            context: None,
            shell: execution::resolve_shell(),
        }
    }

    /// Resolve relative COPY sources against `context` instead of the
    /// current working directory.
    #[must_use]
    pub fn with_context(mut self, context: Option<PathBuf>) -> Self {
        self.context = context;
        self
    }

    /// Current impersonation target, if a `USER` directive has been seen.
    #[must_use]
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Read `path` and execute every directive in order, stopping at the
    /// first RUN or COPY failure.
    pub fn run_file(&mut self, path: &Path) -> Result<(), Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.run_script(&text)
    }

    /// Execute every line of `script` in order.
    pub fn run_script(&mut self, script: &str) -> Result<(), Error> {
        for line in script.lines() {
            self.execute_line(line)?;
        }
        Ok(())
    }

    /// Parse and execute a single line.
    pub fn execute_line(&mut self, line: &str) -> Result<(), Error> {
        let directive = parser::parse_line(line)?;
        self.execute_directive(directive)
    }

    fn execute_directive(&mut self, directive: Directive) -> Result<(), Error> {
        match directive {
            Directive::Ignored => Ok(()),
            Directive::Run { command } => {
                println!("Running: {command}");
                execution::run_command(&command, self.current_user.as_deref(), &self.shell)
            }
            Directive::Copy {
                source,
                destination,
            } => {
                let source = self.resolve_source(&source);
                execution::copy_path(&source, Path::new(&destination))
            }
            Directive::SetUser { name } => {
                println!("Switching to user: {name}");
                self.current_user = Some(name);
                Ok(())
            }
            Directive::Unsupported { raw } => {
                eprintln!("Unsupported command: {raw}");
                Ok(())
            }
        }
    }

    fn resolve_source(&self, source: &str) -> PathBuf {
        match &self.context {
            Some(base) if Path::new(source).is_relative() => base.join(source),
            _ => PathBuf::from(source),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
