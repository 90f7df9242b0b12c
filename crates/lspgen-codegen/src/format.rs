//! External source formatting services.
//!
//! The generator treats the Go pretty-printer as a stateless service: one
//! call per output unit, raw text in, canonical text or an error out.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::FormatError;

/// A service that canonically formats generated source
pub trait SourceFormatter {
    /// Short name for log messages
    fn name(&self) -> &str;

    /// Format `source`, or explain why it cannot be formatted
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Formats Go source by piping it through `gofmt`
#[derive(Debug, Clone)]
pub struct Gofmt {
    program: PathBuf,
    program_name: String,
}

impl Default for Gofmt {
    fn default() -> Self {
        Self::with_program("gofmt")
    }
}

impl Gofmt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific formatter executable that reads stdin and writes stdout
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let program_name = program.display().to_string();
        Self {
            program,
            program_name,
        }
    }
}

impl SourceFormatter for Gofmt {
    fn name(&self) -> &str {
        &self.program_name
    }

    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FormatError::Unavailable {
                program: self.program_name.clone(),
                source,
            })?;

        let io_error = |source: std::io::Error| FormatError::Io {
            program: self.program_name.clone(),
            source,
        };

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| io_error(std::io::Error::other("stdin was not captured")))?;

        // Feed stdin from a second thread so a large file cannot deadlock on a full pipe.
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(source.as_bytes()));
            let output = child.wait_with_output();
            (writer.join(), output)
        });
        let output = output.map_err(io_error)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(FormatError::Rejected {
                program: self.program_name.clone(),
                message,
            });
        }

        match written {
            Ok(result) => result.map_err(io_error)?,
            Err(_) => return Err(io_error(std::io::Error::other("stdin writer panicked"))),
        }

        debug!(program = %self.program_name, bytes = output.stdout.len(), "formatted source");
        String::from_utf8(output.stdout).map_err(|_| FormatError::InvalidOutput {
            program: self.program_name.clone(),
        })
    }
}

/// Leaves source untouched; never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct Unformatted;

impl SourceFormatter for Unformatted {
    fn name(&self) -> &str {
        "none"
    }

    fn format(&self, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}
