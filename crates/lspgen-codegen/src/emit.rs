//! Formatting and persisting rendered output units.
//!
//! Every output unit is written to a temporary file in its destination
//! directory and renamed into place, so readers see either the previous file
//! or the complete new one.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::error::EmitError;
use crate::format::SourceFormatter;

/// The formatter rejected an output unit; its unformatted text was persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatWarning {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: written unformatted: {}",
            self.path.display(),
            self.message
        )
    }
}

/// Result of persisting one output unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub path: PathBuf,
    pub bytes_written: usize,
    pub warning: Option<FormatWarning>,
}

/// Formats rendered text and writes it atomically
pub struct Emitter<'a> {
    formatter: &'a dyn SourceFormatter,
}

impl<'a> Emitter<'a> {
    pub fn new(formatter: &'a dyn SourceFormatter) -> Self {
        Self { formatter }
    }

    /// Format `rendered` and persist it at `path`.
    ///
    /// If formatting fails the rendered text is persisted unchanged and the
    /// failure is returned as a [`FormatWarning`] instead of an error.
    pub fn emit(&self, path: &Path, rendered: &str) -> Result<Emitted, EmitError> {
        let (contents, warning) = match self.formatter.format(rendered) {
            Ok(formatted) => (formatted, None),
            Err(err) => {
                warn!(
                    path = %path.display(),
                    formatter = self.formatter.name(),
                    error = %err,
                    "formatting failed, writing unformatted source"
                );
                let warning = FormatWarning {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                };
                (rendered.to_string(), Some(warning))
            }
        };

        persist_atomic(path, contents.as_bytes())?;
        info!(path = %path.display(), bytes = contents.len(), "wrote generated source");

        Ok(Emitted {
            path: path.to_path_buf(),
            bytes_written: contents.len(),
            warning,
        })
    }
}

/// Write `contents` to `path` through a temporary file and rename.
pub fn persist_atomic(path: &Path, contents: &[u8]) -> Result<(), EmitError> {
    let io_error = |source: std::io::Error| EmitError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(io_error)?;

    let mut temp_file = NamedTempFile::new_in(parent).map_err(io_error)?;
    temp_file.write_all(contents).map_err(io_error)?;
    temp_file.as_file().sync_all().map_err(io_error)?;

    // Temporary files are created owner-only; generated sources are shared.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp_file
            .as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(io_error)?;
    }

    temp_file.persist(path).map_err(|err| io_error(err.error))?;
    Ok(())
}
