//! Error types for rendering and emitting generated source

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Error type for rendering one target
///
/// A render error is fatal for the target that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Two declarations would define the same identifier in one package scope
    #[error("duplicate identifier {identifier}: declared by {first} and by {second}")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    /// A schema name does not produce a valid exported Go identifier
    #[error("{origin}: {identifier:?} is not a valid exported Go identifier")]
    InvalidIdentifier { identifier: String, origin: String },

    /// A value cannot be written as a literal of its enumeration's underlying type
    #[error("{origin}: literal {literal} cannot be represented as underlying type {underlying}")]
    UnrepresentableLiteral {
        origin: String,
        literal: String,
        underlying: String,
    },

    /// The render target itself is misconfigured
    #[error("invalid render target {target}: {reason}")]
    InvalidTarget { target: String, reason: String },
}

/// Error persisting an output unit
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error returned by an external source formatter
#[derive(Error, Debug)]
pub enum FormatError {
    /// The formatter program could not be started
    #[error("formatter {program} is unavailable: {source}")]
    Unavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Communication with the formatter process failed
    #[error("I/O error talking to formatter {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The formatter rejected the source
    #[error("formatter {program} rejected the source: {message}")]
    Rejected { program: String, message: String },

    /// The formatter produced output that is not UTF-8
    #[error("formatter {program} produced non UTF-8 output")]
    InvalidOutput { program: String },
}

/// Error generating one target end to end
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}
