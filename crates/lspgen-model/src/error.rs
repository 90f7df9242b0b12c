//! Error types for metamodel loading

use thiserror::Error;

/// Result type alias for load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type for loading a metamodel document
///
/// Every variant is fatal: a run that hits one produces no output at all.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The document could not be read from disk
    #[error("failed to read metamodel {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or misses a required field
    #[error("malformed metamodel: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An entity or value has an empty name
    #[error("{0} has an empty name")]
    EmptyName(String),

    /// An enumeration declares no values
    #[error("enumeration {0} has no values")]
    EmptyEnumeration(String),

    /// An enumeration's type is not a base type
    #[error("enumeration {name}: underlying type must be of kind base, got {kind}")]
    NonBaseUnderlyingType { name: String, kind: String },

    /// A value's literal disagrees with its enumeration's underlying type
    #[error("enumeration {enumeration}: value {value} does not fit underlying type {underlying}")]
    LiteralMismatch {
        enumeration: String,
        value: String,
        underlying: String,
    },
}

impl LoadError {
    /// Short machine-readable category, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Read { .. } => "read",
            LoadError::Malformed(_) => "malformed",
            LoadError::EmptyName(_) => "empty_name",
            LoadError::EmptyEnumeration(_) => "empty_enumeration",
            LoadError::NonBaseUnderlyingType { .. } => "non_base_underlying_type",
            LoadError::LiteralMismatch { .. } => "literal_mismatch",
        }
    }
}
