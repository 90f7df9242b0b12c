//! Loading and validating metamodel documents

use std::path::Path;

use tracing::debug;

use crate::error::{LoadError, LoadResult};
use crate::model::{Enumeration, MetaModel, ValueRepr};

impl MetaModel {
    /// Load and validate a metamodel from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "read metamodel");
        Self::from_json(&bytes)
    }

    /// Parse and validate a metamodel from JSON bytes
    pub fn from_json(bytes: &[u8]) -> LoadResult<Self> {
        let model: MetaModel = serde_json::from_slice(bytes)?;
        model.validate()?;

        debug!(
            enumerations = model.enumerations.len(),
            type_aliases = model.type_aliases.len(),
            structures = model.structures.len(),
            "loaded metamodel"
        );
        Ok(model)
    }

    /// Check the entity invariants the generator relies on
    pub fn validate(&self) -> LoadResult<()> {
        for (index, enumeration) in self.enumerations.iter().enumerate() {
            if enumeration.name.is_empty() {
                return Err(LoadError::EmptyName(format!("enumeration #{index}")));
            }
            validate_enumeration(enumeration)?;
        }

        for (index, alias) in self.type_aliases.iter().enumerate() {
            if alias.name.is_empty() {
                return Err(LoadError::EmptyName(format!("type alias #{index}")));
            }
        }

        Ok(())
    }

    /// Protocol version from the document metadata, if present
    pub fn version(&self) -> Option<&str> {
        self.meta_data.as_ref().map(|m| m.version.as_str())
    }
}

fn validate_enumeration(enumeration: &Enumeration) -> LoadResult<()> {
    if enumeration.underlying.kind != "base" {
        return Err(LoadError::NonBaseUnderlyingType {
            name: enumeration.name.clone(),
            kind: enumeration.underlying.kind.clone(),
        });
    }

    if enumeration.values.is_empty() {
        return Err(LoadError::EmptyEnumeration(enumeration.name.clone()));
    }

    // Unknown underlying types are a render-time failure, not a load failure.
    let repr = ValueRepr::of(enumeration.underlying_type());

    for (index, value) in enumeration.values.iter().enumerate() {
        if value.name.is_empty() {
            return Err(LoadError::EmptyName(format!(
                "value #{index} of enumeration {}",
                enumeration.name
            )));
        }

        if let Some(repr) = repr {
            if !repr.accepts(&value.literal) {
                return Err(LoadError::LiteralMismatch {
                    enumeration: enumeration.name.clone(),
                    value: value.name.clone(),
                    underlying: enumeration.underlying_type().to_string(),
                });
            }
        }
    }

    Ok(())
}
