//! Identifier registry for one output unit.
//!
//! Go types and constants share one package block, so every exported
//! identifier in a unit must be unique. The one tolerated overlap is a
//! constant named after its own enumeration type. The registry records who
//! declared each identifier so a clash can name both declarations.

use std::collections::HashMap;

use crate::error::{RenderError, RenderResult};

/// Which group of declarations an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Namespace {
    /// Enumeration and alias type names
    Type,
    /// Enumeration constants
    Value,
}

impl Namespace {
    fn other(self) -> Self {
        match self {
            Namespace::Type => Namespace::Value,
            Namespace::Value => Namespace::Type,
        }
    }
}

/// Identifiers declared so far in one output unit
#[derive(Debug, Default)]
pub struct Scope {
    declared: HashMap<(Namespace, String), String>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type name declared by `origin`.
    ///
    /// Fails with [`RenderError::DuplicateIdentifier`] if any type or constant
    /// already uses the name.
    pub fn declare_type(
        &mut self,
        identifier: &str,
        origin: impl Into<String>,
    ) -> RenderResult<()> {
        self.declare(Namespace::Type, identifier, origin.into(), None)
            .map(|_| ())
    }

    /// Register a constant of the enumeration type `owner`.
    ///
    /// A constant may share its own enumeration's type name; that overlap is
    /// reported by returning `true`. Any other clash with a type or constant
    /// fails with [`RenderError::DuplicateIdentifier`].
    pub fn declare_constant(
        &mut self,
        identifier: &str,
        owner: &str,
        origin: impl Into<String>,
    ) -> RenderResult<bool> {
        self.declare(Namespace::Value, identifier, origin.into(), Some(owner))
    }

    fn declare(
        &mut self,
        namespace: Namespace,
        identifier: &str,
        origin: String,
        owner: Option<&str>,
    ) -> RenderResult<bool> {
        let duplicate = |first: &String| RenderError::DuplicateIdentifier {
            identifier: identifier.to_string(),
            first: first.clone(),
            second: origin.clone(),
        };

        let key = (namespace, identifier.to_string());
        if let Some(first) = self.declared.get(&key) {
            return Err(duplicate(first));
        }

        let other = (namespace.other(), identifier.to_string());
        let shares_owner_name = match self.declared.get(&other) {
            Some(_) if owner == Some(identifier) => true,
            Some(first) => return Err(duplicate(first)),
            None => false,
        };

        self.declared.insert(key, origin);
        Ok(shares_owner_name)
    }
}
