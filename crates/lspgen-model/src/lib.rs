//! lspgen-model - Schema model for protocol metamodel documents
//!
//! This crate provides the read-only data model consumed by the generator:
//! - [`MetaModel`] root aggregate (enumerations, type aliases, carried-through entities)
//! - [`Enumeration`], [`EnumValue`], [`TypeAlias`] entity records
//! - [`TypeRef`] schema type references
//! - [`LoadError`] for documents that are malformed or violate entity invariants

mod error;
mod load;
mod model;

pub use error::{LoadError, LoadResult};
pub use model::{
    EnumLiteral, EnumValue, Enumeration, EnumerationType, MetaData, MetaModel, TypeAlias,
    TypeRef, ValueRepr,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        EnumLiteral, EnumValue, Enumeration, LoadError, LoadResult, MetaModel, TypeAlias, TypeRef,
        ValueRepr,
    };
}
