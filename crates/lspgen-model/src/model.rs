//! Metamodel entity types
//!
//! These mirror the JSON layout of an LSP-style `metaModel.json`. Only
//! enumerations and type aliases are examined by the generator; structures,
//! requests and notifications are carried through as raw JSON.

use serde::{Deserialize, Serialize};

/// Root aggregate of a parsed metamodel document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaModel {
    /// Document-level metadata (protocol version)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,

    /// Enumerations, in document order
    pub enumerations: Vec<Enumeration>,

    /// Type aliases, in document order
    pub type_aliases: Vec<TypeAlias>,

    #[serde(default)]
    pub structures: Vec<serde_json::Value>,

    #[serde(default)]
    pub requests: Vec<serde_json::Value>,

    #[serde(default)]
    pub notifications: Vec<serde_json::Value>,
}

/// Document-level metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaData {
    /// Protocol version the document describes (e.g. "3.17.0")
    pub version: String,
}

/// A named group of constant values sharing one primitive representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enumeration {
    pub name: String,

    /// The primitive type backing every value
    #[serde(rename = "type")]
    pub underlying: EnumerationType,

    pub values: Vec<EnumValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,

    /// Deprecation reason, if the enumeration is deprecated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    #[serde(default)]
    pub proposed: bool,

    #[serde(default)]
    pub supports_custom_values: bool,
}

/// The `type` object of an enumeration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumerationType {
    /// Always `base` in a valid document
    pub kind: String,

    /// Primitive name, e.g. `string`, `integer`, `uinteger`
    pub name: String,
}

impl Enumeration {
    /// Name of the primitive type backing this enumeration's values
    pub fn underlying_type(&self) -> &str {
        &self.underlying.name
    }
}

/// One member of an enumeration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,

    /// The wire value
    #[serde(rename = "value")]
    pub literal: EnumLiteral,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    #[serde(default)]
    pub proposed: bool,
}

/// An enumeration member's wire value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumLiteral {
    Integer(i64),
    String(String),
}

impl std::fmt::Display for EnumLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnumLiteral::Integer(n) => write!(f, "{n}"),
            EnumLiteral::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// How values of an underlying primitive type are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRepr {
    /// Quoted text
    Text,
    /// Bare decimal integer
    Integer { signed: bool },
}

impl ValueRepr {
    /// Classify an underlying type name; `None` for names outside the known set.
    pub fn of(type_name: &str) -> Option<Self> {
        match type_name {
            "string" => Some(ValueRepr::Text),
            "integer" => Some(ValueRepr::Integer { signed: true }),
            "uinteger" => Some(ValueRepr::Integer { signed: false }),
            _ => None,
        }
    }

    /// Whether `literal` can be written under this representation
    pub fn accepts(&self, literal: &EnumLiteral) -> bool {
        match (self, literal) {
            (ValueRepr::Text, EnumLiteral::String(_)) => true,
            (ValueRepr::Integer { signed }, EnumLiteral::Integer(n)) => *signed || *n >= 0,
            _ => false,
        }
    }
}

/// A named alias for another schema type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAlias {
    pub name: String,

    #[serde(rename = "type")]
    pub aliased: TypeRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    #[serde(default)]
    pub proposed: bool,
}

/// A schema type reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeRef {
    /// A primitive such as `string`, `integer` or `DocumentUri`
    Base { name: String },

    /// A named structure, enumeration or alias
    Reference { name: String },

    Array { element: Box<TypeRef> },

    Map { key: Box<TypeRef>, value: Box<TypeRef> },

    And { items: Vec<TypeRef> },

    Or { items: Vec<TypeRef> },

    Tuple { items: Vec<TypeRef> },

    /// An inline structure literal; its body is out of scope
    Literal { value: serde_json::Value },

    StringLiteral { value: String },

    IntegerLiteral { value: i64 },

    BooleanLiteral { value: bool },
}
