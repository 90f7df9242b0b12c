//! Go type and literal resolution for schema entities.
//!
//! # Type Mappings
//!
//! | Schema | Go |
//! |--------|----|
//! | `integer`, `uinteger` | `int` |
//! | `boolean` | `bool` |
//! | `decimal` | `float64` |
//! | `DocumentUri`, `URI`, `RegExp` | `string` |
//! | `reference Foo` | `Foo` |
//! | `array T` | `[]T` |
//! | `map K V` | `map[K]V` |
//! | `or T null` | `T` |
//! | other unions, tuples, structure literals | `interface{}` |
//!
//! Names outside the tables pass through unchanged.

use lspgen_model::{EnumLiteral, TypeRef, ValueRepr};

use crate::naming::exported_name;

/// The Go integer type every schema integer maps to.
pub const GO_INT: &str = "int";

/// The Go type used where no narrower type exists.
pub const GO_ANY: &str = "interface{}";

/// Mapping from a schema primitive name to a Go type name
struct TypeMapping {
    schema_type: &'static str,
    go_type: &'static str,
}

/// Schema numeric primitives that collapse onto one Go integer type.
const PRIMITIVE_MAPPINGS: &[TypeMapping] = &[
    TypeMapping {
        schema_type: "integer",
        go_type: GO_INT,
    },
    TypeMapping {
        schema_type: "uinteger",
        go_type: GO_INT,
    },
];

/// Schema base types that are not Go identifiers, used for alias targets.
const BASE_TYPE_MAPPINGS: &[TypeMapping] = &[
    TypeMapping {
        schema_type: "boolean",
        go_type: "bool",
    },
    TypeMapping {
        schema_type: "decimal",
        go_type: "float64",
    },
    TypeMapping {
        schema_type: "DocumentUri",
        go_type: "string",
    },
    TypeMapping {
        schema_type: "URI",
        go_type: "string",
    },
    TypeMapping {
        schema_type: "RegExp",
        go_type: "string",
    },
    TypeMapping {
        schema_type: "null",
        go_type: GO_ANY,
    },
];

fn lookup(table: &[TypeMapping], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|m| m.schema_type == name)
        .map(|m| m.go_type)
}

/// Map a schema primitive name to its Go type name.
///
/// `integer` and `uinteger` become [`GO_INT`]; any other name passes through.
///
/// # Examples
///
/// ```
/// use lspgen_codegen::resolve::resolve_primitive;
///
/// assert_eq!(resolve_primitive("uinteger"), "int");
/// assert_eq!(resolve_primitive("string"), "string");
/// ```
pub fn resolve_primitive(name: &str) -> &str {
    lookup(PRIMITIVE_MAPPINGS, name).unwrap_or(name)
}

/// Write an enumeration value as a Go literal of the given underlying type.
///
/// Returns `None` when the underlying type is outside the known set or the
/// literal's kind does not match it.
///
/// # Examples
///
/// ```
/// use lspgen_codegen::resolve::format_literal;
/// use lspgen_model::EnumLiteral;
///
/// let full = EnumLiteral::String("full".into());
/// assert_eq!(format_literal(&full, "string").as_deref(), Some("\"full\""));
///
/// let parse_error = EnumLiteral::Integer(-32700);
/// assert_eq!(format_literal(&parse_error, "integer").as_deref(), Some("-32700"));
/// ```
pub fn format_literal(literal: &EnumLiteral, underlying_type: &str) -> Option<String> {
    let repr = ValueRepr::of(underlying_type)?;
    if !repr.accepts(literal) {
        return None;
    }

    match literal {
        EnumLiteral::String(s) => Some(quote_string(s)),
        EnumLiteral::Integer(n) => Some(n.to_string()),
    }
}

/// Quote text as a Go interpreted string literal, escaping the way
/// `strconv.Quote` does.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');

    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            c if (c as u32) < 0x20 || c == '\u{7F}' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if is_printable(c) => out.push(c),
            c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }

    out.push('"');
    out
}

/// Whether Go would print `c` verbatim inside a quoted string.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    // Format characters (soft hyphen, zero-width and bidi controls, BOM),
    // private-use planes and noncharacters.
    !matches!(
        c,
        '\u{AD}'
            | '\u{200B}'..='\u{200F}'
            | '\u{2028}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{FEFF}'
            | '\u{E000}'..='\u{F8FF}'
            | '\u{FDD0}'..='\u{FDEF}'
            | '\u{F0000}'..='\u{10FFFF}'
    ) && (c as u32) & 0xFFFE != 0xFFFE
}

/// A resolved Go type expression for an alias target
#[derive(Debug, Clone, PartialEq)]
pub struct GoType {
    /// The Go type expression
    pub expr: String,

    /// Description of the schema type when the expression had to widen to
    /// `interface{}`
    pub note: Option<String>,
}

/// Resolve a schema type reference to a Go type expression.
pub fn go_type(ty: &TypeRef) -> GoType {
    let expr = go_type_expr(ty);
    let note = expr.contains(GO_ANY).then(|| describe(ty)).filter(|d| d != GO_ANY);
    GoType { expr, note }
}

fn base_type(name: &str) -> String {
    let primitive = resolve_primitive(name);
    lookup(BASE_TYPE_MAPPINGS, primitive)
        .unwrap_or(primitive)
        .to_string()
}

fn is_null(ty: &TypeRef) -> bool {
    matches!(ty, TypeRef::Base { name } if name == "null")
}

fn go_type_expr(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Base { name } => base_type(name),
        TypeRef::Reference { name } => exported_name(name),
        TypeRef::Array { element } => format!("[]{}", go_type_expr(element)),
        TypeRef::Map { key, value } => {
            format!("map[{}]{}", go_type_expr(key), go_type_expr(value))
        }
        TypeRef::Or { items } => {
            let mut present = items.iter().filter(|item| !is_null(item));
            match (present.next(), present.next()) {
                (Some(only), None) => go_type_expr(only),
                _ => GO_ANY.to_string(),
            }
        }
        TypeRef::And { .. } | TypeRef::Tuple { .. } | TypeRef::Literal { .. } => {
            GO_ANY.to_string()
        }
        TypeRef::StringLiteral { .. } => "string".to_string(),
        TypeRef::IntegerLiteral { .. } => GO_INT.to_string(),
        TypeRef::BooleanLiteral { .. } => "bool".to_string(),
    }
}

/// Describe a schema type in Go-flavored notation, keeping union members.
fn describe(ty: &TypeRef) -> String {
    let join = |items: &[TypeRef], sep: &str| {
        items.iter().map(describe).collect::<Vec<_>>().join(sep)
    };

    match ty {
        TypeRef::Base { name } if name == "null" => "null".to_string(),
        TypeRef::Array { element } => match element.as_ref() {
            TypeRef::Or { .. } | TypeRef::And { .. } => format!("[]({})", describe(element)),
            _ => format!("[]{}", describe(element)),
        },
        TypeRef::Map { key, value } => format!("map[{}]{}", describe(key), describe(value)),
        TypeRef::Or { items } => join(items, " | "),
        TypeRef::And { items } => join(items, " & "),
        TypeRef::Tuple { items } => format!("[{}]", join(items, ", ")),
        TypeRef::Literal { .. } => "struct literal".to_string(),
        TypeRef::StringLiteral { value } => quote_string(value),
        TypeRef::IntegerLiteral { value } => value.to_string(),
        TypeRef::BooleanLiteral { value } => value.to_string(),
        other => go_type_expr(other),
    }
}
