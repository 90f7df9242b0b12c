//! Identifier and comment formatting for generated Go source.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `semanticTokenTypes` | [`exported_name`] | `SemanticTokenTypes` |
//! | `"a\n\nb"` | [`render_doc`] | `// a` / `//` / `// b` |
//! | `SymbolKind` | [`is_exported_identifier`] | `true` |

/// Marker that starts a Go line comment.
pub const LINE_COMMENT: &str = "//";

/// Convert a schema name into an exported Go identifier.
///
/// Schema names are already camelCase or PascalCase, so only the first
/// character changes.
///
/// # Examples
///
/// ```
/// use lspgen_codegen::naming::exported_name;
///
/// assert_eq!(exported_name("semanticTokenTypes"), "SemanticTokenTypes");
/// assert_eq!(exported_name("UTF8"), "UTF8");
/// assert_eq!(exported_name(""), "");
/// ```
pub fn exported_name(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Whether `s` is a Go identifier visible outside its package.
pub fn is_exported_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| c == '_' || c.is_alphanumeric()),
        _ => false,
    }
}

/// Whether `s` is any Go identifier (used for package names).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Reserved words that can never name a Go package or identifier.
pub const GO_KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Whether `s` can appear in a `package` clause.
///
/// ```
/// use lspgen_codegen::naming::is_package_name;
///
/// assert!(is_package_name("protocol"));
/// assert!(!is_package_name("type"));
/// assert!(!is_package_name("_"));
/// ```
pub fn is_package_name(s: &str) -> bool {
    is_identifier(s) && s != "_" && !GO_KEYWORDS.contains(&s)
}

/// Render documentation text as a block of Go line comments.
///
/// Every line of `text` becomes one comment line; blank lines become a bare
/// `//`. The result carries no trailing newline.
///
/// # Examples
///
/// ```
/// use lspgen_codegen::naming::render_doc;
///
/// assert_eq!(render_doc("A symbol kind."), "// A symbol kind.");
/// assert_eq!(render_doc("first\n\nsecond"), "// first\n//\n// second");
/// ```
pub fn render_doc(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                LINE_COMMENT.to_string()
            } else {
                format!("{LINE_COMMENT} {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip the comment markers [`render_doc`] added, recovering the original text.
pub fn strip_doc(block: &str) -> String {
    block
        .split('\n')
        .map(|line| {
            line.strip_prefix("// ")
                .or_else(|| line.strip_prefix(LINE_COMMENT))
                .unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Combine documentation and a deprecation reason into one comment text.
///
/// Go tooling recognizes a paragraph starting with `Deprecated: `. Empty
/// documentation counts as absent.
pub fn doc_text(documentation: Option<&str>, deprecated: Option<&str>) -> Option<String> {
    let documentation = documentation.filter(|d| !d.is_empty());
    let deprecated = deprecated.map(|reason| format!("Deprecated: {reason}"));

    match (documentation, deprecated) {
        (Some(doc), Some(dep)) => Some(format!("{doc}\n\n{dep}")),
        (Some(doc), None) => Some(doc.to_string()),
        (None, dep) => dep,
    }
}
