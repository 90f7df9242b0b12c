#![allow(non_snake_case)]

use super::*;

fn model(enumerations: &str, type_aliases: &str) -> MetaModel {
    let json = format!(r#"{{"enumerations": {enumerations}, "typeAliases": {type_aliases}}}"#);
    MetaModel::from_json(json.as_bytes()).unwrap()
}

fn render(model: &MetaModel) -> RenderResult<String> {
    render_document(model, &RenderTarget::new("lsp_gen.go"), "metaModel.json")
}

const OFF: &str = r#"[{
    "name": "Off",
    "type": {"kind": "base", "name": "string"},
    "values": [{"name": "off", "value": "off"}]
}]"#;

const SEMANTIC_TOKEN_TYPES: &str = r#"{
    "name": "SemanticTokenTypes",
    "type": {"kind": "base", "name": "string"},
    "documentation": "A set of predefined token types.\n\n@since 3.16.0",
    "values": [
        {"name": "namespace", "value": "namespace"},
        {"name": "type", "value": "type", "documentation": "Represents a generic type."},
        {"name": "class", "value": "class"}
    ]
}"#;

const INLAY_HINT_KIND: &str = r#"{
    "name": "InlayHintKind",
    "type": {"kind": "base", "name": "uinteger"},
    "values": [
        {"name": "Type", "value": 1},
        {"name": "Parameter", "value": 2}
    ]
}"#;

#[test]
fn render_document___single_string_enumeration___renders_type_and_constant() {
    let model = model(OFF, "[]");

    let code = render(&model).unwrap();

    assert_eq!(
        code,
        "// Code generated by lspgen from metaModel.json; DO NOT EDIT.\n\
         \n\
         package lsp\n\
         \n\
         type Off string\n\
         \n\
         const (\n\
         \tOff Off = \"off\"\n\
         )\n"
    );
}

#[test]
fn render_document___documented_values___open_paragraphs() {
    let model = model(&format!("[{SEMANTIC_TOKEN_TYPES}]"), "[]");

    let code = render(&model).unwrap();

    assert!(code.contains(
        "// A set of predefined token types.\n\
         //\n\
         // @since 3.16.0\n\
         type SemanticTokenTypes string\n"
    ));
    assert!(code.contains(
        "\tNamespace SemanticTokenTypes = \"namespace\"\n\
         \n\
         \t// Represents a generic type.\n\
         \tType SemanticTokenTypes = \"type\"\n\
         \tClass SemanticTokenTypes = \"class\"\n"
    ));
}

#[test]
fn render_document___first_value_documented___no_leading_blank_line() {
    let model = model(
        r#"[{
            "name": "TraceValues",
            "type": {"kind": "base", "name": "string"},
            "values": [{"name": "off", "value": "off", "documentation": "Turn tracing off."}]
        }]"#,
        "[]",
    );

    let code = render(&model).unwrap();

    assert!(code.contains("const (\n\t// Turn tracing off.\n\tOff TraceValues = \"off\"\n)"));
}

#[test]
fn render_document___negative_codes___render_bare_numbers() {
    let model = model(
        r#"[{
            "name": "ErrorCodes",
            "type": {"kind": "base", "name": "integer"},
            "documentation": "Predefined error codes.",
            "values": [
                {"name": "ParseError", "value": -32700},
                {"name": "InvalidRequest", "value": -32600}
            ]
        }]"#,
        "[]",
    );

    let code = render(&model).unwrap();

    assert!(code.contains("// Predefined error codes.\ntype ErrorCodes int\n"));
    assert!(code.contains("\tParseError ErrorCodes = -32700\n"));
    assert!(code.contains("\tInvalidRequest ErrorCodes = -32600\n"));
}

#[test]
fn render_document___shared_member_name___fails_with_duplicate() {
    let model = model(&format!("[{SEMANTIC_TOKEN_TYPES}, {INLAY_HINT_KIND}]"), "[]");

    let err = render(&model).unwrap_err();

    assert_eq!(
        err,
        RenderError::DuplicateIdentifier {
            identifier: "Type".into(),
            first: "value SemanticTokenTypes.type".into(),
            second: "value InlayHintKind.Type".into(),
        }
    );
}

#[test]
fn render_document___qualified_scoping___prefixes_constants() {
    let model = model(&format!("[{SEMANTIC_TOKEN_TYPES}, {INLAY_HINT_KIND}]"), "[]");
    let target = RenderTarget::new("lsp_gen.go").with_scoping(Scoping::Qualified);

    let code = render_document(&model, &target, "metaModel.json").unwrap();

    assert!(code.contains("\tSemanticTokenTypesType SemanticTokenTypes = \"type\"\n"));
    assert!(code.contains("\tInlayHintKindType InlayHintKind = 1\n"));
}

#[test]
fn render_document___duplicate_type_names___fails() {
    let model = model(
        OFF,
        r#"[{"name": "off", "type": {"kind": "base", "name": "string"}}]"#,
    );

    let err = render(&model).unwrap_err();

    assert!(matches!(
        err,
        RenderError::DuplicateIdentifier { identifier, first, second }
            if identifier == "Off" && first == "enumeration Off" && second == "type alias off"
    ));
}

#[test]
fn render_document___constant_named_like_alias___fails() {
    let model = model(
        r#"[{
            "name": "Kind",
            "type": {"kind": "base", "name": "uinteger"},
            "values": [{"name": "location", "value": 1}]
        }]"#,
        r#"[{"name": "Location", "type": {"kind": "base", "name": "string"}}]"#,
    );

    let err = render(&model).unwrap_err();

    assert_eq!(
        err,
        RenderError::DuplicateIdentifier {
            identifier: "Location".into(),
            first: "value Kind.location".into(),
            second: "type alias Location".into(),
        }
    );
}

#[test]
fn render_document___qualified_constant_named_like_other_enumeration___fails() {
    let model = model(
        r#"[
            {
                "name": "Symbol",
                "type": {"kind": "base", "name": "string"},
                "values": [{"name": "kind", "value": "k"}]
            },
            {
                "name": "SymbolKind",
                "type": {"kind": "base", "name": "uinteger"},
                "values": [{"name": "File", "value": 1}]
            }
        ]"#,
        "[]",
    );
    let target = RenderTarget::new("lsp_gen.go").with_scoping(Scoping::Qualified);

    let err = render_document(&model, &target, "metaModel.json").unwrap_err();

    assert_eq!(
        err,
        RenderError::DuplicateIdentifier {
            identifier: "SymbolKind".into(),
            first: "value Symbol.kind".into(),
            second: "enumeration SymbolKind".into(),
        }
    );
}

#[test]
fn render_document___constant_named_like_own_type___renders() {
    let model = model(
        r#"[{
            "name": "Off",
            "type": {"kind": "base", "name": "string"},
            "values": [{"name": "off", "value": "off"}, {"name": "on", "value": "on"}]
        }]"#,
        "[]",
    );

    let code = render(&model).unwrap();

    assert!(code.contains("\tOff Off = \"off\"\n\tOn Off = \"on\"\n"));
}

#[test]
fn render_document___type_aliases___follow_enumerations() {
    let model = model(
        OFF,
        r#"[
            {
                "name": "Definition",
                "documentation": "The definition of a symbol.",
                "type": {"kind": "or", "items": [
                    {"kind": "reference", "name": "Location"},
                    {"kind": "array", "element": {"kind": "reference", "name": "Location"}}
                ]}
            },
            {"name": "ChangeAnnotationIdentifier", "type": {"kind": "base", "name": "string"}}
        ]"#,
    );

    let code = render(&model).unwrap();

    let enum_at = code.find("type Off string").unwrap();
    let alias_at = code.find("type Definition").unwrap();
    assert!(enum_at < alias_at);
    assert!(code.contains(
        "// The definition of a symbol.\n\
         type Definition interface{} // Location | []Location\n"
    ));
    assert!(code.ends_with("\ntype ChangeAnnotationIdentifier string\n"));
}

#[test]
fn render_document___sections_order___is_respected() {
    let model = model(
        OFF,
        r#"[{"name": "Pattern", "type": {"kind": "base", "name": "string"}}]"#,
    );
    let target = RenderTarget::new("aliases.go")
        .with_sections(vec![Section::TypeAliases]);

    let code = render_document(&model, &target, "metaModel.json").unwrap();

    assert!(code.contains("type Pattern string"));
    assert!(!code.contains("const ("));
}

#[test]
fn render_document___proposed_entries___filtered_when_excluded() {
    let model = model(
        r#"[{
            "name": "Kind",
            "type": {"kind": "base", "name": "string"},
            "values": [
                {"name": "stable", "value": "stable"},
                {"name": "experimental", "value": "experimental", "proposed": true}
            ]
        }]"#,
        "[]",
    );
    let target = RenderTarget::new("lsp_gen.go").with_proposed(false);

    let code = render_document(&model, &target, "metaModel.json").unwrap();

    assert!(code.contains("Stable Kind"));
    assert!(!code.contains("Experimental"));
}

#[test]
fn render_document___deprecated_value___appends_paragraph() {
    let model = model(
        r#"[{
            "name": "CompletionItemTag",
            "type": {"kind": "base", "name": "uinteger"},
            "values": [
                {"name": "Deprecated", "value": 1, "documentation": "Render as obsolete.", "deprecated": "use tags instead."}
            ]
        }]"#,
        "[]",
    );

    let code = render(&model).unwrap();

    assert!(code.contains(
        "\t// Render as obsolete.\n\
         \t//\n\
         \t// Deprecated: use tags instead.\n\
         \tDeprecated CompletionItemTag = 1\n"
    ));
}

#[test]
fn render_document___invalid_value_name___fails() {
    let model = model(
        r#"[{
            "name": "PositionEncodingKind",
            "type": {"kind": "base", "name": "string"},
            "values": [{"name": "utf-8", "value": "utf-8"}]
        }]"#,
        "[]",
    );

    let err = render(&model).unwrap_err();

    assert!(matches!(
        err,
        RenderError::InvalidIdentifier { identifier, .. } if identifier == "Utf-8"
    ));
}

#[test]
fn render_document___unknown_underlying_type___fails_with_unrepresentable_literal() {
    let model = model(
        r#"[{
            "name": "Flags",
            "type": {"kind": "base", "name": "boolean"},
            "values": [{"name": "yes", "value": 1}]
        }]"#,
        "[]",
    );

    let err = render(&model).unwrap_err();

    assert!(matches!(
        err,
        RenderError::UnrepresentableLiteral { underlying, .. } if underlying == "boolean"
    ));
}

#[test]
fn render_document___protocol_version___written_in_header() {
    let json = format!(
        r#"{{"metaData": {{"version": "3.17.0"}}, "enumerations": {OFF}, "typeAliases": []}}"#
    );
    let model = MetaModel::from_json(json.as_bytes()).unwrap();

    let code = render(&model).unwrap();

    assert!(code.starts_with(
        "// Code generated by lspgen from metaModel.json; DO NOT EDIT.\n\
         // Protocol version 3.17.0.\n\
         \n\
         package lsp\n"
    ));
}

#[test]
fn render_document___custom_package___used_in_clause() {
    let model = model(OFF, "[]");
    let target = RenderTarget::new("protocol.go").with_package("protocol");

    let code = render_document(&model, &target, "metaModel.json").unwrap();

    assert!(code.contains("\npackage protocol\n"));
}

#[test]
fn render_document___invalid_target___fails_before_rendering() {
    let model = model(OFF, "[]");
    let target = RenderTarget::new("lsp_gen.go").with_package("not-a-package");

    let err = render_document(&model, &target, "metaModel.json").unwrap_err();

    assert!(matches!(err, RenderError::InvalidTarget { .. }));
}

#[test]
fn render_document___repeated_runs___are_identical() {
    let model = model(&format!("[{SEMANTIC_TOKEN_TYPES}]"), "[]");

    assert_eq!(render(&model).unwrap(), render(&model).unwrap());
}

#[test]
fn render_document___empty_model___renders_package_only() {
    let model = model("[]", "[]");

    let code = render(&model).unwrap();

    assert_eq!(
        code,
        "// Code generated by lspgen from metaModel.json; DO NOT EDIT.\n\npackage lsp\n"
    );
}
