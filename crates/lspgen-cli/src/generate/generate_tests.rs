#![allow(non_snake_case)]

use super::*;
use lspgen_codegen::{Emitted, FormatWarning, GenerateError, RenderError};
use std::fs;
use tempfile::TempDir;

const MODEL: &str = r#"{
    "metaData": {"version": "3.17.0"},
    "enumerations": [{
        "name": "TraceValues",
        "type": {"kind": "base", "name": "string"},
        "values": [
            {"name": "off", "value": "off"},
            {"name": "messages", "value": "messages"}
        ]
    }],
    "typeAliases": [{"name": "Pattern", "type": {"kind": "base", "name": "string"}}]
}"#;

/// Write a metamodel and a config with the given targets into a temp dir.
fn project(targets: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("metaModel.json"), MODEL).unwrap();
    let config = dir.path().join("lspgen.toml");
    fs::write(
        &config,
        format!("[generator]\nmodel = \"metaModel.json\"\noutput_dir = \"gen\"\nformatter = \"none\"\n\n{targets}"),
    )
    .unwrap();
    (dir, config)
}

fn emitted(warning: Option<FormatWarning>) -> Emitted {
    Emitted {
        path: PathBuf::from("lsp_gen.go"),
        bytes_written: 10,
        warning,
    }
}

// exit_status tests

#[test]
fn exit_status___clean_run___is_zero() {
    let report = RunReport {
        emitted: vec![emitted(None)],
        failures: vec![],
    };

    assert_eq!(exit_status(&report), 0);
}

#[test]
fn exit_status___unformatted_output___is_two() {
    let report = RunReport {
        emitted: vec![emitted(Some(FormatWarning {
            path: PathBuf::from("lsp_gen.go"),
            message: "gofmt not found".into(),
        }))],
        failures: vec![],
    };

    assert_eq!(exit_status(&report), EXIT_UNFORMATTED);
}

#[test]
fn exit_status___failed_target___is_one() {
    let report = RunReport {
        emitted: vec![],
        failures: vec![(
            "lsp_gen.go".into(),
            GenerateError::Render(RenderError::InvalidTarget {
                target: "lsp_gen.go".into(),
                reason: "bad".into(),
            }),
        )],
    };

    assert_eq!(exit_status(&report), EXIT_TARGET_FAILED);
}

// GenerateArgs tests

#[test]
fn GenerateArgs___resolve___applies_overrides() {
    let (dir, config) = project("[[targets]]\nname = \"lsp_gen.go\"\n");
    let args = GenerateArgs {
        config: Some(config),
        output_dir: Some(dir.path().join("elsewhere")),
        keep_going: true,
        ..Default::default()
    };

    let resolved = args.resolve().unwrap();

    assert_eq!(resolved.generator.output_dir, dir.path().join("elsewhere"));
    assert!(!resolved.generator.strict);
    assert_eq!(resolved.generator.formatter, FormatterKind::None);
}

#[test]
fn GenerateArgs___resolve___invalid_config___fails() {
    let (_dir, config) = project("");
    let args = GenerateArgs {
        config: Some(config),
        ..Default::default()
    };

    assert!(args.resolve().is_err());
}

// run tests

#[test]
fn run___valid_project___writes_every_target() {
    let (dir, config) = project(
        "[[targets]]\nname = \"lsp_gen.go\"\n\n[[targets]]\nname = \"aliases.go\"\nsections = [\"type_aliases\"]\n",
    );

    run(&GenerateArgs {
        config: Some(config),
        ..Default::default()
    })
    .unwrap();

    let code = fs::read_to_string(dir.path().join("gen/lsp_gen.go")).unwrap();
    assert!(code.starts_with("// Code generated by lspgen from metaModel.json; DO NOT EDIT.\n"));
    assert!(code.contains("\tMessages TraceValues = \"messages\"\n"));
    let aliases = fs::read_to_string(dir.path().join("gen/aliases.go")).unwrap();
    assert!(!aliases.contains("TraceValues"));
}

#[test]
fn run___malformed_model___fails_before_writing() {
    let (dir, config) = project("[[targets]]\nname = \"lsp_gen.go\"\n");
    fs::write(dir.path().join("metaModel.json"), "{\"enumerations\": [").unwrap();

    let err = run(&GenerateArgs {
        config: Some(config),
        ..Default::default()
    })
    .unwrap_err();

    assert!(err.to_string().contains("Failed to load metamodel"));
    assert!(!dir.path().join("gen").exists());
}

#[test]
fn check___valid_project___writes_nothing() {
    let (dir, config) = project("[[targets]]\nname = \"lsp_gen.go\"\n");

    check(Some(config), None).unwrap();

    assert!(!dir.path().join("gen").exists());
}
