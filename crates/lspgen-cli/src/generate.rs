//! `generate` and `check` command implementations

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use lspgen_codegen::{GenerateOptions, RunReport, generate_all, render_document};
use lspgen_model::MetaModel;
use tracing::{error, info};

use crate::config::{FormatterKind, GeneratorConfig};

/// Exit status when a target failed to render or persist
pub const EXIT_TARGET_FAILED: u8 = 1;

/// Exit status when every target was written but some are unformatted
pub const EXIT_UNFORMATTED: u8 = 2;

/// Command-line overrides for a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub config: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub no_format: bool,
    pub keep_going: bool,
}

impl GenerateArgs {
    /// Resolve the configuration and apply the overrides on top of it
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let mut config =
            GeneratorConfig::locate(self.config.as_deref(), self.model.as_deref())?;

        if let Some(output_dir) = &self.output_dir {
            config.generator.output_dir = output_dir.clone();
        }
        if self.no_format {
            config.generator.formatter = FormatterKind::None;
        }
        if self.keep_going {
            config.generator.strict = false;
        }

        config.validate()?;
        Ok(config)
    }
}

fn load_model(path: &Path) -> Result<MetaModel> {
    let model = MetaModel::from_file(path)
        .inspect_err(|err| error!(kind = err.kind(), error = %err, "metamodel rejected"))
        .with_context(|| format!("Failed to load metamodel: {}", path.display()))?;
    info!(
        path = %path.display(),
        enumerations = model.enumerations.len(),
        type_aliases = model.type_aliases.len(),
        "loaded metamodel"
    );
    Ok(model)
}

/// Generate command implementation
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    let config = args.resolve()?;
    let model = load_model(&config.generator.model)?;
    let formatter = config.generator.formatter.formatter();

    let options = GenerateOptions {
        output_dir: config.generator.output_dir.clone(),
        source_name: config.source_name(),
        strict: config.generator.strict,
    };
    let report = generate_all(&model, &config.targets, &options, formatter.as_ref());

    print_report(&report);
    Ok(ExitCode::from(exit_status(&report)))
}

fn print_report(report: &RunReport) {
    for emitted in &report.emitted {
        println!(
            "✓ {} ({} bytes)",
            emitted.path.display(),
            emitted.bytes_written
        );
    }
    for warning in report.warnings() {
        eprintln!("⚠ {warning}");
    }
    for (target, err) in &report.failures {
        eprintln!("✗ {target}: {err}");
    }
}

/// Map a run report to the process exit status
pub fn exit_status(report: &RunReport) -> u8 {
    if !report.failures.is_empty() {
        EXIT_TARGET_FAILED
    } else if report.warnings().next().is_some() {
        EXIT_UNFORMATTED
    } else {
        0
    }
}

/// Check command implementation
///
/// Renders every target in memory and writes nothing.
pub fn check(config: Option<PathBuf>, model: Option<PathBuf>) -> Result<ExitCode> {
    let config = GeneratorConfig::locate(config.as_deref(), model.as_deref())?;
    config.validate()?;

    println!("Checking metamodel: {}", config.generator.model.display());
    let metamodel = load_model(&config.generator.model)?;
    println!("✓ Enumerations: {}", metamodel.enumerations.len());
    println!("✓ Type aliases: {}", metamodel.type_aliases.len());

    let source_name = config.source_name();
    let mut failed = 0;
    for target in &config.targets {
        match render_document(&metamodel, target, &source_name) {
            Ok(code) => println!("✓ {} renders ({} bytes)", target.name, code.len()),
            Err(err) => {
                failed += 1;
                eprintln!("✗ {}: {err}", target.name);
            }
        }
    }

    if failed > 0 {
        println!("\n{failed} of {} targets failed", config.targets.len());
        return Ok(ExitCode::from(EXIT_TARGET_FAILED));
    }

    println!("\nAll targets render!");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
