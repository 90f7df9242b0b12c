//! Rendering and emitting a set of targets for one metamodel.

use std::path::{Path, PathBuf};

use lspgen_model::MetaModel;
use tracing::{error, info, info_span};

use crate::emit::{Emitted, Emitter, FormatWarning};
use crate::error::GenerateError;
use crate::format::SourceFormatter;
use crate::render::render_document;
use crate::target::RenderTarget;

/// Render `target` and persist it under `output_dir`.
///
/// A render failure leaves any existing output file untouched.
pub fn generate_target(
    model: &MetaModel,
    target: &RenderTarget,
    source_name: &str,
    output_dir: &Path,
    formatter: &dyn SourceFormatter,
) -> Result<Emitted, GenerateError> {
    let rendered = render_document(model, target, source_name)?;
    let path = target.output_path(output_dir);
    Ok(Emitter::new(formatter).emit(&path, &rendered)?)
}

/// Settings shared by every target in one run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    /// Metamodel name written into the generated-code marker
    pub source_name: String,
    /// Stop at the first failing target instead of continuing
    pub strict: bool,
}

/// Outcome of generating several targets
#[derive(Debug, Default)]
pub struct RunReport {
    pub emitted: Vec<Emitted>,
    /// Failed targets by name, in target order
    pub failures: Vec<(String, GenerateError)>,
}

impl RunReport {
    pub fn warnings(&self) -> impl Iterator<Item = &FormatWarning> {
        self.emitted.iter().filter_map(|e| e.warning.as_ref())
    }

    /// True when every target was written and formatted
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.warnings().next().is_none()
    }
}

/// Generate every target in order.
///
/// Targets are independent: a failing target does not affect the files of
/// the others. In strict mode the run stops at the first failure.
pub fn generate_all(
    model: &MetaModel,
    targets: &[RenderTarget],
    options: &GenerateOptions,
    formatter: &dyn SourceFormatter,
) -> RunReport {
    let mut report = RunReport::default();

    for target in targets {
        let _span = info_span!("target", name = %target.name).entered();

        match generate_target(
            model,
            target,
            &options.source_name,
            &options.output_dir,
            formatter,
        ) {
            Ok(emitted) => report.emitted.push(emitted),
            Err(err) => {
                error!(error = %err, "target failed");
                report.failures.push((target.name.clone(), err));
                if options.strict {
                    break;
                }
            }
        }
    }

    info!(
        written = report.emitted.len(),
        failed = report.failures.len(),
        "generation finished"
    );
    report
}
