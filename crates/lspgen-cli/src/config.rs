//! Generator configuration parsing and validation

use anyhow::{Context, Result};
use lspgen_codegen::{Gofmt, RenderTarget, SourceFormatter, Unformatted};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG: &str = "lspgen.toml";

/// lspgen.toml structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub generator: GeneratorSection,

    #[serde(default)]
    pub targets: Vec<RenderTarget>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Path to the metamodel JSON document
    pub model: PathBuf,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub formatter: FormatterKind,

    /// Abort the run at the first failing target
    #[serde(default = "default_strict")]
    pub strict: bool,
}

/// Which source formatter runs over rendered output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatterKind {
    #[default]
    Gofmt,
    None,
}

impl FormatterKind {
    pub fn formatter(self) -> Box<dyn SourceFormatter> {
        match self {
            FormatterKind::Gofmt => Box::new(Gofmt::new()),
            FormatterKind::None => Box::new(Unformatted),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_strict() -> bool {
    true
}

impl GeneratorConfig {
    /// Configuration used when no lspgen.toml exists: one flat `lsp_gen.go` target.
    pub fn for_model(model: impl Into<PathBuf>) -> Self {
        Self {
            generator: GeneratorSection {
                model: model.into(),
                output_dir: default_output_dir(),
                formatter: FormatterKind::default(),
                strict: default_strict(),
            },
            targets: vec![RenderTarget::new("lsp_gen.go")],
        }
    }

    /// Find the configuration for a run.
    ///
    /// An explicit path always wins. Otherwise `lspgen.toml` in the working
    /// directory is used, falling back to [`GeneratorConfig::for_model`] when
    /// only a model path was given. A model path overrides the configured one.
    pub fn locate(explicit: Option<&Path>, model: Option<&Path>) -> Result<Self> {
        Self::locate_with_default(Path::new(DEFAULT_CONFIG), explicit, model)
    }

    fn locate_with_default(
        default_path: &Path,
        explicit: Option<&Path>,
        model: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match (explicit, model) {
            (Some(path), _) => Self::from_file(path)?,
            (None, _) if default_path.exists() => Self::from_file(default_path)?,
            (None, Some(model)) => Self::for_model(model),
            (None, None) => anyhow::bail!(
                "No {} found; pass --config or --model",
                default_path.display()
            ),
        };

        if let Some(model) = model {
            config.generator.model = model.to_path_buf();
        }
        Ok(config)
    }

    /// Load configuration from a file
    ///
    /// Relative `model` and `output_dir` paths are resolved against the
    /// directory holding the file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config = Self::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Parse configuration from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    fn resolve_paths(&mut self, base: &Path) {
        let generator = &mut self.generator;
        if generator.model.is_relative() {
            generator.model = base.join(&generator.model);
        }
        if generator.output_dir.is_relative() {
            generator.output_dir = base.join(&generator.output_dir);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.generator.model.as_os_str().is_empty() {
            anyhow::bail!("Model path cannot be empty");
        }

        if self.targets.is_empty() {
            anyhow::bail!("At least one [[targets]] entry is required");
        }

        let mut names = HashSet::new();
        for target in &self.targets {
            if !names.insert(target.name.as_str()) {
                anyhow::bail!("Duplicate target name: {}", target.name);
            }
            target
                .validate()
                .with_context(|| format!("Invalid target '{}'", target.name))?;
        }

        Ok(())
    }

    /// Name of the metamodel written into the generated-code marker
    pub fn source_name(&self) -> String {
        self.generator
            .model
            .file_name()
            .unwrap_or(self.generator.model.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}
