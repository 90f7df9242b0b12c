//! Render target definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};
use crate::naming::is_package_name;

/// How enumeration constants are named inside the package scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoping {
    /// Constants use the value's own exported name; any clash fails the target
    #[default]
    Flat,

    /// Constants are prefixed with their enumeration's exported name
    Qualified,
}

/// An entity collection a target renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Enumerations,
    TypeAliases,
}

/// One named generation job producing one Go source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderTarget {
    /// Target name, also the output file name
    pub name: String,

    /// Go package clause
    #[serde(default = "default_package")]
    pub package: String,

    #[serde(default)]
    pub scoping: Scoping,

    /// Sections to render, in output order
    #[serde(default = "default_sections")]
    pub sections: Vec<Section>,

    /// Whether entries marked `proposed` are rendered
    #[serde(default = "default_include_proposed")]
    pub include_proposed: bool,
}

fn default_package() -> String {
    "lsp".to_string()
}

fn default_sections() -> Vec<Section> {
    vec![Section::Enumerations, Section::TypeAliases]
}

fn default_include_proposed() -> bool {
    true
}

impl RenderTarget {
    /// Create a target with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: default_package(),
            scoping: Scoping::default(),
            sections: default_sections(),
            include_proposed: default_include_proposed(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_scoping(mut self, scoping: Scoping) -> Self {
        self.scoping = scoping;
        self
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_proposed(mut self, include_proposed: bool) -> Self {
        self.include_proposed = include_proposed;
        self
    }

    /// Path of the file this target writes under `output_dir`
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.name)
    }

    /// Check the target can produce a well-formed file
    pub fn validate(&self) -> RenderResult<()> {
        let invalid = |reason: String| RenderError::InvalidTarget {
            target: self.name.clone(),
            reason,
        };

        if self.name.is_empty() || self.name == "." || self.name == ".." {
            return Err(invalid("name must be a file name".to_string()));
        }
        if self.name.contains(['/', '\\']) {
            return Err(invalid("name must not contain path separators".to_string()));
        }
        if !is_package_name(&self.package) {
            return Err(invalid(format!(
                "package {:?} is not a valid Go package name",
                self.package
            )));
        }
        for (index, section) in self.sections.iter().enumerate() {
            if self.sections[..index].contains(section) {
                return Err(invalid(format!("section {section:?} listed twice")));
            }
        }

        Ok(())
    }
}
