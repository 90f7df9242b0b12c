//! lspgen-codegen - Go declaration generator for protocol metamodels
//!
//! This crate turns a loaded [`MetaModel`](lspgen_model::MetaModel) into Go
//! source:
//! - [`render_document`] plans and prints one [`RenderTarget`]
//! - [`SourceFormatter`] services canonicalize the printed text ([`Gofmt`], [`Unformatted`])
//! - [`Emitter`] persists each output unit atomically
//! - [`generate_all`] drives a list of targets and collects a [`RunReport`]
//!
//! # Example
//!
//! ```
//! use lspgen_codegen::{RenderTarget, render_document};
//! use lspgen_model::MetaModel;
//!
//! let json = r#"{
//!     "enumerations": [{
//!         "name": "Off",
//!         "type": {"kind": "base", "name": "string"},
//!         "values": [{"name": "off", "value": "off"}]
//!     }],
//!     "typeAliases": []
//! }"#;
//! let model = MetaModel::from_json(json.as_bytes()).unwrap();
//!
//! let code = render_document(&model, &RenderTarget::new("lsp_gen.go"), "metaModel.json").unwrap();
//! assert!(code.contains("\tOff Off = \"off\"\n"));
//! ```

pub mod emit;
pub mod error;
pub mod format;
pub mod naming;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod scope;
pub mod target;

pub use emit::{Emitted, Emitter, FormatWarning};
pub use error::{EmitError, FormatError, GenerateError, RenderError, RenderResult};
pub use format::{Gofmt, SourceFormatter, Unformatted};
pub use pipeline::{GenerateOptions, RunReport, generate_all, generate_target};
pub use render::{GENERATOR_NAME, render_document};
pub use target::{RenderTarget, Scoping, Section};
