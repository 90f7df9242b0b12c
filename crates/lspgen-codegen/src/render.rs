//! Go declaration rendering for enumerations and type aliases.
//!
//! Rendering runs in two passes. The planning pass resolves every name,
//! type and literal and registers each declared identifier in the target's
//! [`Scope`]; any failure there aborts the target before a single line of
//! text exists. The writing pass then prints the planned declarations in
//! order.

use lspgen_model::{EnumValue, Enumeration, MetaModel, TypeAlias};
use tracing::{debug, warn};

use crate::error::{RenderError, RenderResult};
use crate::naming::{doc_text, exported_name, is_exported_identifier, render_doc};
use crate::resolve::{GoType, format_literal, go_type, resolve_primitive};
use crate::scope::Scope;
use crate::target::{RenderTarget, Scoping, Section};

/// Name written into the generated-code marker.
pub const GENERATOR_NAME: &str = "lspgen";

/// A planned `const` entry
#[derive(Debug, Clone, PartialEq)]
struct ConstantDecl {
    doc: Option<String>,
    name: String,
    literal: String,
}

/// A planned top-level declaration
#[derive(Debug, Clone, PartialEq)]
enum Declaration {
    Enumeration {
        doc: Option<String>,
        name: String,
        base: String,
        constants: Vec<ConstantDecl>,
    },
    Alias {
        doc: Option<String>,
        name: String,
        ty: GoType,
    },
}

/// Render one target's Go source for `model`.
///
/// `source` names the metamodel in the generated-code marker. The output is
/// valid but unformatted Go; pass it through a
/// [`SourceFormatter`](crate::format::SourceFormatter) before persisting.
pub fn render_document(model: &MetaModel, target: &RenderTarget, source: &str) -> RenderResult<String> {
    target.validate()?;

    let declarations = plan(model, target)?;
    debug!(
        target = %target.name,
        declarations = declarations.len(),
        "planned declarations"
    );

    Ok(write_document(&declarations, target, model.version(), source))
}

fn plan(model: &MetaModel, target: &RenderTarget) -> RenderResult<Vec<Declaration>> {
    let mut scope = Scope::new();
    let mut declarations = Vec::new();

    for section in &target.sections {
        match section {
            Section::Enumerations => {
                for enumeration in model
                    .enumerations
                    .iter()
                    .filter(|e| target.include_proposed || !e.proposed)
                {
                    declarations.push(plan_enumeration(enumeration, target, &mut scope)?);
                }
            }
            Section::TypeAliases => {
                for alias in model
                    .type_aliases
                    .iter()
                    .filter(|a| target.include_proposed || !a.proposed)
                {
                    declarations.push(plan_alias(alias, &mut scope)?);
                }
            }
        }
    }

    Ok(declarations)
}

fn checked_identifier(identifier: String, origin: &str) -> RenderResult<String> {
    if is_exported_identifier(&identifier) {
        Ok(identifier)
    } else {
        Err(RenderError::InvalidIdentifier {
            identifier,
            origin: origin.to_string(),
        })
    }
}

fn plan_enumeration(
    enumeration: &Enumeration,
    target: &RenderTarget,
    scope: &mut Scope,
) -> RenderResult<Declaration> {
    let origin = format!("enumeration {}", enumeration.name);
    let name = checked_identifier(exported_name(&enumeration.name), &origin)?;
    scope.declare_type(&name, origin)?;

    let constants = enumeration
        .values
        .iter()
        .filter(|v| target.include_proposed || !v.proposed)
        .map(|value| plan_constant(enumeration, &name, value, target.scoping, scope))
        .collect::<RenderResult<Vec<_>>>()?;

    Ok(Declaration::Enumeration {
        doc: doc_text(
            enumeration.documentation.as_deref(),
            enumeration.deprecated.as_deref(),
        ),
        base: resolve_primitive(enumeration.underlying_type()).to_string(),
        name,
        constants,
    })
}

fn plan_constant(
    enumeration: &Enumeration,
    type_name: &str,
    value: &EnumValue,
    scoping: Scoping,
    scope: &mut Scope,
) -> RenderResult<ConstantDecl> {
    let origin = format!("value {}.{}", enumeration.name, value.name);

    let name = match scoping {
        Scoping::Flat => exported_name(&value.name),
        Scoping::Qualified => format!("{type_name}{}", exported_name(&value.name)),
    };
    let name = checked_identifier(name, &origin)?;

    let underlying = enumeration.underlying_type();
    let literal = format_literal(&value.literal, underlying).ok_or_else(|| {
        RenderError::UnrepresentableLiteral {
            origin: origin.clone(),
            literal: value.literal.to_string(),
            underlying: underlying.to_string(),
        }
    })?;

    if scope.declare_constant(&name, type_name, origin.clone())? {
        warn!(
            identifier = %name,
            %origin,
            "constant shares its enumeration's type name"
        );
    }

    Ok(ConstantDecl {
        doc: doc_text(value.documentation.as_deref(), value.deprecated.as_deref()),
        name,
        literal,
    })
}

fn plan_alias(alias: &TypeAlias, scope: &mut Scope) -> RenderResult<Declaration> {
    let origin = format!("type alias {}", alias.name);
    let name = checked_identifier(exported_name(&alias.name), &origin)?;
    scope.declare_type(&name, origin)?;

    Ok(Declaration::Alias {
        doc: doc_text(alias.documentation.as_deref(), alias.deprecated.as_deref()),
        name,
        ty: go_type(&alias.aliased),
    })
}

fn write_document(
    declarations: &[Declaration],
    target: &RenderTarget,
    version: Option<&str>,
    source: &str,
) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "// Code generated by {GENERATOR_NAME} from {source}; DO NOT EDIT.\n"
    ));
    if let Some(version) = version {
        code.push_str(&format!("// Protocol version {version}.\n"));
    }
    code.push_str(&format!("\npackage {}\n", target.package));

    for declaration in declarations {
        code.push('\n');
        write_declaration(&mut code, declaration);
    }

    code
}

fn write_doc(code: &mut String, doc: Option<&str>, indent: &str) {
    if let Some(doc) = doc {
        for line in render_doc(doc).split('\n') {
            code.push_str(indent);
            code.push_str(line);
            code.push('\n');
        }
    }
}

fn write_declaration(code: &mut String, declaration: &Declaration) {
    match declaration {
        Declaration::Enumeration {
            doc,
            name,
            base,
            constants,
        } => {
            write_doc(code, doc.as_deref(), "");
            code.push_str(&format!("type {name} {base}\n"));

            if constants.is_empty() {
                return;
            }

            code.push_str("\nconst (\n");
            for (index, constant) in constants.iter().enumerate() {
                // Documented entries open a new paragraph.
                if index > 0 && constant.doc.is_some() {
                    code.push('\n');
                }
                write_doc(code, constant.doc.as_deref(), "\t");
                code.push_str(&format!(
                    "\t{} {name} = {}\n",
                    constant.name, constant.literal
                ));
            }
            code.push_str(")\n");
        }
        Declaration::Alias { doc, name, ty } => {
            write_doc(code, doc.as_deref(), "");
            match &ty.note {
                Some(note) => code.push_str(&format!("type {name} {} // {note}\n", ty.expr)),
                None => code.push_str(&format!("type {name} {}\n", ty.expr)),
            }
        }
    }
}

#[cfg(test)]
#[path = "render/render_tests.rs"]
mod render_tests;
