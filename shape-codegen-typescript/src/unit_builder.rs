//! Assembly of one generated unit.

use std::path::{Path, PathBuf};

use shapegen_codegen::{builder::CodeStream, diagnostic::Diagnostic};
use shapegen_core::{capitalize, import_specifier, strip_root, unit_stem};
use shapegen_ir::{Declaration, DeclarationProvider, SourceUnit};

use crate::{
    GenerateError, GeneratorOptions,
    ast::{Fn, Import, Param},
    naming::{factory_name, guard_name},
    unit::{GeneratedUnit, Requirements},
    walker::{EmitContext, SynthesisError, emit_object_checks, emit_record},
};

/// Builds the output unit for one source unit.
///
/// Every interface in the unit gets a `create<Name>` factory and an
/// `is<Name>` guard, in source order. Imports and helpers are collected
/// while the body is written and prepended once it is complete.
pub struct UnitBuilder<'a> {
    provider: &'a dyn DeclarationProvider,
    options: &'a GeneratorOptions,
}

impl<'a> UnitBuilder<'a> {
    pub fn new(provider: &'a dyn DeclarationProvider, options: &'a GeneratorOptions) -> Self {
        Self { provider, options }
    }

    /// Generate `unit`, returning the unit and the warnings raised on the way.
    pub fn build(&self, unit: &SourceUnit) -> Result<(GeneratedUnit, Vec<Diagnostic>), GenerateError> {
        let out_file = self.out_file(unit)?;
        let type_prefix = capitalize(&unit_stem(&unit.path));
        tracing::debug!(unit = %unit.path.display(), out_file = %out_file.display(), "building unit");

        let mut body = CodeStream::new(self.options.indent);
        let mut cx = EmitContext::new(self.provider, unit);
        for declaration in unit.interfaces() {
            tracing::debug!(declaration = %declaration.name, "synthesizing");
            emit_declaration(&mut cx, &mut body, declaration).map_err(|source| {
                GenerateError::Synthesis {
                    unit: unit.path.clone(),
                    declaration: declaration.name.clone(),
                    source,
                }
            })?;
        }
        let (requirements, diagnostics) = cx.finish();

        let contents = self.finalize(&out_file, &requirements, body)?;
        Ok((
            GeneratedUnit {
                source: unit.path.clone(),
                out_file,
                type_prefix,
                contents,
                requirements,
            },
            diagnostics,
        ))
    }

    /// Output path: the unit's directory below the root, plus its file name.
    fn out_file(&self, unit: &SourceUnit) -> Result<PathBuf, GenerateError> {
        let file_name = unit
            .path
            .file_name()
            .ok_or_else(|| GenerateError::InvalidUnitPath {
                unit: unit.path.clone(),
            })?;
        let dir = unit.path.parent().unwrap_or(Path::new(""));
        let relative = strip_root(dir, &self.options.root_dir).ok_or_else(|| {
            GenerateError::OutsideRoot {
                unit: unit.path.clone(),
                root: self.options.root_dir.clone(),
            }
        })?;
        Ok(relative.join(file_name))
    }

    /// Prepend import blocks and helper definitions to the body.
    fn finalize(
        &self,
        out_file: &Path,
        requirements: &Requirements,
        mut body: CodeStream,
    ) -> Result<String, GenerateError> {
        let mut header = CodeStream::new(self.options.indent);
        let from_dir = self
            .options
            .destination
            .join(out_file.parent().unwrap_or(Path::new("")));

        for (source, symbols) in requirements.imports().iter() {
            let source = Path::new(source);
            let specifier = import_specifier(&from_dir, source).ok_or_else(|| {
                GenerateError::UnrelatedPaths {
                    from: from_dir.clone(),
                    to: source.to_path_buf(),
                }
            })?;
            let import = symbols
                .iter()
                .fold(Import::new(specifier), |import, symbol| import.named(symbol));
            import.write(&mut header);
        }
        for helper in requirements.helpers() {
            helper.write(&mut header);
        }
        header.append(&body.value());
        Ok(header.value())
    }
}

/// Write the factory and the type guard for one interface.
fn emit_declaration(
    cx: &mut EmitContext<'_>,
    out: &mut CodeStream,
    declaration: &Declaration,
) -> Result<(), SynthesisError> {
    let name = declaration.name.as_str();
    let type_name = if declaration.is_generic() {
        format!("{}<{}>", name, declaration.type_params.join(", "))
    } else {
        name.to_string()
    };
    cx.require_import(&[name]);

    let mut factory = Fn::new(factory_name(name));
    let mut guard = Fn::new(guard_name(name));
    for param in &declaration.type_params {
        factory = factory.generic(param);
        guard = guard.generic(param);
    }

    cx.within(name, |cx| {
        factory
            .param(Param::new("params", format!("Partial<{}>", type_name)).default("{}"))
            .returns(&type_name)
            .write(out, |out| {
                out.write("return ");
                cx.expanding(name, |cx| {
                    emit_record(cx, out, &declaration.members, Some("params"), Some(&type_name))
                })?;
                out.append(";\n");
                Ok::<(), SynthesisError>(())
            })?;

        guard
            .param(Param::new("value", "unknown"))
            .returns(format!("value is {}", type_name))
            .write(out, |out| {
                cx.expanding(name, |cx| {
                    emit_object_checks(cx, out, &declaration.members, "value")
                })?;
                out.write("return true;\n");
                Ok::<(), SynthesisError>(())
            })
    })
}
