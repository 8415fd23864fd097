//! Guard statements for type guards.

use shapegen_codegen::builder::CodeStream;
use shapegen_ir::{Member, PrimitiveKind, TypeDescription};

use super::{EmitContext, SynthesisError, property};
use crate::{
    helpers::Helper,
    naming::{guard_name, literal_expression, property_accessor},
};

/// Write statements that `return false` unless `accessor` conforms to `ty`.
pub fn emit_validator(
    cx: &mut EmitContext<'_>,
    out: &mut CodeStream,
    ty: &TypeDescription,
    accessor: &str,
) -> Result<(), SynthesisError> {
    match ty {
        date if date.is_date() => {
            out.write(&format!("if(!({} instanceof Date)) return false;\n", accessor));
        }
        TypeDescription::ClassLike { name, members } => {
            if cx.is_expanding(name) {
                if !cx.generates(name) {
                    return Err(SynthesisError::Recursive { name: name.clone() });
                }
                out.write(&format!("if(!{}({})) return false;\n", guard_name(name), accessor));
                return Ok(());
            }
            cx.expanding(name, |cx| emit_object_checks(cx, out, members, accessor))?;
        }
        TypeDescription::Alias { name, target } => {
            if cx.is_expanding(name) {
                return Err(SynthesisError::Recursive { name: name.clone() });
            }
            cx.expanding(name, |cx| emit_validator(cx, out, target, accessor))?;
        }
        TypeDescription::Object(members) => emit_object_checks(cx, out, members, accessor)?,
        TypeDescription::Array(element) => {
            let helper = cx.require_helper(Helper::ValidateVector);
            out.write_block(
                &format!("if(!{}({}, value => {{\n", helper, accessor),
                |out| {
                    emit_validator(cx, out, element, "value")?;
                    out.write("return true;\n");
                    Ok::<(), SynthesisError>(())
                },
                "})) return false;\n",
            )?;
        }
        TypeDescription::Union(alternatives) => {
            if alternatives.is_empty() {
                return Err(SynthesisError::Unsupported {
                    kind: "empty union".to_string(),
                });
            }
            out.write("if(\n");
            out.indent_block(|out| {
                let last = alternatives.len() - 1;
                for (i, alternative) in alternatives.iter().enumerate() {
                    out.write_block(
                        "!(() => {\n",
                        |out| {
                            emit_validator(cx, out, alternative, accessor)?;
                            out.write("return true;\n");
                            Ok::<(), SynthesisError>(())
                        },
                        "})()",
                    )?;
                    out.append(if i < last { " &&\n" } else { "\n" });
                }
                Ok::<(), SynthesisError>(())
            })?;
            out.write(") return false;\n");
        }
        TypeDescription::Literal(value) => {
            out.write(&format!(
                "if(!({} === {})) return false;\n",
                accessor,
                literal_expression(value)
            ));
        }
        TypeDescription::Primitive(PrimitiveKind::Null) => {
            out.write(&format!("if(!({} === null)) return false;\n", accessor));
        }
        TypeDescription::Primitive(kind) => {
            out.write(&format!(
                "if(!(typeof {} === '{}')) return false;\n",
                accessor,
                kind.as_str()
            ));
        }
        TypeDescription::Reference { .. } => {}
        TypeDescription::Unsupported { kind } => {
            return Err(SynthesisError::Unsupported { kind: kind.clone() });
        }
    }
    Ok(())
}

/// Check that `accessor` is an object, then check each member in order.
///
/// Optional members are only checked when present. Malformed members are
/// skipped with a warning.
pub fn emit_object_checks(
    cx: &mut EmitContext<'_>,
    out: &mut CodeStream,
    members: &[Member],
    accessor: &str,
) -> Result<(), SynthesisError> {
    let helper = cx.require_helper(Helper::IsUnknownObject);
    out.write(&format!("if(!{}({})) return false;\n", helper, accessor));

    for member in members {
        let (name, ty) = match property(member) {
            Ok(found) => found,
            Err(err) => {
                cx.within(member.display_name(), |cx| {
                    cx.warn("validator", format!("skipped: {}", err))
                });
                continue;
            }
        };
        let member_accessor = property_accessor(accessor, name);
        cx.within(name, |cx| {
            let described = cx.describe(ty)?;
            if member.optional {
                out.write_block(
                    &format!("if({} !== undefined) {{\n", member_accessor),
                    |out| emit_validator(cx, out, &described, &member_accessor),
                    "}\n",
                )
            } else {
                emit_validator(cx, out, &described, &member_accessor)
            }
        })?;
    }
    Ok(())
}
