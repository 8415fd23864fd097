//! Default-value expressions for factories.

use shapegen_codegen::builder::CodeStream;
use shapegen_ir::{Member, TypeDescription};

use super::{EmitContext, SynthesisError, property};
use crate::naming::{literal_expression, string_literal, zero_value};

/// Append the default-value expression for `ty`.
///
/// The expression starts at the current write position; nested records
/// open on that line and close at the current depth.
pub fn emit_default(
    cx: &mut EmitContext<'_>,
    out: &mut CodeStream,
    ty: &TypeDescription,
) -> Result<(), SynthesisError> {
    match ty {
        date if date.is_date() => {
            out.append("new Date(0)");
        }
        TypeDescription::ClassLike { name, members } => {
            if cx.is_expanding(name) {
                return Err(SynthesisError::Recursive { name: name.clone() });
            }
            if members.is_empty() {
                return Err(SynthesisError::EmptyStructure { name: name.clone() });
            }
            cx.expanding(name, |cx| emit_record(cx, out, members, None, None))?;
        }
        TypeDescription::Alias { name, target } => {
            if cx.is_expanding(name) {
                return Err(SynthesisError::Recursive { name: name.clone() });
            }
            cx.expanding(name, |cx| emit_default(cx, out, target))?;
        }
        TypeDescription::Object(members) => emit_record(cx, out, members, None, None)?,
        TypeDescription::Union(alternatives) => match alternatives.first() {
            Some(first) => emit_default(cx, out, first)?,
            None => {
                return Err(SynthesisError::Unsupported {
                    kind: "empty union".to_string(),
                });
            }
        },
        TypeDescription::Array(_) => {
            out.append("[]");
        }
        TypeDescription::Literal(value) => {
            out.append(&literal_expression(value));
        }
        TypeDescription::Primitive(kind) => {
            out.append(zero_value(*kind));
        }
        TypeDescription::Reference { name } => {
            return Err(SynthesisError::NoDefault { name: name.clone() });
        }
        TypeDescription::Unsupported { kind } => {
            return Err(SynthesisError::Unsupported { kind: kind.clone() });
        }
    }
    Ok(())
}

/// Append a frozen, sealed object literal with one entry per member.
///
/// A member that cannot be synthesized is skipped with a warning, unless it
/// is optional, in which case its entry is `undefined`. `spread` adds a
/// trailing `...spread` entry and `cast` an ` as <cast>` assertion.
pub fn emit_record(
    cx: &mut EmitContext<'_>,
    out: &mut CodeStream,
    members: &[Member],
    spread: Option<&str>,
    cast: Option<&str>,
) -> Result<(), SynthesisError> {
    out.append("Object.freeze(Object.seal({\n");
    out.indent_block(|out| {
        let mut entries = Vec::with_capacity(members.len());
        for member in members {
            let name = member.display_name().to_string();
            if let Some(entry) = cx.within(&name, |cx| record_entry(cx, out, member)) {
                entries.push(entry);
            }
        }

        let count = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            out.append(entry);
            if i + 1 < count || spread.is_some() {
                out.append(",");
            }
            out.append("\n");
        }
        if let Some(spread) = spread {
            out.write(&format!("...{}\n", spread));
        }
    });
    out.write("}");
    if let Some(cast) = cast {
        out.append(&format!(" as {}", cast));
    }
    out.append("))");
    Ok(())
}

/// Render one `"name": expr` entry into a fresh child stream.
fn record_entry(cx: &mut EmitContext<'_>, out: &CodeStream, member: &Member) -> Option<String> {
    let (name, ty) = match property(member) {
        Ok(found) => found,
        Err(err) => {
            cx.warn("default", format!("skipped: {}", err));
            return None;
        }
    };

    let mut entry = out.child();
    entry.write(&format!("{}: ", string_literal(name)));
    let result = cx
        .describe(ty)
        .and_then(|described| emit_default(cx, &mut entry, &described));

    match result {
        Ok(()) => Some(entry.value()),
        Err(_) if member.optional => {
            let mut absent = out.child();
            absent.write(&format!("{}: undefined", string_literal(name)));
            Some(absent.value())
        }
        Err(err) => {
            cx.warn("default", format!("skipped: {}", err));
            None
        }
    }
}
