//! Lowering manifest entries into the declaration model.

use std::path::Path;

use miette::SourceSpan;
use shapegen_ir::{Declaration, DeclarationKind, Declarations, Member, SourceUnit, TypeRef};
use toml::Spanned;

use super::{DeclarationSpec, Manifest, MemberSpec};
use crate::{
    Result,
    error::SourceContext,
    type_expr::{TypeScope, parse_type},
};

/// Lower every unit in manifest order.
pub(super) fn lower_units(manifest: &Manifest, source: &SourceContext) -> Result<Declarations> {
    let mut declarations = Declarations::default();

    for unit in &manifest.units {
        let path = manifest.resolve_path(unit.path.get_ref());
        let mut lowered = SourceUnit::new(path.clone());

        for interface in &unit.interfaces {
            lowered
                .declarations
                .push(lower_structure(interface, DeclarationKind::Interface, &path, source)?);
        }
        for class in &unit.classes {
            lowered
                .declarations
                .push(lower_structure(class, DeclarationKind::Class, &path, source)?);
        }
        for alias in &unit.aliases {
            let params = param_names(&alias.type_params);
            let scope = TypeScope {
                type_params: &params,
                origin: Some(path.as_path()),
            };
            let target = lower_type(&alias.ty, scope, source)?;
            lowered.declarations.push(
                Declaration::alias(alias.name.get_ref().clone(), target).with_type_params(params),
            );
        }

        declarations.push(lowered);
    }

    Ok(declarations)
}

fn param_names(params: &[Spanned<String>]) -> Vec<String> {
    params.iter().map(|p| p.get_ref().clone()).collect()
}

fn lower_structure(
    spec: &DeclarationSpec,
    kind: DeclarationKind,
    unit: &Path,
    source: &SourceContext,
) -> Result<Declaration> {
    let params = param_names(&spec.type_params);
    let scope = TypeScope {
        type_params: &params,
        origin: Some(unit),
    };
    let members = spec
        .members
        .iter()
        .map(|member| lower_member(member, scope, source))
        .collect::<Result<Vec<_>>>()?;

    Ok(Declaration {
        name: spec.name.get_ref().clone(),
        kind,
        type_params: params.clone(),
        members,
    })
}

fn lower_member(spec: &MemberSpec, scope: TypeScope<'_>, source: &SourceContext) -> Result<Member> {
    let ty = spec
        .ty
        .as_ref()
        .map(|ty| lower_type(ty, scope, source))
        .transpose()?;

    Ok(Member {
        name: spec.name.as_ref().map(|name| name.get_ref().clone()),
        ty,
        optional: spec.optional,
        kind: spec.kind.into(),
    })
}

/// Parse a spanned type expression, mapping parser offsets into the manifest.
fn lower_type(
    expr: &Spanned<String>,
    scope: TypeScope<'_>,
    source: &SourceContext,
) -> Result<TypeRef> {
    parse_type(expr.get_ref(), scope).map_err(|e| {
        let span = expr.span();
        // The span covers the quoted TOML string; skip the opening quote.
        let offset = (span.start + 1 + e.offset).min(span.end.saturating_sub(1));
        source.type_error(
            expr.get_ref(),
            e.message,
            Some(SourceSpan::from((offset, 1))),
        )
    })
}
