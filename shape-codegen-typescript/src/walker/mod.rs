//! Recursive synthesis over normalized type descriptions.
//!
//! [`emit_default`] writes a factory's default-value expression and
//! [`emit_validator`] writes the guard statements of a type guard. Both
//! thread an [`EmitContext`] through every call: it holds the provider,
//! the unit being generated, that unit's [`Requirements`] and the stack of
//! named types currently being expanded.

mod defaults;
mod validators;

use shapegen_codegen::diagnostic::Diagnostic;
use shapegen_ir::{DeclarationProvider, Member, MemberKind, ResolveError, SourceUnit, TypeDescription, TypeRef};

pub use defaults::{emit_default, emit_record};
pub use validators::{emit_object_checks, emit_validator};

use crate::{helpers::Helper, unit::Requirements};

/// Why a type could not be synthesized.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthesisError {
    #[error("unsupported type shape `{kind}`")]
    Unsupported { kind: String },

    #[error("member `{name}` {reason}")]
    MalformedMember { name: String, reason: &'static str },

    #[error("`{name}` has no members to build a default from")]
    EmptyStructure { name: String },

    #[error("no default value for unresolved reference `{name}`")]
    NoDefault { name: String },

    #[error("`{name}` refers to itself and has no type guard in this unit")]
    Recursive { name: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl SynthesisError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedMember { .. })
    }
}

/// State shared by every recursive call while one unit is generated.
pub struct EmitContext<'a> {
    provider: &'a dyn DeclarationProvider,
    unit: &'a SourceUnit,
    requirements: Requirements,
    diagnostics: Vec<Diagnostic>,
    expanding: Vec<String>,
    path: Vec<String>,
}

impl<'a> EmitContext<'a> {
    pub fn new(provider: &'a dyn DeclarationProvider, unit: &'a SourceUnit) -> Self {
        Self {
            provider,
            unit,
            requirements: Requirements::new(),
            diagnostics: Vec::new(),
            expanding: Vec::new(),
            path: Vec::new(),
        }
    }

    pub fn unit(&self) -> &'a SourceUnit {
        self.unit
    }

    /// Normalize a declared type through the provider.
    pub fn describe(&self, ty: &TypeRef) -> Result<TypeDescription, SynthesisError> {
        Ok(self.provider.describe(ty)?)
    }

    pub fn require_helper(&mut self, helper: Helper) -> &'static str {
        self.requirements.require_helper(helper)
    }

    pub fn require_import(&mut self, symbols: &[&str]) {
        let source = self.unit.path.clone();
        self.requirements.require_import(symbols.iter().copied(), &source);
    }

    /// Whether `name` is somewhere on the current expansion stack.
    pub fn is_expanding(&self, name: &str) -> bool {
        self.expanding.iter().any(|n| n == name)
    }

    /// Whether the unit being generated emits a type guard for `name`.
    pub fn generates(&self, name: &str) -> bool {
        self.unit.interfaces().any(|d| d.name == name)
    }

    /// Run `body` with `name` pushed on the expansion stack.
    pub fn expanding<R>(&mut self, name: &str, body: impl FnOnce(&mut Self) -> R) -> R {
        self.expanding.push(name.to_string());
        let result = body(self);
        self.expanding.pop();
        result
    }

    /// Run `body` with `segment` appended to the location path.
    pub fn within<R>(&mut self, segment: &str, body: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(segment.to_string());
        let result = body(self);
        self.path.pop();
        result
    }

    /// Human-readable position of the current member (`test/User.ts: IUser.postIds`).
    pub fn location(&self) -> String {
        format!("{}: {}", self.unit.path.display(), self.path.join("."))
    }

    /// Record a non-fatal finding at the current location.
    pub fn warn(&mut self, phase: &str, message: impl Into<String>) {
        let message = message.into();
        let location = self.location();
        tracing::warn!(phase, location = %location, "{}", message);
        self.diagnostics
            .push(Diagnostic::warning(phase, message).at(location));
    }

    /// Drop the context, keeping what it accumulated.
    pub fn finish(self) -> (Requirements, Vec<Diagnostic>) {
        (self.requirements, self.diagnostics)
    }
}

/// Name and declared type of a well-formed property member.
pub(crate) fn property(member: &Member) -> Result<(&str, &TypeRef), SynthesisError> {
    let malformed = |reason| SynthesisError::MalformedMember {
        name: member.display_name().to_string(),
        reason,
    };
    if member.kind != MemberKind::Property {
        return Err(malformed("is not a property signature"));
    }
    let name = member.name.as_deref().ok_or_else(|| malformed("has no name"))?;
    let ty = member.ty.as_ref().ok_or_else(|| malformed("has no declared type"))?;
    Ok((name, ty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapegen_ir::{Declaration, Declarations};

    #[test]
    fn test_property_rejects_malformed_members() {
        let method = Member::method("save");
        assert!(property(&method).unwrap_err().is_malformed());

        let untyped = Member {
            ty: None,
            ..Member::property("x", TypeRef::number())
        };
        assert_eq!(
            property(&untyped).unwrap_err().to_string(),
            "member `x` has no declared type"
        );

        let fine = Member::property("x", TypeRef::number());
        assert_eq!(property(&fine).unwrap().0, "x");
    }

    #[test]
    fn test_context_tracks_expansion_and_location() {
        let unit = SourceUnit::new("test/User.ts").with(Declaration::interface("IUser", vec![]));
        let provider = Declarations::new(vec![unit.clone()]);
        let mut cx = EmitContext::new(&provider, &unit);

        cx.expanding("IUser", |cx| {
            assert!(cx.is_expanding("IUser"));
            cx.within("IUser", |cx| cx.within("name", |cx| cx.warn("default", "skipped")));
        });
        assert!(!cx.is_expanding("IUser"));
        assert!(cx.generates("IUser"));
        assert!(!cx.generates("IPost"));

        let (_, diagnostics) = cx.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("test/User.ts: IUser.name"));
    }
}
