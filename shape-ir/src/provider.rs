//! The type oracle the generator queries.

use std::path::Path;

use crate::{Declaration, DeclarationKind, Member, NamedRef, SourceUnit, TypeDescription, TypeRef};

/// How many alias hops a description may follow before it is treated as a cycle.
const MAX_ALIAS_DEPTH: usize = 64;

/// Errors raised while normalizing a declared type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("unknown type `{name}`")]
    UnknownType { name: String },

    #[error("type alias `{name}` refers to itself")]
    AliasCycle { name: String },
}

/// Answers questions about declared types.
///
/// Implementors only need to hand out their source units; lookup and
/// normalization have default implementations that search the unit a
/// reference was written in before searching every unit in order.
pub trait DeclarationProvider {
    /// All units known to the provider, in a stable order.
    fn source_units(&self) -> &[SourceUnit];

    /// Find a named declaration, preferring the unit it was referenced from.
    fn lookup(&self, name: &str, origin: Option<&Path>) -> Option<&Declaration> {
        let units = self.source_units();
        if let Some(origin) = origin
            && let Some(found) = units
                .iter()
                .filter(|u| u.path == origin)
                .find_map(|u| u.declaration(name))
        {
            return Some(found);
        }
        units.iter().find_map(|u| u.declaration(name))
    }

    /// Members of an object or class-like description, in declaration order.
    fn members_of<'a>(&self, description: &'a TypeDescription) -> &'a [Member] {
        match description {
            TypeDescription::Object(members) | TypeDescription::ClassLike { members, .. } => members,
            TypeDescription::Alias { target, .. } => self.members_of(target),
            _ => &[],
        }
    }

    /// Normalize a declared type.
    fn describe(&self, ty: &TypeRef) -> Result<TypeDescription, ResolveError> {
        describe_at(self, ty, 0)
    }

    /// Resolve a named reference to its description.
    fn resolve_reference(&self, named: &NamedRef) -> Result<TypeDescription, ResolveError> {
        resolve_at(self, named, 0)
    }
}

fn describe_at<P: DeclarationProvider + ?Sized>(
    provider: &P,
    ty: &TypeRef,
    depth: usize,
) -> Result<TypeDescription, ResolveError> {
    Ok(match ty {
        TypeRef::Keyword(kind) => TypeDescription::Primitive(*kind),
        TypeRef::Literal(value) => TypeDescription::Literal(value.clone()),
        TypeRef::Function => TypeDescription::Primitive(crate::PrimitiveKind::Function),
        TypeRef::Array(element) => TypeDescription::Array(Box::new(describe_at(provider, element, depth)?)),
        TypeRef::Object(members) => TypeDescription::Object(members.clone()),
        TypeRef::Union(alternatives) => {
            let mut flat = Vec::with_capacity(alternatives.len());
            for alternative in alternatives {
                match describe_at(provider, alternative, depth)? {
                    TypeDescription::Union(nested) => flat.extend(nested),
                    other => flat.push(other),
                }
            }
            TypeDescription::Union(flat)
        }
        TypeRef::Param(name) => TypeDescription::Reference { name: name.clone() },
        TypeRef::Named(named) => resolve_at(provider, named, depth)?,
        TypeRef::Unsupported(kind) => TypeDescription::Unsupported { kind: kind.clone() },
    })
}

fn resolve_at<P: DeclarationProvider + ?Sized>(
    provider: &P,
    named: &NamedRef,
    depth: usize,
) -> Result<TypeDescription, ResolveError> {
    let Some(declaration) = provider.lookup(&named.name, named.origin.as_deref()) else {
        if named.name == "Date" && named.args.is_empty() {
            return Ok(TypeDescription::date());
        }
        return Err(ResolveError::UnknownType {
            name: named.name.clone(),
        });
    };

    if !named.args.is_empty() || declaration.is_generic() {
        return Ok(TypeDescription::Reference {
            name: named.to_string(),
        });
    }

    match &declaration.kind {
        DeclarationKind::Interface | DeclarationKind::Class => Ok(TypeDescription::ClassLike {
            name: declaration.name.clone(),
            members: declaration.members.clone(),
        }),
        DeclarationKind::Alias(target) => {
            if depth >= MAX_ALIAS_DEPTH {
                return Err(ResolveError::AliasCycle {
                    name: declaration.name.clone(),
                });
            }
            // Object members are described lazily, so keep the alias name on
            // them; a walker needs it to stop at a self-referencing alias.
            match describe_at(provider, target, depth + 1)? {
                object @ TypeDescription::Object(_) => Ok(TypeDescription::Alias {
                    name: declaration.name.clone(),
                    target: Box::new(object),
                }),
                other => Ok(other),
            }
        }
    }
}

/// An in-memory provider over a fixed list of units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    units: Vec<SourceUnit>,
}

impl Declarations {
    pub fn new(units: Vec<SourceUnit>) -> Self {
        Self { units }
    }

    pub fn push(&mut self, unit: SourceUnit) {
        self.units.push(unit);
    }
}

impl DeclarationProvider for Declarations {
    fn source_units(&self) -> &[SourceUnit] {
        &self.units
    }
}
