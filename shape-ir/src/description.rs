//! Normalized type descriptions.

use std::fmt;

use crate::{LiteralValue, Member, PrimitiveKind};

/// The provider's answer for a type reference.
///
/// Object and class-like members keep their declared [`TypeRef`](crate::TypeRef)s;
/// the walker asks the provider to describe each one when it gets there, so
/// self-referencing types never have to be expanded eagerly.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescription {
    Primitive(PrimitiveKind),
    Literal(LiteralValue),
    Array(Box<TypeDescription>),
    /// Anonymous object type; members in declaration order.
    Object(Vec<Member>),
    Union(Vec<TypeDescription>),
    /// Named interface or class, including the built-in `Date`.
    ClassLike { name: String, members: Vec<Member> },
    /// Object type reached through a named alias. The name is kept so a
    /// walker can detect an alias that refers back to itself.
    Alias { name: String, target: Box<TypeDescription> },
    /// Generic or parameterized reference that cannot be checked without
    /// a concrete instantiation.
    Reference { name: String },
    /// A shape with no mapping in the engine.
    Unsupported { kind: String },
}

impl TypeDescription {
    /// The built-in `Date` class.
    pub fn date() -> Self {
        Self::ClassLike {
            name: "Date".to_string(),
            members: Vec::new(),
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Self::ClassLike { name, .. } if name == "Date")
    }
}

impl fmt::Display for TypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "{}", kind),
            Self::Literal(value) => write!(f, "{}", value),
            Self::Array(element) => write!(f, "{}[]", element),
            Self::Object(members) => write!(f, "{{ {} members }}", members.len()),
            Self::Union(alternatives) => {
                let parts: Vec<String> = alternatives.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(" | "))
            }
            Self::ClassLike { name, .. } | Self::Alias { name, .. } => f.write_str(name),
            Self::Reference { name } => write!(f, "{} (unresolved)", name),
            Self::Unsupported { kind } => f.write_str(kind),
        }
    }
}
