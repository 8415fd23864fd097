//! Declarations as a provider reports them.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{LiteralValue, PrimitiveKind};

/// A declared type, before normalization.
///
/// This is the shape of a type annotation as written. The provider turns
/// it into a [`TypeDescription`](crate::TypeDescription) on request.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// `number`, `string`, `boolean`, `bigint`, `null`, `Function`.
    Keyword(PrimitiveKind),
    /// `'ok'`, `42`, `true`.
    Literal(LiteralValue),
    /// `T[]` or `Array<T>`.
    Array(Box<TypeRef>),
    /// Inline object type `{ a: T; b?: U }`.
    Object(Vec<Member>),
    /// `A | B | C`.
    Union(Vec<TypeRef>),
    /// Arrow function type `(a: A) => R`.
    Function,
    /// A type parameter of the enclosing declaration.
    Param(String),
    /// A reference to a declared or built-in type.
    Named(NamedRef),
    /// A shape the provider cannot normalize (`any`, tuples, intersections...).
    Unsupported(String),
}

impl TypeRef {
    pub fn number() -> Self {
        Self::Keyword(PrimitiveKind::Number)
    }

    pub fn string() -> Self {
        Self::Keyword(PrimitiveKind::String)
    }

    pub fn boolean() -> Self {
        Self::Keyword(PrimitiveKind::Boolean)
    }

    pub fn null() -> Self {
        Self::Keyword(PrimitiveKind::Null)
    }

    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedRef::new(name))
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(LiteralValue::String(value.into()))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(kind) => write!(f, "{}", kind),
            Self::Literal(value) => write!(f, "{}", value),
            Self::Array(element) => write!(f, "{}[]", element),
            Self::Object(members) => write!(f, "{{ {} members }}", members.len()),
            Self::Union(alternatives) => {
                let parts: Vec<String> = alternatives.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(" | "))
            }
            Self::Function => f.write_str("function"),
            Self::Param(name) => f.write_str(name),
            Self::Named(named) => write!(f, "{}", named),
            Self::Unsupported(kind) => f.write_str(kind),
        }
    }
}

/// A reference to a named type, remembering which unit wrote it.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRef {
    pub name: String,
    /// Type arguments, e.g. `IRequest<IVoid>`.
    pub args: Vec<TypeRef>,
    /// Unit the reference was written in; lookups try this unit first.
    pub origin: Option<PathBuf>,
}

impl NamedRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            origin: None,
        }
    }

    pub fn with_args(mut self, args: Vec<TypeRef>) -> Self {
        self.args = args;
        self
    }

    pub fn from_unit(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

impl fmt::Display for NamedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        Ok(())
    }
}

/// What kind of member signature a declaration member is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberKind {
    #[default]
    Property,
    Method,
    Index,
}

/// One member of an interface, class or inline object type.
///
/// Name and type are optional because providers report malformed
/// signatures as they find them; the walker decides what to do with them.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: Option<String>,
    pub ty: Option<TypeRef>,
    pub optional: bool,
    pub kind: MemberKind,
}

impl Member {
    /// A required property signature `name: ty`.
    pub fn property(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: Some(name.into()),
            ty: Some(ty),
            optional: false,
            kind: MemberKind::Property,
        }
    }

    /// A method signature `name(): ...`.
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: None,
            optional: false,
            kind: MemberKind::Method,
        }
    }

    /// Mark the member optional (`name?: ty`).
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Name to show in diagnostics.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Declaration flavors a unit can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationKind {
    Interface,
    Class,
    Alias(TypeRef),
}

/// A named declaration in a source unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    pub type_params: Vec<String>,
    pub members: Vec<Member>,
}

impl Declaration {
    pub fn interface(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            name: name.into(),
            kind: DeclarationKind::Interface,
            type_params: Vec::new(),
            members,
        }
    }

    pub fn class(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            name: name.into(),
            kind: DeclarationKind::Class,
            type_params: Vec::new(),
            members,
        }
    }

    pub fn alias(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind: DeclarationKind::Alias(ty),
            type_params: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn with_type_params(mut self, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, DeclarationKind::Interface)
    }

    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }
}

/// One source file under analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub declarations: Vec<Declaration>,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            declarations: Vec::new(),
        }
    }

    pub fn with(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level interfaces in source order.
    pub fn interfaces(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().filter(|d| d.is_interface())
    }

    /// Find a declaration of any kind by name.
    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name == name)
    }
}
