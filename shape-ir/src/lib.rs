//! Intermediate representation types for the shapegen code generator.
//!
//! This crate holds the two vocabularies the synthesis engine speaks:
//! declarations as a provider reports them ([`SourceUnit`], [`Declaration`],
//! [`Member`], [`TypeRef`]) and normalized answers about types
//! ([`TypeDescription`]). The [`DeclarationProvider`] trait connects them.
//!
//! # Architecture
//!
//! ```text
//! shapes.toml → shape-manifest (parsing) → shape-ir (declarations) → provider → codegen
//! ```
//!
//! The types are designed to be:
//! - Independent of any surface syntax (no TypeScript parsing here)
//! - Immutable once handed to the generator
//! - Cheap to build by hand, so tests can stand up a complete oracle

mod decl;
mod description;
mod provider;
mod types;

pub use decl::{Declaration, DeclarationKind, Member, MemberKind, NamedRef, SourceUnit, TypeRef};
pub use description::TypeDescription;
pub use provider::{DeclarationProvider, Declarations, ResolveError};
pub use types::{LiteralValue, PrimitiveKind};
