//! Declaration manifest for shapegen.
//!
//! A `shapes.toml` manifest lists source units and the interfaces, classes
//! and aliases they declare, with member types written as TypeScript type
//! expressions. Loading a manifest validates it and lowers it into a
//! [`shapegen_ir::Declarations`] provider the generator can query.
//!
//! ```
//! use shapegen_ir::DeclarationProvider;
//! use shapegen_manifest::Manifest;
//!
//! let manifest: Manifest = r#"
//! [[units]]
//! path = "test/User.ts"
//!
//! [[units.interfaces]]
//! name = "IUser"
//! members = [{ name = "id", type = "number" }]
//! "#
//! .parse()
//! .unwrap();
//!
//! assert_eq!(manifest.declarations().source_units().len(), 1);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod type_expr;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    AliasSpec, DEFAULT_INDENT, DEFAULT_OUTPUT, DeclarationSpec, GeneratorConfig, MANIFEST_FILE,
    Manifest, MemberKindSpec, MemberSpec, UnitSpec,
};
pub use type_expr::{TypeExprError, TypeScope, parse_type};
pub use validate::ParseContext;
