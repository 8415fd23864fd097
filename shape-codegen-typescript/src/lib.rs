//! TypeScript factory and validator generator.
//!
//! For every interface declared in an eligible source unit this crate emits
//! two functions into a mirrored output unit:
//!
//! - `create<Name>(params)` returns a frozen, sealed default instance with
//!   `params` spread over it
//! - `is<Name>(value)` checks at runtime that an unknown value has the
//!   interface's shape
//!
//! Types are looked up through a [`DeclarationProvider`](shapegen_ir::DeclarationProvider);
//! nothing here parses TypeScript.
//!
//! # Usage
//!
//! ```ignore
//! use shapegen_codegen_typescript::{Generator, GeneratorOptions, files::UnitFile};
//! use shapegen_core::GeneratedFile;
//!
//! let generation = Generator::new(&provider, options).generate()?;
//! for unit in &generation.units {
//!     UnitFile::new(unit).write(&destination)?;
//! }
//! ```
//!
//! # Generated Output
//!
//! Each output unit holds, in order: one import block per source unit it
//! references, the helper functions it calls (`isUnknownObject`,
//! `validateVector`), then the factory and guard of each interface.

mod generator;
mod helpers;
mod naming;
mod unit;
mod unit_builder;

pub mod ast;
pub mod files;
pub mod walker;

pub use generator::{GenerateError, Generation, Generator, GeneratorOptions, is_eligible};
pub use helpers::Helper;
pub use unit::{GeneratedUnit, Requirements};
pub use unit_builder::UnitBuilder;
pub use walker::{EmitContext, SynthesisError};
