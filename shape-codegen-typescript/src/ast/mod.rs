//! TypeScript AST builders for the statements the generator emits.
//!
//! These provide a small, high-level API for constructing TypeScript
//! syntax, which is then written through a [`CodeStream`](shapegen_codegen::builder::CodeStream).

mod fns;
mod imports;

pub use fns::{Fn, Param};
pub use imports::Import;
