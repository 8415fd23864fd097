//! Core utilities and types for the shapegen code generator.
//!
//! This crate provides the path arithmetic and file-writing primitives
//! shared by the generator crates and the command-line tool.

mod file;
mod paths;
mod utils;

// File operations
pub use file::{GeneratedFile, reset_dir};
// Path arithmetic
pub use paths::{
    import_specifier, is_declaration_unit, is_source_unit, relative_path, strip_root,
    strip_source_extension, unit_stem,
};
// String utilities
pub use utils::capitalize;
