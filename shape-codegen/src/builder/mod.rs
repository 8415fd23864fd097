//! Code generation building blocks.
//!
//! - [`CodeStream`] - Indentation-aware, append-only text accumulator
//! - [`IndentContext`] - Depth shared between a stream and its children
//! - [`Indent`] - Indentation configuration

mod code_stream;
mod indent;

pub use code_stream::CodeStream;
pub use indent::{Indent, IndentContext};
