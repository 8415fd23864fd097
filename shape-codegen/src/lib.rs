//! Shared code generation utilities for the shapegen code generator.
//!
//! This crate provides language-agnostic building blocks used by the
//! TypeScript generator (`shapegen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text accumulation ([`CodeStream`](builder::CodeStream))
//! - [`generation`] - Import tracking and deduplication
//! - [`diagnostic`] - Non-fatal findings collected during a run
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod diagnostic;
pub mod generation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
