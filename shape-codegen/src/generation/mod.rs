//! Output bookkeeping shared by generators.
//!
//! - [`ImportCollector`] - Import tracking and deduplication

mod imports;

pub use imports::ImportCollector;
