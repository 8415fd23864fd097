//! Core operations.
//!
//! This module contains the business logic for shapegen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
mod settings;

pub use check::check;
pub use generate::generate;
pub use settings::Settings;
