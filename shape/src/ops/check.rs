//! Check operation - manifest validation and a dry generation run.

use std::path::Path;

use eyre::Result;
use shapegen_codegen::diagnostic::Severity;
use shapegen_ir::DeclarationProvider;
use shapegen_manifest::Manifest;

use super::{Settings, generate::run_generator};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The manifest is already validated by loading it; this runs synthesis
/// over every selected unit and collects its diagnostics.
pub fn check(manifest: &Manifest, manifest_path: &Path, settings: &Settings) -> Result<CheckReport> {
    let generation = run_generator(manifest, settings)?;

    let units = manifest.declarations().source_units();
    let declaration_count = units.iter().map(|u| u.declarations.len()).sum();
    let function_count = generation
        .units
        .iter()
        .filter_map(|generated| units.iter().find(|u| u.path == generated.source))
        .map(|unit| unit.interfaces().count() * 2)
        .sum();

    let mut warnings = Vec::new();
    let mut infos = Vec::new();
    for diag in &generation.diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };
        match diag.severity {
            Severity::Info => infos.push(msg),
            Severity::Warning | Severity::Error => warnings.push(msg),
        }
    }

    Ok(CheckReport {
        manifest_path: manifest_path.to_path_buf(),
        unit_count: units.len(),
        declaration_count,
        generated_count: generation.units.len(),
        function_count,
        warnings,
        infos,
    })
}
