//! A generated unit as a file on disk.

use std::path::{Path, PathBuf};

use eyre::Result;
use shapegen_core::GeneratedFile;

use crate::GeneratedUnit;

/// Writes a [`GeneratedUnit`] to its output path below the destination.
pub struct UnitFile<'a> {
    unit: &'a GeneratedUnit,
}

impl<'a> UnitFile<'a> {
    pub fn new(unit: &'a GeneratedUnit) -> Self {
        Self { unit }
    }
}

impl GeneratedFile for UnitFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.unit.out_file)
    }

    fn render(&self) -> Result<String> {
        Ok(self.unit.contents.clone())
    }
}
