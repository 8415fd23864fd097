//! tsconfig.json for the destination directory.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use serde::Serialize;
use serde_json::{Value, json, ser::PrettyFormatter};
use shapegen_core::{GeneratedFile, relative_path};

/// A `tsconfig.json` that extends a base configuration.
///
/// Paths are stored relative to the destination directory, with `/`
/// separators, exactly as they appear in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsConfig {
    extends: String,
    references: Vec<String>,
}

impl TsConfig {
    /// A config written to `destination`, extending `extends` and referencing
    /// each project in `references`.
    pub fn new(destination: &Path, extends: &Path, references: &[PathBuf]) -> Result<Self> {
        Ok(Self {
            extends: relative_to(destination, extends)?,
            references: references
                .iter()
                .map(|reference| relative_to(destination, reference))
                .collect::<Result<_>>()?,
        })
    }

    fn to_json(&self) -> Value {
        let references: Vec<Value> = self
            .references
            .iter()
            .map(|path| json!({ "path": path }))
            .collect();
        json!({
            "extends": self.extends,
            "references": references,
        })
    }
}

fn relative_to(destination: &Path, target: &Path) -> Result<String> {
    let relative = relative_path(destination, target).ok_or_else(|| {
        eyre!(
            "cannot reach {} from {}: one path is absolute and the other relative",
            target.display(),
            destination.display()
        )
    })?;
    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/"))
}

impl GeneratedFile for TsConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tsconfig.json")
    }

    fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        self.to_json().serialize(&mut serializer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
