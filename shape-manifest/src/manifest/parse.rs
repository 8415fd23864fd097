//! Manifest parsing from files and strings.

use std::{
    path::{Component, Path, PathBuf},
    str::FromStr,
};

use super::{MANIFEST_FILE, Manifest, lower::lower_units, validate::validate_manifest};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE, Path::new(""))
    }
}

impl Manifest {
    /// Parse a shapes.toml file from the given path.
    ///
    /// Relative paths inside the manifest resolve against its directory,
    /// which is made absolute so every resolved path is absolute too.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let io_error = |source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        let content = std::fs::read_to_string(path).map_err(io_error)?;
        let base_dir = absolute_dir(path.parent()).map_err(io_error)?;
        parse_manifest(&content, &path.display().to_string(), &base_dir)
    }

    /// Parse a shapes.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename, Path::new(""))
    }
}

/// Absolute form of a manifest's parent directory, without `.` components.
fn absolute_dir(parent: Option<&Path>) -> std::io::Result<PathBuf> {
    let dir = match parent {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    Ok(std::path::absolute(dir)?
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}

/// Parse, validate and lower a manifest.
pub fn parse_manifest(content: &str, filename: &str, base_dir: &Path) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let mut manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate_manifest(&manifest, &source)?;
    manifest.base_dir = base_dir.to_path_buf();
    manifest.declarations = lower_units(&manifest, &source)?;
    Ok(manifest)
}
