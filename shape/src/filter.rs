//! Include/exclude filtering over unit paths.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use glob::Pattern;
use regex::Regex;
use shapegen_core::strip_root;

/// Selects the units a run generates.
///
/// Paths are matched relative to `base` with `/` separators. A unit is
/// selected when it matches any include pattern (or none are given) and no
/// exclude pattern.
#[derive(Debug, Clone)]
pub struct UnitFilter {
    base: PathBuf,
    include: Vec<Pattern>,
    exclude: Vec<Regex>,
}

impl UnitFilter {
    pub fn new(base: &Path, include: &[String], exclude: &[String]) -> Result<Self> {
        let include = include
            .iter()
            .map(|p| Pattern::new(p).wrap_err_with(|| format!("invalid include glob '{}'", p)))
            .collect::<Result<Vec<_>>>()?;
        let exclude = exclude
            .iter()
            .map(|p| Regex::new(p).wrap_err_with(|| format!("invalid exclude regex '{}'", p)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            base: base.to_path_buf(),
            include,
            exclude,
        })
    }

    pub fn matches(&self, path: &Path) -> bool {
        let relative = strip_root(path, &self.base).unwrap_or_else(|| path.to_path_buf());
        let text = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let included = self.include.is_empty() || self.include.iter().any(|p| p.matches(&text));
        included && !self.exclude.iter().any(|r| r.is_match(&text))
    }
}
