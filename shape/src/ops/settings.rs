//! Effective generator settings.

use std::path::PathBuf;

use eyre::Result;
use shapegen_codegen::builder::Indent;
use shapegen_codegen_typescript::GeneratorOptions;
use shapegen_manifest::Manifest;

use crate::filter::UnitFilter;

/// Settings for one run: the `[generator]` table, possibly overridden
/// from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Directory filters are evaluated against.
    pub base_dir: PathBuf,
    pub root_dir: PathBuf,
    pub destination: PathBuf,
    pub indent: u8,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub extends: Option<PathBuf>,
    pub references: Vec<PathBuf>,
}

impl Settings {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            base_dir: manifest.base_dir().to_path_buf(),
            root_dir: manifest.root_dir(),
            destination: manifest.output_dir(),
            indent: manifest.indent(),
            include: manifest.generator.include.clone(),
            exclude: manifest.generator.exclude.clone(),
            extends: manifest.extends(),
            references: manifest.references(),
        }
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            root_dir: self.root_dir.clone(),
            destination: self.destination.clone(),
            indent: Indent::from_width(self.indent),
        }
    }

    pub fn filter(&self) -> Result<UnitFilter> {
        UnitFilter::new(&self.base_dir, &self.include, &self.exclude)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_from_manifest_defaults() {
        let manifest: Manifest = "".parse().unwrap();
        let settings = Settings::from_manifest(&manifest);
        assert_eq!(settings.root_dir, PathBuf::from("."));
        assert_eq!(settings.destination, PathBuf::from("schema"));
        assert_eq!(settings.generator_options().indent, Indent::Spaces(4));
        assert!(settings.extends.is_none());
    }

    #[test]
    fn test_from_manifest_generator_table() {
        let manifest: Manifest = r#"
[generator]
root-dir = "src"
output = "gen"
indent = 0
extends = "tsconfig.base.json"
references = ["../app"]
include = ["src/**/*.ts"]
"#
        .parse()
        .unwrap();
        let settings = Settings::from_manifest(&manifest);
        assert_eq!(settings.root_dir, PathBuf::from("src"));
        assert_eq!(settings.generator_options().indent, Indent::Tab);
        assert_eq!(settings.extends.as_deref(), Some(Path::new("tsconfig.base.json")));
        assert_eq!(settings.references, [PathBuf::from("../app")]);
        assert!(settings.filter().unwrap().matches(Path::new("src/User.ts")));
        assert!(!settings.filter().unwrap().matches(Path::new("lib/User.ts")));
    }
}
