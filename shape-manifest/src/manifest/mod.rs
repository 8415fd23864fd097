//! Manifest types for shapes.toml files.

mod lower;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use shapegen_ir::{Declarations, MemberKind};
use toml::Spanned;

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "shapes.toml";

/// Default destination directory.
pub const DEFAULT_OUTPUT: &str = "schema";

/// Default spaces per indentation level.
pub const DEFAULT_INDENT: u8 = 4;

/// Root manifest for shapes.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Source units in provider order
    #[serde(default)]
    pub units: Vec<UnitSpec>,

    /// Directory manifest-relative paths resolve against
    #[serde(skip)]
    base_dir: PathBuf,

    /// Units lowered into the declaration model
    #[serde(skip)]
    declarations: Declarations,
}

/// The `[generator]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Prefix stripped from unit directories to form output paths
    pub root_dir: Option<PathBuf>,

    /// Destination directory
    pub output: Option<PathBuf>,

    /// Spaces per indentation level; 0 selects tabs
    pub indent: Option<u8>,

    /// Base tsconfig the generated tsconfig.json extends
    pub extends: Option<PathBuf>,

    /// Project references for the generated tsconfig.json
    #[serde(default)]
    pub references: Vec<PathBuf>,

    /// Glob patterns a unit path must match
    #[serde(default)]
    pub include: Vec<String>,

    /// Regex patterns that exclude unit paths
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// A `[[units]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitSpec {
    /// Unit path, relative to the manifest
    pub path: Spanned<String>,

    #[serde(default)]
    pub interfaces: Vec<DeclarationSpec>,

    #[serde(default)]
    pub classes: Vec<DeclarationSpec>,

    #[serde(default)]
    pub aliases: Vec<AliasSpec>,
}

/// An interface or class declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DeclarationSpec {
    pub name: Spanned<String>,

    #[serde(default)]
    pub type_params: Vec<Spanned<String>>,

    #[serde(default)]
    pub members: Vec<MemberSpec>,
}

/// A type alias declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AliasSpec {
    pub name: Spanned<String>,

    #[serde(rename = "type")]
    pub ty: Spanned<String>,

    #[serde(default)]
    pub type_params: Vec<Spanned<String>>,
}

/// One member of an interface or class.
///
/// Name and type are optional so a manifest can record the malformed
/// signatures a checker reports; the generator skips them with a warning.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberSpec {
    pub name: Option<Spanned<String>>,

    #[serde(rename = "type")]
    pub ty: Option<Spanned<String>>,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub kind: MemberKindSpec,
}

/// Member signature flavor as written in the manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKindSpec {
    #[default]
    Property,
    Method,
    Index,
}

impl From<MemberKindSpec> for MemberKind {
    fn from(kind: MemberKindSpec) -> Self {
        match kind {
            MemberKindSpec::Property => MemberKind::Property,
            MemberKindSpec::Method => MemberKind::Method,
            MemberKindSpec::Index => MemberKind::Index,
        }
    }
}

impl Manifest {
    /// Directory the manifest was loaded from (empty for in-memory sources).
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a manifest-relative path.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn root_dir(&self) -> PathBuf {
        self.resolve_path(self.generator.root_dir.as_deref().unwrap_or(Path::new(".")))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(
            self.generator
                .output
                .as_deref()
                .unwrap_or(Path::new(DEFAULT_OUTPUT)),
        )
    }

    pub fn indent(&self) -> u8 {
        self.generator.indent.unwrap_or(DEFAULT_INDENT)
    }

    pub fn extends(&self) -> Option<PathBuf> {
        self.generator.extends.as_ref().map(|p| self.resolve_path(p))
    }

    pub fn references(&self) -> Vec<PathBuf> {
        self.generator
            .references
            .iter()
            .map(|p| self.resolve_path(p))
            .collect()
    }

    /// The lowered declarations, one source unit per `[[units]]` entry.
    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }
}
