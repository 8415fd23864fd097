//! The generation driver.

use std::path::{Path, PathBuf};

use shapegen_codegen::{builder::Indent, diagnostic::Diagnostic};
use shapegen_core::{is_declaration_unit, is_source_unit};
use shapegen_ir::{DeclarationProvider, SourceUnit};

use crate::{unit::GeneratedUnit, unit_builder::UnitBuilder, walker::SynthesisError};

/// Where units come from and where they go.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    /// Prefix stripped from each unit's directory to form its output path.
    pub root_dir: PathBuf,
    /// Directory generated units are written below; import paths are relative to it.
    pub destination: PathBuf,
    pub indent: Indent,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            destination: PathBuf::from("schema"),
            indent: Indent::default(),
        }
    }
}

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to generate `{declaration}` in {}", .unit.display())]
    Synthesis {
        unit: PathBuf,
        declaration: String,
        #[source]
        source: SynthesisError,
    },

    #[error("unit {} is outside the root directory {}", .unit.display(), .root.display())]
    OutsideRoot { unit: PathBuf, root: PathBuf },

    #[error("unit path {} has no file name", .unit.display())]
    InvalidUnitPath { unit: PathBuf },

    #[error(
        "cannot import {} from {}: one path is absolute and the other relative",
        .to.display(),
        .from.display()
    )]
    UnrelatedPaths { from: PathBuf, to: PathBuf },
}

/// The result of a successful run.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    /// Generated units with content, in provider order.
    pub units: Vec<GeneratedUnit>,
    /// Non-fatal findings from every unit.
    pub diagnostics: Vec<Diagnostic>,
}

/// Whether a unit is generated at all: TypeScript sources, minus `.d.ts`.
pub fn is_eligible(path: &Path) -> bool {
    is_source_unit(path) && !is_declaration_unit(path)
}

type UnitFilter<'a> = Box<dyn Fn(&Path) -> bool + 'a>;

/// Drives generation over every eligible unit of a provider.
///
/// # Example
///
/// ```
/// use shapegen_codegen_typescript::{Generator, GeneratorOptions};
/// use shapegen_ir::{Declaration, Declarations, Member, SourceUnit, TypeRef};
///
/// let provider = Declarations::new(vec![SourceUnit::new("test/User.ts").with(
///     Declaration::interface("IUser", vec![Member::property("email", TypeRef::string())]),
/// )]);
/// let generation = Generator::new(&provider, GeneratorOptions::default())
///     .generate()
///     .unwrap();
///
/// assert!(generation.units[0].contents.contains("export function isIUser("));
/// ```
pub struct Generator<'a> {
    provider: &'a dyn DeclarationProvider,
    options: GeneratorOptions,
    filter: Option<UnitFilter<'a>>,
}

impl<'a> Generator<'a> {
    pub fn new(provider: &'a dyn DeclarationProvider, options: GeneratorOptions) -> Self {
        Self {
            provider,
            options,
            filter: None,
        }
    }

    /// Only generate units whose path satisfies `filter`.
    pub fn with_filter(mut self, filter: impl Fn(&Path) -> bool + 'a) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Units that will be generated, in provider order.
    pub fn eligible_units(&self) -> impl Iterator<Item = &SourceUnit> + '_ {
        self.provider.source_units().iter().filter(|unit| {
            is_eligible(&unit.path) && self.filter.as_ref().is_none_or(|filter| filter(unit.path.as_path()))
        })
    }

    /// Generate every eligible unit.
    ///
    /// The first failure aborts the run and no units are returned. Units
    /// that produce no text are left out of the result.
    pub fn generate(&self) -> Result<Generation, GenerateError> {
        let builder = UnitBuilder::new(self.provider, &self.options);
        let mut generation = Generation::default();

        for unit in self.eligible_units() {
            let (generated, diagnostics) = builder.build(unit)?;
            generation.diagnostics.extend(diagnostics);
            if generated.is_empty() {
                tracing::debug!(unit = %unit.path.display(), "no content, skipping");
                continue;
            }
            generation.units.push(generated);
        }

        tracing::debug!(units = generation.units.len(), "generation finished");
        Ok(generation)
    }
}
