use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use shapegen_manifest::{MANIFEST_FILE, Manifest};

use super::UnwrapOrExit;
use crate::{
    ops::{self, Settings},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to shapes.toml (defaults to ./shapes.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Destination directory, relative to the manifest (overrides [generator] output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Prefix stripped from unit directories to form output paths, relative to the manifest
    #[arg(long)]
    pub root_dir: Option<PathBuf>,

    /// Only generate units matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Skip units matching this regex (repeatable)
    #[arg(long, value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Write <output>/tsconfig.json extending this file
    #[arg(long, value_name = "FILE")]
    pub ts_extends: Option<PathBuf>,

    /// Project reference for the generated tsconfig.json (repeatable)
    #[arg(long = "ts-reference", value_name = "DIR")]
    pub ts_references: Vec<PathBuf>,

    /// Spaces per indentation level; 0 selects tabs
    #[arg(long)]
    pub indent: Option<u8>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();
        let settings = self.settings(&manifest);

        let report = ops::generate(&manifest, &self.manifest, &settings, self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Manifest settings with command-line values laid over them.
    ///
    /// Paths given on the command line resolve against the manifest's
    /// directory, like the `[generator]` values they replace, so they are
    /// comparable with the unit paths.
    pub(crate) fn settings(&self, manifest: &Manifest) -> Settings {
        let mut settings = Settings::from_manifest(manifest);
        if let Some(output) = &self.output {
            settings.destination = manifest.resolve_path(output);
        }
        if let Some(root_dir) = &self.root_dir {
            settings.root_dir = manifest.resolve_path(root_dir);
        }
        if let Some(indent) = self.indent {
            settings.indent = indent;
        }
        if !self.include.is_empty() {
            settings.include = self.include.clone();
        }
        if !self.exclude.is_empty() {
            settings.exclude = self.exclude.clone();
        }
        if let Some(extends) = &self.ts_extends {
            settings.extends = Some(manifest.resolve_path(extends));
        }
        if !self.ts_references.is_empty() {
            settings.references = self
                .ts_references
                .iter()
                .map(|reference| manifest.resolve_path(reference))
                .collect();
        }
        settings
    }
}
