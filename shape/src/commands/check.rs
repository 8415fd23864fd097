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
pub struct CheckCommand {
    /// Path to shapes.toml (defaults to ./shapes.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub manifest: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();
        let settings = Settings::from_manifest(&manifest);

        let report = ops::check(&manifest, &self.manifest, &settings)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
