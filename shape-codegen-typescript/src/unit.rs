//! Generated output units and the requirements they accumulate.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use shapegen_codegen::generation::ImportCollector;

use crate::helpers::Helper;

/// Helpers and cross-unit symbols one output unit needs.
///
/// Both are recorded while synthesizing the body and emitted once each,
/// ahead of it, when the unit is finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    helpers: BTreeSet<Helper>,
    imports: ImportCollector,
}

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `helper` is called and return the name to call it by.
    pub fn require_helper(&mut self, helper: Helper) -> &'static str {
        self.helpers.insert(helper);
        helper.id()
    }

    /// Record symbols imported from the source unit at `source`.
    pub fn require_import<'a>(&mut self, symbols: impl IntoIterator<Item = &'a str>, source: &Path) {
        self.imports
            .add_all(&source.to_string_lossy(), symbols);
    }

    /// Helpers in definition order.
    pub fn helpers(&self) -> impl Iterator<Item = Helper> + '_ {
        self.helpers.iter().copied()
    }

    /// Imported symbols keyed by source unit path, in first-use order.
    pub fn imports(&self) -> &ImportCollector {
        &self.imports
    }
}

/// One generated TypeScript file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedUnit {
    /// The source unit this file was generated from.
    pub source: PathBuf,
    /// Output path relative to the destination directory.
    pub out_file: PathBuf,
    /// Capitalized base name of the source unit (`user.ts` -> `User`).
    pub type_prefix: String,
    /// Final text: imports, helpers, then body.
    pub contents: String,
    pub requirements: Requirements,
}

impl GeneratedUnit {
    /// Identifiers of the helpers defined in this unit.
    pub fn helper_ids(&self) -> Vec<&'static str> {
        self.requirements.helpers().map(|h| h.id()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
