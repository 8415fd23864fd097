//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the manifest.
    pub manifest_path: PathBuf,
    /// Units declared in the manifest.
    pub unit_count: usize,
    /// Declarations of every kind across all units.
    pub declaration_count: usize,
    /// Units that would produce a file.
    pub generated_count: usize,
    /// Factories plus guards that would be emitted.
    pub function_count: usize,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

fn plural(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.manifest_path.display()));
        out.newline();
        out.list_item(&format!(
            "{}, {}",
            plural(self.unit_count, "unit"),
            plural(self.declaration_count, "declaration")
        ));
        out.list_item(&format!(
            "{} would generate {}",
            plural(self.generated_count, "unit"),
            plural(self.function_count, "function")
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::CapturedOutput;

    #[test]
    fn test_render_summary() {
        let report = CheckReport {
            manifest_path: PathBuf::from("shapes.toml"),
            unit_count: 2,
            declaration_count: 1,
            generated_count: 1,
            function_count: 2,
            warnings: vec![],
            infos: vec![],
        };

        let mut out = CapturedOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.stdout,
            [
                "✓ shapes.toml is valid",
                "",
                "  - 2 units, 1 declaration",
                "  - 1 unit would generate 2 functions"
            ]
        );
        assert!(out.stderr.is_empty());
    }
}
