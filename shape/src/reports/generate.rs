//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of units that produced a file.
    pub unit_count: usize,

    /// Diagnostics from the run, rendered.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Destination directory.
    pub destination: PathBuf,
    /// Written files, relative to the destination.
    pub files: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the destination.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Generated", &written.destination.display().to_string());
        out.key_value("Units", &self.unit_count.to_string());
        out.section(&format!("Files ({})", written.files.len()));
        for file in &written.files {
            out.added_item(file);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::CapturedOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            unit_count: 1,
            warnings: vec!["skipped: member `save` is not a property signature".into()],
            result: GenerationResult::Written(WrittenResult {
                destination: PathBuf::from("schema"),
                files: vec!["models/User.ts".into()],
            }),
        };

        let mut out = CapturedOutput::default();
        report.render(&mut out);
        assert_eq!(out.stdout, [
                "Generated: schema",
                "Units: 1",
                "Files (1):",
                "  + models/User.ts"
            ]);
        assert_eq!(out.stderr.len(), 1);
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            unit_count: 1,
            warnings: vec![],
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "User.ts".into(),
                    content: "export {}".into(),
                }],
            }),
        };

        let mut out = CapturedOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.stdout,
            [
                "── User.ts ──",
                "export {}",
                "── Summary ──",
                "1 files would be generated"
            ]
        );
    }
}
