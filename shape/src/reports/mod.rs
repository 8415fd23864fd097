//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Output, Report, TerminalOutput};

#[cfg(test)]
pub(crate) mod testing {
    use super::Output;

    /// Collects rendered lines for assertions.
    #[derive(Debug, Default)]
    pub struct CapturedOutput {
        pub stdout: Vec<String>,
        pub stderr: Vec<String>,
    }

    impl Output for CapturedOutput {
        fn section(&mut self, name: &str) {
            self.stdout.push(format!("{}:", name));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.stdout.push(format!("{}: {}", key, value));
        }

        fn list_item(&mut self, text: &str) {
            self.stdout.push(format!("  - {}", text));
        }

        fn added_item(&mut self, text: &str) {
            self.stdout.push(format!("  + {}", text));
        }

        fn warning(&mut self, msg: &str) {
            self.stderr.push(format!("warning: {}", msg));
        }

        fn divider(&mut self, label: &str) {
            self.stdout.push(format!("── {} ──", label));
        }

        fn preformatted(&mut self, text: &str) {
            self.stdout.push(text.to_string());
        }

        fn newline(&mut self) {
            self.stdout.push(String::new());
        }
    }
}
