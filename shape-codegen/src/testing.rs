//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command};

use eyre::{Result, eyre};

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code type-checks.
pub trait CompileChecker {
    /// Check that the code in the given directory compiles.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// TypeScript compile checker using `tsc --noEmit`.
pub struct TypeScriptChecker;

impl CompileChecker for TypeScriptChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let output = Command::new("npx")
            .args(["tsc", "--noEmit"])
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run tsc: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "tsc --noEmit failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// Runs a TypeScript script with `tsx`; a non-zero exit fails the check.
///
/// Lets tests execute generated code, e.g. a driver that asserts on the
/// results of generated factories and guards.
pub struct NodeRunner {
    script: String,
}

impl NodeRunner {
    /// Run `script`, a path relative to the checked directory.
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl CompileChecker for NodeRunner {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let output = Command::new("npx")
            .args(["tsx", self.script.as_str()])
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run tsx: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: format!("tsx {} failed", self.script),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Write generated files into a temporary directory and return it.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Run a generator into a temporary directory and check the result compiles.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<()>
where
    C: CompileChecker,
{
    let temp_dir = generate_to_temp(generate)?;

    checker.check(temp_dir.path()).map_err(|e| {
        eprintln!("Generated files in {}:", temp_dir.path().display());
        if let Ok(entries) = std::fs::read_dir(temp_dir.path()) {
            for entry in entries.flatten() {
                eprintln!("  {}", entry.path().display());
            }
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}
