use std::path::{Path, PathBuf};

use eyre::{Result, eyre};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Write the file to disk, replacing any existing file, and return its path
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render()?)?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Remove `dir` with everything below it, then create it again empty.
///
/// Refuses to touch a directory that contains `keep`, so a destination
/// pointing at the project root cannot wipe the manifest it was read from.
pub fn reset_dir(dir: &Path, keep: &Path) -> Result<()> {
    if keep.starts_with(dir) {
        return Err(eyre!(
            "refusing to clear '{}': it contains '{}'",
            dir.display(),
            keep.display()
        ));
    }
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}
