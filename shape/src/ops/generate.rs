//! Generate operation - factories and guards from the manifest.

use std::path::{Component, Path, PathBuf};

use eyre::{Context, Result};
use shapegen_codegen_typescript::{
    Generation, Generator,
    files::{TsConfig, UnitFile},
};
use shapegen_core::{GeneratedFile, reset_dir};
use shapegen_manifest::Manifest;

use super::Settings;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Run the generator over the manifest's units.
///
/// Nothing is written unless every unit generated; a failure leaves the
/// destination untouched.
pub(crate) fn run_generator(manifest: &Manifest, settings: &Settings) -> Result<Generation> {
    let filter = settings.filter()?;
    let generator = Generator::new(manifest.declarations(), settings.generator_options())
        .with_filter(|path| filter.matches(path));
    generator.generate().wrap_err("Generation failed")
}

/// Execute the generate operation.
///
/// On success the destination is cleared and recreated, then every unit
/// (and the tsconfig.json, when configured) is written. With `dry_run` the
/// files are returned for preview instead.
pub fn generate(
    manifest: &Manifest,
    manifest_path: &Path,
    settings: &Settings,
    dry_run: bool,
) -> Result<GenerateReport> {
    let generation = run_generator(manifest, settings)?;

    let warnings = generation
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect();
    let tsconfig = settings
        .extends
        .as_ref()
        .map(|extends| TsConfig::new(&settings.destination, extends, &settings.references))
        .transpose()
        .wrap_err("Failed to build tsconfig.json")?;

    let result = if dry_run {
        let mut files: Vec<PreviewFile> = generation
            .units
            .iter()
            .map(|unit| PreviewFile {
                path: display_path(&unit.out_file),
                content: unit.contents.clone(),
            })
            .collect();
        if let Some(tsconfig) = &tsconfig {
            files.push(PreviewFile {
                path: "tsconfig.json".to_string(),
                content: tsconfig.render()?,
            });
        }
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let destination = absolute(&settings.destination)?;
        reset_dir(&destination, &absolute(manifest_path)?)
            .wrap_err("Failed to prepare the destination directory")?;

        let mut files = Vec::with_capacity(generation.units.len() + 1);
        for unit in &generation.units {
            UnitFile::new(unit)
                .write(&destination)
                .wrap_err_with(|| format!("Failed to write {}", unit.out_file.display()))?;
            files.push(display_path(&unit.out_file));
        }
        if let Some(tsconfig) = &tsconfig {
            tsconfig
                .write(&destination)
                .wrap_err("Failed to write tsconfig.json")?;
            files.push("tsconfig.json".to_string());
        }
        tracing::debug!(files = files.len(), destination = %destination.display(), "written");

        GenerationResult::Written(WrittenResult {
            destination: settings.destination.clone(),
            files,
        })
    };

    Ok(GenerateReport {
        unit_count: generation.units.len(),
        warnings,
        result,
    })
}

/// `/`-separated display form of a relative output path.
fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Absolute form of `path` with `.` components removed.
fn absolute(path: &Path) -> Result<PathBuf> {
    let path = std::path::absolute(path)
        .wrap_err_with(|| format!("Failed to resolve {}", path.display()))?;
    Ok(path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
[generator]
output = "schema"
root-dir = "src"

[[units]]
path = "src/models/User.ts"

[[units.interfaces]]
name = "IUser"
members = [
    { name = "id", type = "number" },
    { name = "tags", type = "string[]" },
    { name = "address", type = "IAddress" },
]

[[units]]
path = "src/models/Address.ts"

[[units.interfaces]]
name = "IAddress"
members = [{ name = "city", type = "string" }]

[[units]]
path = "src/models/types.d.ts"

[[units.interfaces]]
name = "IAmbient"
members = [{ name = "x", type = "number" }]
"#;

    fn project(manifest: &str) -> (TempDir, PathBuf, Manifest) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shapes.toml");
        fs::write(&path, manifest).unwrap();
        let manifest = Manifest::from_file(&path).unwrap();
        (dir, path, manifest)
    }

    #[test]
    fn test_generate_writes_units_below_destination() {
        let (dir, path, manifest) = project(MANIFEST);
        let settings = Settings::from_manifest(&manifest);

        let report = generate(&manifest, &path, &settings, false).unwrap();
        assert_eq!(report.unit_count, 2);

        let user = fs::read_to_string(dir.path().join("schema/models/User.ts")).unwrap();
        assert!(user.contains("export function createIUser("));
        assert!(user.contains("} from '../../src/models/User';"));
        assert!(dir.path().join("schema/models/Address.ts").exists());
        assert!(!dir.path().join("schema/models/types.d.ts").exists());
    }

    #[test]
    fn test_generate_clears_stale_output() {
        let (dir, path, manifest) = project(MANIFEST);
        let stale = dir.path().join("schema/old/Gone.ts");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "stale").unwrap();

        generate(&manifest, &path, &Settings::from_manifest(&manifest), false).unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn test_generate_refuses_to_clear_manifest_dir() {
        let (dir, path, manifest) = project(MANIFEST);
        let mut settings = Settings::from_manifest(&manifest);
        settings.destination = dir.path().to_path_buf();

        assert!(generate(&manifest, &path, &settings, false).is_err());
        assert!(path.exists());
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let broken = format!(
            "{}\n[[units]]\npath = \"src/models/Bad.ts\"\n\n[[units.interfaces]]\nname = \"IBad\"\nmembers = [{{ name = \"x\", type = \"any\" }}]\n",
            MANIFEST
        );
        let (dir, path, manifest) = project(&broken);
        let old = dir.path().join("schema/Keep.ts");
        fs::create_dir_all(old.parent().unwrap()).unwrap();
        fs::write(&old, "keep").unwrap();

        let err = generate(&manifest, &path, &Settings::from_manifest(&manifest), false).unwrap_err();
        assert!(err.to_string().contains("Generation failed"));
        assert!(old.exists());
        assert!(!dir.path().join("schema/models/User.ts").exists());
    }

    #[test]
    fn test_dry_run_previews_with_tsconfig() {
        let (dir, path, manifest) = project(MANIFEST);
        let mut settings = Settings::from_manifest(&manifest);
        settings.extends = Some(dir.path().join("tsconfig.base.json"));

        let report = generate(&manifest, &path, &settings, true).unwrap();
        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview");
        };
        let paths: Vec<&str> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["models/User.ts", "models/Address.ts", "tsconfig.json"]);
        assert!(preview.files[2].content.contains("\"extends\": \"../tsconfig.base.json\""));
        assert!(!dir.path().join("schema").exists());
    }

    #[test]
    fn test_filters_select_units() {
        let (dir, path, manifest) = project(MANIFEST);
        let mut settings = Settings::from_manifest(&manifest);
        settings.exclude = vec!["Address".into()];

        let report = generate(&manifest, &path, &settings, false).unwrap();
        assert_eq!(report.unit_count, 1);
        assert!(!dir.path().join("schema/models/Address.ts").exists());
    }
}
