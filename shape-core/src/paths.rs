//! Lexical path arithmetic for source units and generated imports.
//!
//! Nothing here touches the file system: paths are compared component by
//! component, so callers must pass both sides in the same form (both
//! absolute, or both relative to the same base).

use std::path::{Component, Path, PathBuf};

const SOURCE_EXTENSIONS: [&str; 4] = ["ts", "tsx", "js", "jsx"];

/// Whether `path` names a declaration-only unit (`*.d.ts`).
pub fn is_declaration_unit(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".d.ts") || name.ends_with(".d.tsx"))
}

/// Whether `path` names a TypeScript source unit (`*.ts` or `*.tsx`).
pub fn is_source_unit(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "ts" || ext == "tsx")
}

/// Base name of a unit without its final extension (`test/User.ts` -> `User`).
pub fn unit_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Drop a trailing `.ts`, `.tsx`, `.js` or `.jsx` extension.
pub fn strip_source_extension(path: &Path) -> PathBuf {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if SOURCE_EXTENSIONS.contains(&ext) => path.with_extension(""),
        _ => path.to_path_buf(),
    }
}

/// Path that leads from the directory `from` to `to`.
///
/// Returns `None` when one path is absolute and the other is not, since no
/// lexical path connects them.
pub fn relative_path(from: &Path, to: &Path) -> Option<PathBuf> {
    if from.is_absolute() != to.is_absolute() {
        return None;
    }
    let from = normalize(from);
    let to = normalize(to);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..from.len() {
        result.push("..");
    }
    for component in &to[common..] {
        result.push(component);
    }
    Some(result)
}

/// Module specifier importing `target` from a file that lives in `from_dir`.
///
/// The source extension is stripped, separators are always `/`, and the
/// result starts with `./` unless it climbs out of `from_dir`. Returns `None`
/// under the same condition as [`relative_path`].
pub fn import_specifier(from_dir: &Path, target: &Path) -> Option<String> {
    let relative = relative_path(from_dir, &strip_source_extension(target))?;
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    Some(if joined.starts_with("..") {
        joined
    } else {
        format!("./{}", joined)
    })
}

/// `path` with the leading `root` removed, or `None` when it lies outside `root`.
pub fn strip_root(path: &Path, root: &Path) -> Option<PathBuf> {
    let path = normalize(path);
    let root = normalize(root);
    if path.len() < root.len() || path[..root.len()] != root[..] {
        return None;
    }
    Some(path[root.len()..].iter().collect())
}

fn normalize(path: &Path) -> Vec<Component<'_>> {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts
}
