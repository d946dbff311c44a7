//! Path helpers - relative references and bundle names

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use crate::Result;
use crate::error::Error;

/// Resolve `.` and `..` lexically. `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Prefix and root directory of an absolute path
fn root(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .map(|p| normalize(&p))
        .map_err(|e| Error::invalid_path(path, path, format!("cannot make path absolute: {}", e)))
}

/// Return `target` expressed relative to `base`, using `/` as separator.
///
/// Both paths are resolved against the current directory first if they are
/// relative. Each level `base` has below the common ancestor becomes a `..`
/// segment. Identical paths yield `"."`.
///
/// Fails with [`Error::InvalidPath`] when the paths share no root (for
/// example two different drives) or when a component is not valid UTF-8,
/// since the result has to be embedded in a text document.
pub fn relative_path(base: &Path, target: &Path) -> Result<String> {
    let base_abs = absolute(base)?;
    let target_abs = absolute(target)?;

    if root(&base_abs) != root(&target_abs) {
        return Err(Error::invalid_path(base, target, "paths do not share a common root"));
    }

    let relative = pathdiff::diff_paths(&target_abs, &base_abs)
        .ok_or_else(|| Error::invalid_path(base, target, "no relative path between them"))?;

    let segments = relative.components()
        .map(|component| match component {
            Component::ParentDir => Ok(".."),
            Component::Normal(segment) => segment.to_str()
                .ok_or_else(|| Error::invalid_path(base, target, "path is not valid UTF-8")),
            _ => Err(Error::invalid_path(base, target, "relative path is not relative")),
        })
        .collect::<Result<Vec<_>>>()?;

    if segments.is_empty() {
        return Ok(".".to_string());
    }

    Ok(segments.join("/"))
}

/// Append `.<extension>` to `path` unless it already ends with it.
/// Trailing separators are dropped first, so `Workspace/` becomes
/// `Workspace.xcworkspace`.
pub fn bundle_path(path: &Path, extension: &str) -> PathBuf {
    let path: PathBuf = path.components().collect();

    if path.extension().is_some_and(|ext| ext == extension) {
        return path;
    }

    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
