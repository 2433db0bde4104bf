//! Next.js project-root discovery and App Router route inference.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CodemodError, Result};

/// A directory containing one of these files is a Next.js project root.
pub const NEXT_CONFIG_FILES: [&str; 3] = ["next.config.js", "next.config.ts", "next.config.mjs"];

/// The fields of `package.json` that identify a Next.js project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dependencies: HashMap<String, Value>,
}

impl PackageManifest {
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CodemodError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| CodemodError::json(path, e.to_string()))
    }

    /// `dependencies.next` is present and not an empty, `false`, `0` or
    /// `null` value
    pub fn depends_on_next(&self) -> bool {
        match self.dependencies.get("next") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(version)) => !version.is_empty(),
            Some(_) => true,
        }
    }
}

/// Whether `dir` is the root of a Next.js project.
///
/// An unreadable or malformed `package.json` does not stop the search; the
/// directory just does not count.
pub fn is_project_root(dir: &Path) -> bool {
    if NEXT_CONFIG_FILES.iter().any(|name| dir.join(name).is_file()) {
        return true;
    }

    let manifest = dir.join("package.json");
    if !manifest.is_file() {
        return false;
    }
    match PackageManifest::read(&manifest) {
        Ok(manifest) => manifest.depends_on_next(),
        Err(error) => {
            tracing::debug!(%error, "skipping package.json");
            false
        }
    }
}

/// Walk up from the directory containing `file` to the nearest project root.
///
/// The filesystem root itself is never considered.
pub fn find_project_root(file: &Path) -> Result<Option<PathBuf>> {
    let file = std::path::absolute(file).map_err(|e| CodemodError::io(file, e))?;

    let mut current = file.parent();
    while let Some(dir) = current {
        let Some(parent) = dir.parent() else {
            break;
        };
        if is_project_root(dir) {
            tracing::debug!(root = %dir.display(), "found project root");
            return Ok(Some(dir.to_path_buf()));
        }
        current = Some(parent);
    }
    Ok(None)
}

/// The App Router route served by `file`, e.g. `/blog/[slug]` for
/// `<root>/app/blog/[slug]/page.tsx`.
///
/// `None` when no project root is found or the file is not under `app/`.
pub fn infer_route(file: &Path) -> Result<Option<String>> {
    let Some(root) = find_project_root(file)? else {
        tracing::debug!(file = %file.display(), "no Next.js project root");
        return Ok(None);
    };

    let absolute = std::path::absolute(file).map_err(|e| CodemodError::io(file, e))?;
    let relative = absolute
        .strip_prefix(&root)
        .map_err(|e| CodemodError::invalid_path(file, e.to_string()))?;
    let relative = relative
        .to_str()
        .ok_or_else(|| CodemodError::invalid_path(file, "path is not valid UTF-8"))?;

    Ok(route_from_relative_path(relative))
}

/// Compute a route from a project-relative path.
///
/// ```
/// use typed_props::project::route_from_relative_path;
///
/// assert_eq!(
///     route_from_relative_path("src/app/(marketing)/blog/[slug]/page.tsx").as_deref(),
///     Some("/blog/[slug]")
/// );
/// assert_eq!(route_from_relative_path("app/page.tsx").as_deref(), Some("/"));
/// assert_eq!(route_from_relative_path("pages/index.tsx"), None);
/// ```
pub fn route_from_relative_path(relative: &str) -> Option<String> {
    let normalized = relative.replace('\\', "/");
    let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

    let app = segments.iter().position(|&segment| segment == "app")?;
    let mut route = &segments[app + 1..];

    // drop the file name: `page.tsx`, `layout`, ...
    if let Some((&last, rest)) = route.split_last() {
        if last.contains('.') || last == "page" || last == "layout" {
            route = rest;
        }
    }

    let route: Vec<&str> = route
        .iter()
        .copied()
        .filter(|segment| !is_route_group(segment))
        .collect();

    Some(format!("/{}", route.join("/")))
}

/// `(marketing)` and friends organize files without adding a URL segment.
fn is_route_group(segment: &str) -> bool {
    segment.starts_with('(') && segment.ends_with(')')
}
