//! Collecting the route files a directory tree contains.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{CodemodError, Result};

/// File stems of App Router files whose props are typed
pub const ROUTE_FILE_STEMS: [&str; 2] = ["page", "layout"];

/// Source extensions the parser understands
pub const SOURCE_EXTENSIONS: [&str; 4] = ["tsx", "ts", "jsx", "js"];

/// Directories never worth descending into
const SKIPPED_DIRS: [&str; 2] = ["node_modules", "dist"];

/// Whether `path` names a `page.*` or `layout.*` source file.
pub fn is_route_file(path: &Path) -> bool {
    let stem = path.file_stem().and_then(|s| s.to_str());
    let extension = path.extension().and_then(|e| e.to_str());
    matches!(
        (stem, extension),
        (Some(stem), Some(ext)) if ROUTE_FILE_STEMS.contains(&stem) && SOURCE_EXTENSIONS.contains(&ext)
    )
}

/// Recursively collect route files under `root`, sorted by path.
///
/// A `root` that is itself a file is returned as is, whatever its name.
/// Hidden directories (`.next`, `.git`), `node_modules` and `dist` are skipped.
pub fn collect_route_files(root: &Path) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(CodemodError::invalid_path(root, "no such file or directory"));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            CodemodError::io(path, e.into())
        })?;
        if entry.file_type().is_file() && is_route_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_str().unwrap_or_default();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name)
}
