//! Temporary Next.js project trees.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A Next.js project in a temporary directory, removed on drop.
pub struct NextProject {
    dir: TempDir,
}

impl NextProject {
    /// A project marked by `next.config.js`
    pub fn new() -> Self {
        let project = Self::bare();
        project.write("next.config.js", "module.exports = {};\n");
        project
    }

    /// A project marked only by a `package.json` depending on `next`
    pub fn with_package_json() -> Self {
        let project = Self::bare();
        project.write(
            "package.json",
            r#"{ "name": "web", "dependencies": { "next": "15.1.0", "react": "19.0.0" } }"#,
        );
        project
    }

    /// An empty directory with no project marker
    pub fn bare() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
        fs::write(&path, contents).expect("write file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("read file")
    }
}
