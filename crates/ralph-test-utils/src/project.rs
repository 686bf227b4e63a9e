//! [`TestProject`] builder for install/update scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

/// A representative asset set: one or more files in each of the four
/// subtrees, including nested command directories.
pub const STANDARD_ASSETS: &[(&str, &str)] = &[
    ("lib/common.sh", "#!/bin/bash\nlog() { echo \"$@\"; }\n"),
    ("scripts/ralph.sh", "#!/bin/bash\nsource .ralph/lib/common.sh\n"),
    ("scripts/loop.sh", "#!/bin/bash\nwhile true; do :; done\n"),
    ("templates/PLAN.md", "# Plan\n"),
    ("templates/AGENTS.md", "# Agents\n"),
    ("commands/ralph/discover.toml", "description = \"Discover\"\n"),
    ("commands/ralph/plan.toml", "description = \"Plan\"\n"),
];

/// A temporary `project/` and `dist/` pair.
///
/// # Example
///
/// ```rust,no_run
/// use ralph_test_utils::TestProject;
///
/// let project = TestProject::new().with_standard_distribution("1.2.0");
/// project.write_project_file(".gemini/commands/mine.toml", "keep");
/// project.assert_file_exists(".gemini/commands/mine.toml");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create empty project and distribution directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("project")).unwrap();
        fs::create_dir_all(temp_dir.path().join("dist")).unwrap();
        Self { temp_dir }
    }

    /// Seed the distribution with [`STANDARD_ASSETS`] and a manifest.
    pub fn with_standard_distribution(self, version: &str) -> Self {
        for (rel, content) in STANDARD_ASSETS {
            self.write_asset(rel, content);
        }
        self.write_manifest(version);
        self
    }

    pub fn project_root(&self) -> PathBuf {
        self.temp_dir.path().join("project")
    }

    pub fn distribution_root(&self) -> PathBuf {
        self.temp_dir.path().join("dist")
    }

    /// Write a file under `dist/core/`.
    pub fn write_asset(&self, rel: &str, content: &str) {
        write_file(&self.distribution_root().join("core").join(rel), content);
    }

    /// Remove a file or directory under `dist/core/`.
    pub fn remove_asset(&self, rel: &str) {
        let path = self.distribution_root().join("core").join(rel);
        if path.is_dir() {
            fs::remove_dir_all(path).unwrap();
        } else {
            fs::remove_file(path).unwrap();
        }
    }

    /// Write `dist/distribution.json` declaring `version`.
    pub fn write_manifest(&self, version: &str) {
        write_file(
            &self.distribution_root().join("distribution.json"),
            &format!("{{\n  \"name\": \"ralph\",\n  \"version\": \"{version}\"\n}}\n"),
        );
    }

    /// Write a file relative to the project root.
    pub fn write_project_file(&self, rel: &str, content: &str) {
        write_file(&self.project_root().join(rel), content);
    }

    /// Read a file relative to the project root.
    pub fn read_project_file(&self, rel: &str) -> String {
        let path = self.project_root().join(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
    }

    /// Every file under the project root with its bytes, keyed by relative
    /// path. Two equal snapshots mean no file was created, changed or removed.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        let root = self.project_root();
        WalkDir::new(&root)
            .into_iter()
            .map(|entry| entry.unwrap())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let rel = entry.path().strip_prefix(&root).unwrap().to_path_buf();
                (rel, fs::read(entry.path()).unwrap())
            })
            .collect()
    }

    /// Digest of a directory relative to the project root.
    pub fn tree_checksum(&self, rel: &str) -> String {
        ralph_fs::checksum::tree_checksum(&self.project_root().join(rel)).unwrap()
    }

    /// Assert that `rel` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.project_root().join(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.project_root().join(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the project holds no files at all.
    pub fn assert_untouched(&self) {
        let files = self.snapshot();
        assert!(
            files.is_empty(),
            "Expected an untouched project, found: {:?}",
            files.keys().collect::<Vec<_>>()
        );
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
