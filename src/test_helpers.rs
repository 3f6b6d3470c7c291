//! Shared test utilities for the archive-redirects test suite.
//!
//! Builds throwaway archive and site directories and reads generated stubs
//! back.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = site_with_archive(&[("hello-world.html", "<title>Hello</title>")]);
//! let config = site.config();
//! generate(site.root(), &config).unwrap();
//! assert!(read_stub(site.root(), "hello-world").contains("<title>Hello</title>"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::RedirectConfig;

// =========================================================================
// Fixture setup
// =========================================================================

/// A temp directory holding the given `(filename, content)` pairs.
pub fn archive_with(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_files(tmp.path(), files);
    tmp
}

fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

/// Sibling `site/` and `archive/` directories inside one temp dir, laid out
/// the way the tool is normally run (`../archive` from the site root).
pub struct SiteFixture {
    _tmp: TempDir,
    root: PathBuf,
    archive: PathBuf,
}

impl SiteFixture {
    /// Site root: where stubs are written.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn archive(&self) -> &Path {
        &self.archive
    }

    /// Default config; its `../archive` points at this fixture's archive.
    pub fn config(&self) -> RedirectConfig {
        RedirectConfig::default()
    }
}

pub fn site_with_archive(files: &[(&str, &str)]) -> SiteFixture {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("site");
    let archive = tmp.path().join("archive");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&archive).unwrap();
    write_files(&archive, files);
    SiteFixture {
        _tmp: tmp,
        root,
        archive,
    }
}

// =========================================================================
// Output lookups — panics with a clear message on miss
// =========================================================================

/// Content of `<root>/<slug>/index.html`. Panics if missing.
pub fn read_stub(root: &Path, slug: &str) -> String {
    let path = root.join(slug).join("index.html");
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("stub {} not readable: {e}", path.display()))
}

/// Names of all directories directly under `root`, sorted.
pub fn output_dirs(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
