//! Archive directory scanning.
//!
//! Lists the pages that get a redirect stub. Only direct children of the
//! archive directory are considered; subdirectories are never entered.
//!
//! ```text
//! archive/
//! ├── 404.html            # excluded by name
//! ├── about.HTML          # included (extension match ignores case)
//! ├── hello-world.html    # included
//! ├── index.html          # excluded by name
//! ├── notes.txt           # skipped: not .html
//! └── assets/
//!     └── nested.html     # skipped: not top level
//! ```
//!
//! Pages come back sorted by filename so repeated runs write the same files
//! in the same order.

use crate::config::RedirectConfig;
use crate::naming;
use crate::types::SourcePage;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Archive path not found: {0}")]
    ArchiveNotFound(PathBuf),
    #[error("Archive path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to list archive: {0}")]
    Walk(#[from] walkdir::Error),
}

/// List eligible pages in `archive_dir`, sorted by filename.
///
/// Fails with [`ScanError::ArchiveNotFound`] before looking at anything else
/// if the directory does not exist.
pub fn scan(archive_dir: &Path, config: &RedirectConfig) -> Result<Vec<SourcePage>, ScanError> {
    if !archive_dir.exists() {
        let shown = std::path::absolute(archive_dir).unwrap_or_else(|_| archive_dir.to_path_buf());
        return Err(ScanError::ArchiveNotFound(shown));
    }
    let archive_dir = archive_dir.canonicalize()?;
    if !archive_dir.is_dir() {
        return Err(ScanError::NotADirectory(archive_dir));
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(&archive_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        // Path::is_file follows symlinks, so linked pages count as files.
        if !path.is_file() || !naming::has_html_extension(path) {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();
        if config.is_excluded(&filename) {
            debug!(%filename, "excluded");
            continue;
        }
        let Some(slug) = naming::slug_of(path).filter(|s| naming::is_usable_slug(s)) else {
            warn!(%filename, "skipped: filename gives no usable output directory");
            continue;
        };
        pages.push(SourcePage {
            slug,
            filename,
            path: path.to_path_buf(),
        });
    }

    Ok(pages)
}
