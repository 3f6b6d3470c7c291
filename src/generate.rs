//! Stub generation.
//!
//! Drives the whole run: scan the archive, resolve each page's title, render
//! the stub, and write it to `<root>/<slug>/index.html`.
//!
//! ## Output Structure
//!
//! ```text
//! <root>/
//! ├── hello-world/
//! │   └── index.html      # → /archive/hello-world.html
//! └── my-cool-post/
//!     └── index.html      # → /archive/my-cool-post.html
//! ```
//!
//! Existing stubs are overwritten without comparison. A write failure stops
//! the run; stubs written before it stay in place.

use crate::config::RedirectConfig;
use crate::render;
use crate::scan::{self, ScanError};
use crate::title;
use crate::types::RedirectStub;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Stubs written by a [`generate`] run, in archive filename order.
#[derive(Debug, Default, Serialize)]
pub struct GenerateReport {
    pub stubs: Vec<RedirectStub>,
}

impl GenerateReport {
    pub fn created(&self) -> usize {
        self.stubs.len()
    }
}

/// Work out every stub a run would write, reading page titles but writing
/// nothing.
pub fn plan(root: &Path, config: &RedirectConfig) -> Result<Vec<RedirectStub>, ScanError> {
    let archive_dir = config.resolve_archive_dir(root);
    let pages = scan::scan(&archive_dir, config)?;

    Ok(pages
        .iter()
        .map(|page| {
            let content = title::read_page(&page.path);
            let page_title = title::page_title(&content, &page.slug);
            render::plan_stub(page, page_title, config)
        })
        .collect())
}

/// Write a redirect stub under `root` for every eligible archive page.
pub fn generate(root: &Path, config: &RedirectConfig) -> Result<GenerateReport, GenerateError> {
    let stubs = plan(root, config)?;
    for stub in &stubs {
        write_stub(root, stub)?;
        info!(
            output = %stub.output_path.display(),
            target = %stub.target_relative_path,
            "wrote stub"
        );
    }
    Ok(GenerateReport { stubs })
}

fn write_stub(root: &Path, stub: &RedirectStub) -> Result<(), GenerateError> {
    let out_file = root.join(&stub.output_path);
    if let Some(out_dir) = out_file.parent() {
        fs::create_dir_all(out_dir).map_err(|source| GenerateError::CreateDir {
            path: out_dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(&out_file, render::render_stub(stub)).map_err(|source| GenerateError::Write {
        path: out_file.clone(),
        source,
    })
}
