//! Types shared between the scan, render, and generate stages.

use serde::Serialize;
use std::path::PathBuf;

/// One archived HTML file eligible for a redirect stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcePage {
    /// Filename without extension; becomes the output directory name.
    pub slug: String,
    /// Filename inside the archive, e.g. `hello-world.html`.
    pub filename: String,
    /// Absolute path of the page on disk.
    pub path: PathBuf,
}

/// A generated stub, described by where it goes and where it points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectStub {
    /// `<slug>/index.html`, relative to the site root.
    pub output_path: PathBuf,
    /// `/archive/<filename>`
    pub target_relative_path: String,
    /// `<base_url>/archive/<filename>`
    pub target_absolute_url: String,
    pub title: String,
}
