//! The redirect stub template.
//!
//! Every stub redirects three ways so that any client ends up at the archive
//! copy: `meta refresh`, an inline `location.replace`, and a visible link.
//! The canonical link points search engines at the absolute archive URL.
//!
//! Values are inserted verbatim. The title has already been cleaned by
//! [`crate::title`] and is not escaped again.

use crate::config::{ARCHIVE_MOUNT, RedirectConfig};
use crate::types::{RedirectStub, SourcePage};
use std::path::PathBuf;

/// Describe the stub for `page` without rendering it.
pub fn plan_stub(page: &SourcePage, title: String, config: &RedirectConfig) -> RedirectStub {
    let target_relative_path = format!("{ARCHIVE_MOUNT}{}", page.filename);
    RedirectStub {
        output_path: PathBuf::from(&page.slug).join("index.html"),
        target_absolute_url: config.absolute_url(&target_relative_path),
        target_relative_path,
        title,
    }
}

/// Full content of the stub's `index.html`.
pub fn render_stub(stub: &RedirectStub) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <link rel="canonical" href="{absolute}">
    <meta http-equiv="refresh" content="0; url={relative}">
    <meta name="robots" content="noarchive">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <script>location.replace("{relative}");</script>
  </head>
  <body>
    <p>If you are not redirected, <a href="{relative}">click here</a>.</p>
  </body>
</html>
"#,
        title = stub.title,
        absolute = stub.target_absolute_url,
        relative = stub.target_relative_path,
    )
}
