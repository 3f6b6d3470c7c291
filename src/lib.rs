//! # Archive Redirects
//!
//! Generates static HTML redirect stubs in a site's source tree, one per
//! archived page, so that old URLs keep resolving after the pages move into a
//! separate archive.
//!
//! Run from the root of the destination site. For every `*.html` at the top
//! level of the archive directory it writes `<slug>/index.html`, which sends
//! the visitor to `/archive/<filename>`:
//!
//! ```text
//! ../archive/                       site root (cwd)
//! ├── index.html      (excluded)    ├── hello-world/
//! ├── 404.html        (excluded)    │   └── index.html  → /archive/hello-world.html
//! ├── hello-world.html         ───▶ └── my-cool-post/
//! └── my-cool-post.html                 └── index.html  → /archive/my-cool-post.html
//! ```
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      archive dir  →  Vec<SourcePage>   (sorted, filtered)
//! 2. Title     page bytes   →  display title      (<title> or slug fallback)
//! 3. Render    page + title →  stub HTML
//! 4. Write     stub HTML    →  ./<slug>/index.html
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Layered `redirects.toml` loading, CLI overrides, validation |
//! | [`scan`] | Lists eligible archive pages in deterministic order |
//! | [`title`] | Best-effort `<title>` extraction with slug fallback |
//! | [`naming`] | Slug and fallback-title rules |
//! | [`render`] | The stub HTML template |
//! | [`generate`] | Drives scan → title → render → write |
//! | [`types`] | `SourcePage` and `RedirectStub` |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup for the binary |
//!
//! # Design Decisions
//!
//! ## Client-side redirects only
//!
//! Static hosts rarely let you configure server redirects, so each stub
//! redirects three ways: a `meta refresh`, an inline `location.replace`, and a
//! visible link. A `rel="canonical"` link tells search engines the archive copy
//! is authoritative.
//!
//! ## Deterministic output
//!
//! Pages are processed in filename order and nothing time-dependent is
//! embedded, so two runs over the same archive produce byte-identical files.
//! The tool always regenerates everything; there is no incremental mode.

pub mod config;
pub mod generate;
pub mod logging;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod title;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
