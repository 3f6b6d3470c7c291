//! Best-effort display titles for archive pages.
//!
//! This is not an HTML parser. It finds the first `<title>` element with a
//! case-insensitive pattern that may span lines, cleans the text up, and
//! otherwise falls back to a title derived from the slug. Nothing here fails
//! the run: unreadable pages simply get the fallback.
//!
//! ## Cleanup
//!
//! ```text
//! "<title>\n  My &amp;\n  Post  </title>"
//!   collapse whitespace  →  " My &amp; Post "
//!   decode entities      →  " My & Post "
//!   trim                 →  "My & Post"
//!   cut to 140 chars     →  "My & Post"
//! ```

use crate::naming;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// Longest title kept, in characters. Longer titles are cut without an ellipsis.
pub const MAX_TITLE_CHARS: usize = 140;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// A page whose content could not be read. Never surfaced to the user.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a page as UTF-8 text, dropping any invalid byte sequences.
pub fn read_page(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_lossy(&bytes))
}

fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Extract and clean the first `<title>` element, if there is one.
///
/// An element that is present but empty yields `Some("")`.
pub fn extract_title(text: &str) -> Option<String> {
    let raw = TITLE_RE.captures(text)?.get(1)?.as_str();
    let collapsed = WHITESPACE_RE.replace_all(raw, " ");
    let decoded = htmlize::unescape(collapsed.as_ref());
    Some(truncate_chars(decoded.trim(), MAX_TITLE_CHARS))
}

/// Title for a page given the outcome of reading it.
///
/// Read failures and missing `<title>` elements both resolve to
/// [`naming::fallback_title`].
pub fn page_title(content: &Result<String, ReadError>, slug: &str) -> String {
    match content {
        Ok(text) => extract_title(text).unwrap_or_else(|| {
            debug!(slug, "no <title> element, using fallback");
            naming::fallback_title(slug)
        }),
        Err(err) => {
            debug!(slug, error = %err, "page unreadable, using fallback title");
            naming::fallback_title(slug)
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}
