//! Filename rules for archive pages.
//!
//! An archive page `my-cool-post.html` has slug `my-cool-post`, which becomes
//! both the stub directory (`my-cool-post/index.html`) and, when the page has
//! no usable `<title>`, the source of its display title:
//!
//! - `my-cool-post` → "My Cool Post"
//! - `2nd-take` → "2Nd Take" (a letter after a digit starts a new word)
//! - `ALL-CAPS` → "All Caps"
//! - `中a-post` → "中A Post" (CJK has no case, so `a` starts a word)

use std::path::Path;

/// Slug of an archive file: its filename without the final extension.
///
/// Returns `None` for paths without a file name.
pub fn slug_of(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

/// Whether a slug can name an output directory. `.` and `..` would write
/// outside the stub's own directory.
pub fn is_usable_slug(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".."
}

/// Whether a path carries the `.html` extension, in any letter case.
pub fn has_html_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("html"))
        .unwrap_or(false)
}

/// Fallback display title for a slug: dashes become spaces, then each word
/// is title-cased.
pub fn fallback_title(slug: &str) -> String {
    title_case(&slug.replace('-', " "))
}

/// Latin digraphs whose titlecase form differs from their uppercase form,
/// as `(uppercase, titlecase, lowercase)`.
const DIGRAPHS: [(char, char, char); 4] = [
    ('Ǆ', 'ǅ', 'ǆ'),
    ('Ǉ', 'ǈ', 'ǉ'),
    ('Ǌ', 'ǋ', 'ǌ'),
    ('Ǳ', 'ǲ', 'ǳ'),
];

fn digraph_titlecase(c: char) -> Option<char> {
    DIGRAPHS
        .iter()
        .find(|(upper, title, lower)| c == *upper || c == *title || c == *lower)
        .map(|(_, title, _)| *title)
}

/// Upper, lower, or titlecase letter. Letters without case (CJK, digits)
/// do not continue a word.
fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || digraph_titlecase(c).is_some()
}

/// Title-case every character that follows an uncased one, lower-case the
/// characters that follow a cased one.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_is_cased = false;
    for c in text.chars() {
        if prev_is_cased {
            result.extend(c.to_lowercase());
        } else if let Some(title) = digraph_titlecase(c) {
            result.push(title);
        } else {
            result.extend(c.to_uppercase());
        }
        prev_is_cased = is_cased(c);
    }
    result
}
