//! Block-level rewriting: headings and list items.
//!
//! Works line by line over the protected text. Headings support one to
//! three `#`; the marker run is matched greedily and must be followed by
//! whitespace, so `###` is never read as a shorter heading and `####` is
//! left alone. Bullet (`*`, `-`) and numbered (`1.`) items both become a
//! bare `<li>`; the list kind is not kept.

use std::sync::LazyLock;

use handmark_core::HeadingLevel;
use regex::{Captures, Regex};

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,3})[ \t]+(.*)$").unwrap());

static BULLET_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[*-][ \t]+(.*)$").unwrap());

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[0-9]+\.[ \t]+(.*)$").unwrap());

/// Rewrite heading and list-item lines into tags.
///
/// ```
/// use handmark_render::rewrite_blocks;
/// assert_eq!(rewrite_blocks("## Setup\n- pip install"), "<h2>Setup</h2>\n<li>pip install</li>");
/// ```
pub fn rewrite_blocks(text: &str) -> String {
    let text = rewrite_headings(text);
    let text = BULLET_ITEM_RE.replace_all(&text, "<li>${1}</li>");
    ORDERED_ITEM_RE
        .replace_all(&text, "<li>${1}</li>")
        .into_owned()
}

/// Rewrite `#`, `##` and `###` lines into `<h1>`-`<h3>`.
pub fn rewrite_headings(text: &str) -> String {
    HEADING_RE
        .replace_all(text, |caps: &Captures| {
            match HeadingLevel::from_markers(caps[1].len()) {
                Some(level) => format!("<{0}>{1}</{0}>", level, caps[2].trim_end()),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Count the lines `rewrite_headings` turns into headings.
pub fn count_heading_lines(text: &str) -> usize {
    HEADING_RE.find_iter(text).count()
}
