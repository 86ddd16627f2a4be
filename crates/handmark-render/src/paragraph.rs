//! Paragraph wrapping.
//!
//! Lines are either *block* lines (headings, list containers and items,
//! code placeholders) or *text* lines. Within a run of text lines a single
//! newline is a hard break; blank lines separate paragraphs. Block lines
//! never end up inside `<p>`.
//!
//! The stage runs in four steps:
//!
//! 1. [`separate_blocks`]: a blank line between every block line and an
//!    adjacent text line
//! 2. [`insert_line_breaks`]: `<br>` at the end of a text line followed by
//!    another text line, unless the newline touches a tag (the line ends
//!    with `>` or the next one starts with `<`)
//! 3. [`split_paragraphs`]: wrap in `<p>` and turn blank-line runs into
//!    paragraph boundaries
//! 4. [`strip_block_wrapping`]: drop `<p>`/`</p>` touching a block element
//!    and empty paragraphs

use std::sync::LazyLock;

use handmark_core::Placeholder;
use regex::Regex;

static BLOCK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:<h[1-6][ >]|</?ul>|<li>|{}CODE[0-9]+{})",
        Placeholder::OPEN,
        Placeholder::CLOSE
    ))
    .unwrap()
});

static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

static WRAPPED_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"<p>(<h[1-6][ >]|<ul>|{}CODE[0-9]+{})",
        Placeholder::OPEN,
        Placeholder::CLOSE
    ))
    .unwrap()
});

static WRAPPED_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(</h[1-6]>|</ul>|{}CODE[0-9]+{})</p>",
        Placeholder::OPEN,
        Placeholder::CLOSE
    ))
    .unwrap()
});

/// Whether `line` starts a block element.
pub fn is_block_line(line: &str) -> bool {
    BLOCK_LINE_RE.is_match(line)
}

/// Turn blank-line separated text into paragraphs and hard breaks.
///
/// ```
/// use handmark_render::wrap_paragraphs;
/// assert_eq!(
///     wrap_paragraphs("<h1>Title</h1>\nfirst\nline\n\nsecond"),
///     "<h1>Title</h1>\n<p>first<br>\nline</p>\n<p>second</p>"
/// );
/// ```
pub fn wrap_paragraphs(text: &str) -> String {
    let text = separate_blocks(text);
    let text = insert_line_breaks(&text);
    let text = split_paragraphs(&text);
    strip_block_wrapping(&text)
}

/// Blank whitespace-only lines and put a blank line between block and text.
pub fn separate_blocks(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous: Option<&str> = None;

    for line in text.split('\n') {
        let line = if line.trim().is_empty() { "" } else { line };
        if let Some(prev) = previous {
            if !prev.is_empty() && !line.is_empty() && is_block_line(prev) != is_block_line(line) {
                lines.push("");
            }
        }
        lines.push(line);
        previous = Some(line);
    }

    lines.join("\n")
}

/// Append `<br>` to each text line directly followed by another text line.
///
/// No break is added next to a tag boundary.
pub fn insert_line_breaks(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out = String::with_capacity(text.len());

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line);
        let breaks_before_next = lines
            .get(i + 1)
            .is_some_and(|next| is_text_line(next) && !next.starts_with('<'));
        if is_text_line(line) && !line.ends_with('>') && breaks_before_next {
            out.push_str("<br>");
        }
    }

    out
}

/// Wrap the fragment in `<p>` and split it at blank-line runs.
pub fn split_paragraphs(text: &str) -> String {
    let text = text.trim_matches('\n');
    format!("<p>{}</p>", BLANK_RUN_RE.replace_all(text, "</p>\n<p>"))
}

/// Remove paragraph tags that wrap block elements, and empty paragraphs.
pub fn strip_block_wrapping(text: &str) -> String {
    let text = WRAPPED_OPEN_RE.replace_all(text, "${1}");
    let text = WRAPPED_CLOSE_RE.replace_all(&text, "${1}");
    text.replace("<p></p>", "")
}

fn is_text_line(line: &str) -> bool {
    !line.is_empty() && !is_block_line(line)
}
