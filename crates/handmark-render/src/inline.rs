//! Inline rewriting: emphasis, code spans and links.
//!
//! Rules run in a fixed order over the whole text, each a single
//! substitution pass with lazy, single-line matches:
//!
//! 1. `***x***` → `<strong><em>x</em></strong>`
//! 2. `**x**` → `<strong>x</strong>`
//! 3. `*x*` → `<em>x</em>`
//! 4. `` `x` `` → `<code>x</code>`
//! 5. `[text](url)` → `<a href="url">text</a>`
//!
//! Longer emphasis markers go first so `**` is never split into two
//! italics. Code spans run after emphasis, so asterisks inside a code span
//! are still rewritten; unbalanced markers are left as they are or produce
//! partial markup, never an error.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_attribute;

static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\n]+)\)").unwrap());

/// Apply every inline rule in order.
///
/// ```
/// use handmark_render::rewrite_inline;
/// assert_eq!(
///     rewrite_inline("Some *italic* and **bold** text."),
///     "Some <em>italic</em> and <strong>bold</strong> text."
/// );
/// ```
pub fn rewrite_inline(text: &str) -> String {
    let text = rewrite_emphasis(text);
    let text = CODE_SPAN_RE.replace_all(&text, "<code>${1}</code>");
    rewrite_links(&text)
}

/// Bold-italic, bold, then italic.
pub fn rewrite_emphasis(text: &str) -> String {
    let text = BOLD_ITALIC_RE.replace_all(text, "<strong><em>${1}</em></strong>");
    let text = BOLD_RE.replace_all(&text, "<strong>${1}</strong>");
    ITALIC_RE.replace_all(&text, "<em>${1}</em>").into_owned()
}

/// `[text](url)` links. Double quotes in the URL are escaped.
pub fn rewrite_links(text: &str) -> String {
    LINK_RE
        .replace_all(text, |caps: &Captures| {
            format!(
                "<a href=\"{}\">{}</a>",
                escape_attribute(&caps[2]),
                &caps[1]
            )
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_italic() {
        assert_eq!(
            rewrite_inline("***both***"),
            "<strong><em>both</em></strong>"
        );
    }

    #[test]
    fn test_bold_before_italic() {
        assert_eq!(
            rewrite_inline("**bold** and *it*"),
            "<strong>bold</strong> and <em>it</em>"
        );
    }

    #[test]
    fn test_emphasis_is_lazy() {
        assert_eq!(
            rewrite_inline("*a* b *c*"),
            "<em>a</em> b <em>c</em>"
        );
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        assert_eq!(rewrite_inline("*a\nb*"), "*a\nb*");
    }

    #[test]
    fn test_unbalanced_marker_left_alone() {
        assert_eq!(rewrite_inline("2 * 3 = 6"), "2 * 3 = 6");
    }

    #[test]
    fn test_code_span() {
        assert_eq!(
            rewrite_inline("run `pip install numpy` now"),
            "run <code>pip install numpy</code> now"
        );
    }

    #[test]
    fn test_code_span_sees_emphasis_first() {
        assert_eq!(
            rewrite_inline("`a*b*c`"),
            "<code>a<em>b</em>c</code>"
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            rewrite_inline("[NumPy](https://numpy.org)"),
            "<a href=\"https://numpy.org\">NumPy</a>"
        );
    }

    #[test]
    fn test_link_with_emphasis_text() {
        assert_eq!(
            rewrite_inline("[**docs**](/docs)"),
            "<a href=\"/docs\"><strong>docs</strong></a>"
        );
    }

    #[test]
    fn test_link_url_quotes_escaped() {
        assert_eq!(
            rewrite_inline("[x](a\"b)"),
            "<a href=\"a&quot;b\">x</a>"
        );
    }

    #[test]
    fn test_malformed_link_left_alone() {
        assert_eq!(rewrite_inline("[text](no close"), "[text](no close");
        assert_eq!(rewrite_inline("[](empty)"), "[](empty)");
    }
}
