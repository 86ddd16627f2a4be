//! HTML escaping.

use std::borrow::Cow;

/// Escape `&`, `<` and `>` for HTML text content.
///
/// Equivalent to replacing `&` first, then `<`, then `>`: entities produced
/// for `<` and `>` are never escaped a second time, while `&` already in the
/// input (including `&amp;`) is escaped exactly once.
///
/// ```
/// use handmark_render::escape_html;
/// assert_eq!(escape_html("code & <tag>"), "code &amp; &lt;tag&gt;");
/// assert_eq!(escape_html("&amp;"), "&amp;amp;");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
    let escaped = escape_html(text);
    if escaped.contains('"') {
        Cow::Owned(escaped.replace('"', "&quot;"))
    } else {
        escaped
    }
}
