//! List coalescing.
//!
//! Wraps each maximal run of adjacent `<li>` lines in one `<ul>`. Runs are
//! found on the already rewritten text, so a bullet list directly followed
//! by a numbered list becomes a single container.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static LIST_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(?:^<li>.*</li>$\n?)+").unwrap());

/// Wrap runs of adjacent list items in `<ul>` containers.
///
/// ```
/// use handmark_render::coalesce_lists;
/// assert_eq!(
///     coalesce_lists("<li>a</li>\n<li>b</li>\n"),
///     "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
/// );
/// ```
pub fn coalesce_lists(text: &str) -> String {
    LIST_RUN_RE
        .replace_all(text, |caps: &Captures| {
            let run = &caps[0];
            if run.ends_with('\n') {
                format!("<ul>\n{}</ul>\n", run)
            } else {
                format!("<ul>\n{}\n</ul>", run)
            }
        })
        .into_owned()
}
