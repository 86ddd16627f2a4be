//! Heading anchors.
//!
//! The last stage of the pipeline. Every `<hN>…</hN>` in the rendered
//! fragment gets an `id` derived from its text. Headings whose text has
//! no word characters at all (symbols, emoji) fall back to a numbered id
//! from the caller's [`AnchorRegistry`].

use std::sync::LazyLock;

use handmark_core::{AnchorRegistry, HeadingLevel};
use regex::{Captures, Regex};

use crate::escape::escape_attribute;

/// A bare heading tag pair, closed by the tag of its own level.
static HEADING_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&per_level_pattern(">(.*?)")).unwrap());

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

static SEPARATOR_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// A heading as it appears in the final fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub id: String,
    /// Heading text with inline tags removed.
    pub text: String,
}

/// Derive a URL-safe slug from heading text.
///
/// Inline tags are dropped, the text is lowercased, anything that is not a
/// word character, whitespace or `-` is removed and separator runs become
/// one `-`. Word characters are Unicode-aware, so CJK text survives.
///
/// ```
/// use handmark_render::slugify;
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("<code>map</code> & filter"), "map-filter");
/// assert_eq!(slugify("配列の作成"), "配列の作成");
/// assert_eq!(slugify("🚀"), "");
/// ```
pub fn slugify(text: &str) -> String {
    let text = strip_tags(text).to_lowercase();
    let text = NON_SLUG_RE.replace_all(&text, "");
    SEPARATOR_RUN_RE.replace_all(&text, "-").into_owned()
}

/// Remove anything that looks like a tag.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Whether a slug carries no usable identifier.
pub fn is_empty_slug(slug: &str) -> bool {
    slug.is_empty() || slug == "-"
}

/// Give every bare heading tag an `id`.
///
/// Fallback ids are `<prefix>-N`, numbered by `registry` in document
/// order. Identical texts get identical ids.
///
/// ```
/// use handmark_core::AnchorRegistry;
/// use handmark_render::assign_anchors;
///
/// let mut registry = AnchorRegistry::new();
/// let html = assign_anchors("<h1>Intro</h1>\n<h2>★</h2>", "section", &mut registry);
/// assert_eq!(html, "<h1 id=\"intro\">Intro</h1>\n<h2 id=\"section-1\">★</h2>");
/// ```
pub fn assign_anchors(html: &str, prefix: &str, registry: &mut AnchorRegistry) -> String {
    HEADING_TAG_RE
        .replace_all(html, |caps: &Captures| {
            let Some((level, group)) = matched_level(caps, 1) else {
                return caps[0].to_string();
            };
            let text = &caps[group];
            let id = anchor_id(text, prefix, registry);
            format!(
                "<{0} id=\"{1}\">{2}</{0}>",
                level.tag(),
                escape_attribute(&id),
                text
            )
        })
        .into_owned()
}

/// Collect `id`-carrying headings from a rendered fragment, in order.
pub fn collect_headings(html: &str) -> Vec<Heading> {
    static ANCHORED_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(&per_level_pattern(r#" id="([^"]*)">(.*?)"#)).unwrap());

    ANCHORED_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let (level, group) = matched_level(&caps, 2)?;
            Some(Heading {
                level,
                id: caps[group].to_string(),
                text: strip_tags(&caps[group + 1]),
            })
        })
        .collect()
}

/// `<h1{rest}</h1>|<h2{rest}</h2>|...`, one alternative per level since
/// `regex` has no backreferences.
fn per_level_pattern(rest: &str) -> String {
    (1..=6)
        .map(|n| format!("<h{n}{rest}</h{n}>"))
        .collect::<Vec<_>>()
        .join("|")
}

/// Level of the alternative that matched and the index of its first group.
fn matched_level(caps: &Captures, groups_per_level: usize) -> Option<(HeadingLevel, usize)> {
    (1..=6u8).find_map(|digit| {
        let first = 1 + usize::from(digit - 1) * groups_per_level;
        caps.get(first)?;
        Some((HeadingLevel::from_digit(digit)?, first))
    })
}

fn anchor_id(text: &str, prefix: &str, registry: &mut AnchorRegistry) -> String {
    let slug = slugify(text);
    if is_empty_slug(&slug) {
        registry.fallback(prefix)
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors(html: &str) -> String {
        assign_anchors(html, "section", &mut AnchorRegistry::new())
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Title"), "title");
        assert_eq!(slugify("Getting  Started"), "getting-started");
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("snake_case"), "snake_case");
    }

    #[test]
    fn test_slugify_keeps_edge_separators() {
        assert_eq!(slugify(" padded "), "-padded-");
        assert_eq!(slugify("!!! ???"), "-");
    }

    #[test]
    fn test_slugify_unicode() {
        assert_eq!(slugify("NumPy 配列"), "numpy-配列");
        assert_eq!(slugify("Ünïcödé"), "ünïcödé");
    }

    #[test]
    fn test_empty_slug_detection() {
        assert!(is_empty_slug(""));
        assert!(is_empty_slug("-"));
        assert!(!is_empty_slug("--x"));
    }

    #[test]
    fn test_fallback_numbering_in_order() {
        let html = anchors("<h1>★</h1>\n<h2>ok</h2>\n<h3>☆☆</h3>\n<h2>!</h2>");
        assert_eq!(
            html,
            "<h1 id=\"section-1\">★</h1>\n<h2 id=\"ok\">ok</h2>\n<h3 id=\"section-2\">☆☆</h3>\n<h2 id=\"section-3\">!</h2>"
        );
    }

    #[test]
    fn test_registry_is_caller_owned() {
        let mut registry = AnchorRegistry::new();
        assign_anchors("<h1>★</h1>", "section", &mut registry);
        assert_eq!(registry.issued(), 1);
        assert_eq!(
            anchors("<h1>★</h1>"),
            "<h1 id=\"section-1\">★</h1>"
        );
    }

    #[test]
    fn test_custom_prefix() {
        let mut registry = AnchorRegistry::new();
        assert_eq!(
            assign_anchors("<h2>→</h2>", "part", &mut registry),
            "<h2 id=\"part-1\">→</h2>"
        );
    }

    #[test]
    fn test_duplicates_not_disambiguated() {
        assert_eq!(
            anchors("<h2>Usage</h2><h2>Usage</h2>"),
            "<h2 id=\"usage\">Usage</h2><h2 id=\"usage\">Usage</h2>"
        );
    }

    #[test]
    fn test_mismatched_levels_untouched() {
        assert_eq!(anchors("<h1>a</h2>"), "<h1>a</h2>");
    }

    #[test]
    fn test_other_level_close_tag_in_text() {
        assert_eq!(
            anchors("<h2>The <code></h1></code> tag</h2>\n<h1>Next</h1>"),
            "<h2 id=\"the-tag\">The <code></h1></code> tag</h2>\n<h1 id=\"next\">Next</h1>"
        );
        assert_eq!(anchors("<h1>a</h2> b</h1>"), "<h1 id=\"a-b\">a</h2> b</h1>");
    }

    #[test]
    fn test_collect_headings_past_other_close_tag() {
        let html = anchors("<h3>Closing <code></h2></code></h3>");
        let headings = collect_headings(&html);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].level, HeadingLevel::H3);
        assert_eq!(headings[0].id, "closing-");
        assert_eq!(headings[0].text, "Closing ");
    }

    #[test]
    fn test_headings_with_attributes_untouched() {
        let html = "<h2 class=\"x\">Kept</h2>";
        assert_eq!(anchors(html), html);
    }

    #[test]
    fn test_inline_markup_in_heading() {
        assert_eq!(
            anchors("<h2>Use <code>np.array</code></h2>"),
            "<h2 id=\"use-nparray\">Use <code>np.array</code></h2>"
        );
    }

    #[test]
    fn test_collect_headings() {
        let html = anchors("<h1>Top</h1>\n<p>x</p>\n<h3>Deep <em>dive</em></h3>");
        let headings = collect_headings(&html);
        assert_eq!(
            headings,
            vec![
                Heading {
                    level: HeadingLevel::H1,
                    id: "top".to_string(),
                    text: "Top".to_string(),
                },
                Heading {
                    level: HeadingLevel::H3,
                    id: "deep-dive".to_string(),
                    text: "Deep dive".to_string(),
                },
            ]
        );
    }
}
