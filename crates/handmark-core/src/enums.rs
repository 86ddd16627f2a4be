//! Core enums for the handmark pipeline.
//!
//! These enums name the heading levels the renderer understands and the
//! stages a document passes through on its way to HTML.

use serde::{Deserialize, Serialize};

/// Heading level of a rendered `<hN>` element.
///
/// Markdown input only produces levels 1-3; the anchor stage accepts
/// anything up to 6 so raw HTML headings in the source also get ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Level for a run of `#` markers, if the run is a supported heading.
    ///
    /// ```
    /// use handmark_core::HeadingLevel;
    /// assert_eq!(HeadingLevel::from_markers(2), Some(HeadingLevel::H2));
    /// assert_eq!(HeadingLevel::from_markers(4), None);
    /// ```
    pub fn from_markers(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            _ => None,
        }
    }

    /// Level for the digit in an `<hN>` tag.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            5 => Some(Self::H5),
            6 => Some(Self::H6),
            _ => None,
        }
    }

    /// Numeric level (1-6).
    pub fn number(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }

    /// Tag name, e.g. `h2`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// The stages of the render pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Fenced code blocks replaced by placeholders
    ExtractCode,
    /// Headings and list items rewritten to tags
    RewriteBlocks,
    /// Adjacent list items wrapped in `<ul>`
    CoalesceLists,
    /// Emphasis, code spans and links
    RewriteInline,
    /// Line breaks and paragraphs
    WrapParagraphs,
    /// Placeholders replaced by escaped code
    RestoreCode,
    /// Heading ids
    AssignAnchors,
}

impl Stage {
    /// All stages in the order they run.
    pub const ALL: [Stage; 7] = [
        Stage::ExtractCode,
        Stage::RewriteBlocks,
        Stage::CoalesceLists,
        Stage::RewriteInline,
        Stage::WrapParagraphs,
        Stage::RestoreCode,
        Stage::AssignAnchors,
    ];
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::ExtractCode => write!(f, "extract-code"),
            Stage::RewriteBlocks => write!(f, "rewrite-blocks"),
            Stage::CoalesceLists => write!(f, "coalesce-lists"),
            Stage::RewriteInline => write!(f, "rewrite-inline"),
            Stage::WrapParagraphs => write!(f, "wrap-paragraphs"),
            Stage::RestoreCode => write!(f, "restore-code"),
            Stage::AssignAnchors => write!(f, "assign-anchors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_from_markers() {
        assert_eq!(HeadingLevel::from_markers(0), None);
        assert_eq!(HeadingLevel::from_markers(1), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::from_markers(3), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_markers(4), None);
    }

    #[test]
    fn test_heading_level_from_digit() {
        assert_eq!(HeadingLevel::from_digit(6), Some(HeadingLevel::H6));
        assert_eq!(HeadingLevel::from_digit(7), None);
        assert_eq!(HeadingLevel::from_digit(4).map(HeadingLevel::number), Some(4));
    }

    #[test]
    fn test_heading_level_display() {
        assert_eq!(HeadingLevel::H1.to_string(), "h1");
        assert_eq!(HeadingLevel::H3.to_string(), "h3");
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::ExtractCode.to_string(), "extract-code");
        assert_eq!(Stage::WrapParagraphs.to_string(), "wrap-paragraphs");
        assert_eq!(Stage::AssignAnchors.to_string(), "assign-anchors");
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(Stage::ALL.first(), Some(&Stage::ExtractCode));
        assert_eq!(Stage::ALL.last(), Some(&Stage::AssignAnchors));
    }
}
