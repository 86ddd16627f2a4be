//! Core types for handmark

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A fenced code block captured verbatim from the source.
///
/// `raw` includes the opening fence line (with its info string) and, when
/// the block was terminated, the closing fence line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Raw fence text, markers included
    pub raw: String,
}

impl CodeBlock {
    /// Create a block from its raw fence text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Everything after the opening backticks on the first line.
    pub fn info(&self) -> &str {
        let first = self.raw.split('\n').next().unwrap_or("");
        first.trim_start_matches('`').trim()
    }

    /// First word of the info string, if any.
    ///
    /// ```
    /// use handmark_core::CodeBlock;
    /// let block = CodeBlock::new("```python title\nprint(1)\n```");
    /// assert_eq!(block.language(), Some("python"));
    /// ```
    pub fn language(&self) -> Option<&str> {
        self.info().split_whitespace().next()
    }
}

/// Ordered code blocks of one render call.
///
/// Filled once by code extraction; index `i` belongs to the placeholder
/// carrying `i`. The table is never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlockTable {
    blocks: Vec<CodeBlock>,
}

impl CodeBlockTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block and return its index.
    pub fn push(&mut self, block: CodeBlock) -> usize {
        self.blocks.push(block);
        self.blocks.len() - 1
    }

    /// Block stored at `index`.
    pub fn get(&self, index: usize) -> Option<&CodeBlock> {
        self.blocks.get(index)
    }

    /// Number of stored blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no block was captured.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CodeBlock> {
        self.blocks.iter()
    }
}

/// Out-of-band marker standing in for a code block between extraction and
/// restoration.
///
/// The delimiters are Unicode noncharacters. [`Placeholder::sanitize`] removes
/// them from source text, so a placeholder can never be forged by input.
pub struct Placeholder;

impl Placeholder {
    /// Opening delimiter.
    pub const OPEN: char = '\u{FDD0}';
    /// Closing delimiter.
    pub const CLOSE: char = '\u{FDD1}';

    /// Placeholder text for the block at `index`.
    ///
    /// ```
    /// use handmark_core::Placeholder;
    /// assert_eq!(Placeholder::token(3), "\u{FDD0}CODE3\u{FDD1}");
    /// ```
    pub fn token(index: usize) -> String {
        format!("{}CODE{}{}", Self::OPEN, index, Self::CLOSE)
    }

    /// Remove placeholder delimiters from `text`.
    pub fn sanitize(text: &str) -> Cow<'_, str> {
        if text.contains([Self::OPEN, Self::CLOSE]) {
            Cow::Owned(
                text.chars()
                    .filter(|c| *c != Self::OPEN && *c != Self::CLOSE)
                    .collect(),
            )
        } else {
            Cow::Borrowed(text)
        }
    }
}
