//! Fenced code block protection.
//!
//! Extraction is the first stage of the pipeline and restoration the
//! sixth. They are the only stages that see a [`CodeBlockTable`]; everything
//! in between works on text where each block is a single opaque
//! [`Placeholder`] line, so Markdown inside a fence is never rewritten.
//!
//! - Opening fence: a line starting with ```` ``` ````, rest of line is the info string
//! - Closing fence: the next line consisting of ```` ``` ```` and trailing whitespace
//! - Unterminated fence: the block runs to the end of the document

use std::sync::LazyLock;

use handmark_core::{CodeBlock, CodeBlockTable, Placeholder};
use regex::{Captures, Regex};

use crate::escape::{escape_attribute, escape_html};

/// A fenced block: terminated (first alternative) or running to end of input.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^```[^\n]*(?:\n.*?^```[ \t\r]*$|.*\z)").unwrap()
});

/// A placeholder left behind by extraction.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{}CODE([0-9]+){}",
        Placeholder::OPEN,
        Placeholder::CLOSE
    ))
    .unwrap()
});

/// Working text whose fenced code blocks are held aside.
///
/// The only way back to plain text is [`restore_code_blocks`] (or
/// [`restore_code_blocks_with`]), which consumes the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protected {
    text: String,
    blocks: CodeBlockTable,
}

impl Protected {
    /// Current working text, placeholders included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Blocks captured by extraction.
    pub fn blocks(&self) -> &CodeBlockTable {
        &self.blocks
    }

    /// Rewrite the working text, keeping the code table untouched.
    pub fn map(self, rewrite: impl FnOnce(&str) -> String) -> Self {
        Self {
            text: rewrite(&self.text),
            blocks: self.blocks,
        }
    }
}

/// Replace every fenced code block by a placeholder.
///
/// Placeholder delimiters already present in `source` are dropped first.
///
/// ```
/// use handmark_render::extract_code_blocks;
///
/// let protected = extract_code_blocks("before\n```\n# not a heading\n```\nafter");
/// assert_eq!(protected.blocks().len(), 1);
/// assert!(!protected.text().contains("# not a heading"));
/// ```
pub fn extract_code_blocks(source: &str) -> Protected {
    let source = Placeholder::sanitize(source);
    let mut blocks = CodeBlockTable::new();

    let text = FENCE_RE
        .replace_all(&source, |caps: &Captures| {
            let index = blocks.push(CodeBlock::new(&caps[0]));
            Placeholder::token(index)
        })
        .into_owned();

    Protected { text, blocks }
}

/// Put the plain `<pre><code>` rendering of every block back in place.
pub fn restore_code_blocks(protected: Protected) -> String {
    restore_code_blocks_with(protected, |block| render_code_block(block, false))
}

/// Put blocks back in place using a custom block renderer.
///
/// Placeholders are found in a single scan; inserted HTML is never scanned
/// again. A placeholder whose index has no block is left as it is.
pub fn restore_code_blocks_with<F>(protected: Protected, mut render: F) -> String
where
    F: FnMut(&CodeBlock) -> String,
{
    let Protected { text, blocks } = protected;
    PLACEHOLDER_RE
        .replace_all(&text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| blocks.get(index))
                .map(&mut render)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Render one block as escaped `<pre><code>`.
///
/// With `language_class`, a block whose info string names a language gets
/// `class="language-<name>"` on its `<code>` element.
pub fn render_code_block(block: &CodeBlock, language_class: bool) -> String {
    wrap_code(block, language_class, &escape_html(code_body(&block.raw)))
}

/// Wrap already-escaped `content` in `<pre><code>`.
pub fn wrap_code(block: &CodeBlock, language_class: bool, content: &str) -> String {
    match block.language().filter(|_| language_class) {
        Some(language) => format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            escape_attribute(language),
            content
        ),
        None => format!("<pre><code>{}</code></pre>", content),
    }
}

/// Content of a raw fenced block without its fence lines.
///
/// ```
/// use handmark_render::code_body;
/// assert_eq!(code_body("```python\nprint(1)\n```"), "print(1)");
/// assert_eq!(code_body("```\nunterminated\n"), "unterminated");
/// ```
pub fn code_body(raw: &str) -> &str {
    let Some((_, rest)) = raw.split_once('\n') else {
        return "";
    };

    match rest.rsplit_once('\n') {
        Some((body, last)) if is_closing_fence(last) => body,
        None if is_closing_fence(rest) => "",
        _ => rest.strip_suffix('\n').unwrap_or(rest),
    }
}

fn is_closing_fence(line: &str) -> bool {
    line.strip_prefix("```")
        .is_some_and(|tail| tail.trim().is_empty())
}
