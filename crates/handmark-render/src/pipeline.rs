//! The rendering pipeline.
//!
//! ```text
//! extract-code ─▶ rewrite-blocks ─▶ coalesce-lists ─▶ rewrite-inline
//!              ─▶ wrap-paragraphs ─▶ restore-code ─▶ assign-anchors
//! ```
//!
//! Extraction returns a [`Protected`] value. The four text passes in
//! between only ever see its working text, and restoration consumes it,
//! so the code table cannot leak into the middle of the pipeline.

use handmark_config::{Config, FeaturesConfig};
use handmark_core::{AnchorRegistry, CodeBlock, Stage};
use handmark_syntax::Highlighter;
use log::{debug, trace, warn};

use crate::block::rewrite_blocks;
use crate::code::{
    code_body, extract_code_blocks, render_code_block, restore_code_blocks_with, wrap_code,
    Protected,
};
use crate::heading::{assign_anchors, collect_headings, Heading};
use crate::inline::rewrite_inline;
use crate::list::coalesce_lists;
use crate::paragraph::wrap_paragraphs;

/// One pure rewrite of the protected working text.
#[derive(Clone, Copy)]
pub struct TextPass {
    pub stage: Stage,
    pub run: fn(&str) -> String,
}

/// Passes between extraction and restoration, in order.
pub const TEXT_PASSES: [TextPass; 4] = [
    TextPass {
        stage: Stage::RewriteBlocks,
        run: rewrite_blocks,
    },
    TextPass {
        stage: Stage::CoalesceLists,
        run: coalesce_lists,
    },
    TextPass {
        stage: Stage::RewriteInline,
        run: rewrite_inline,
    },
    TextPass {
        stage: Stage::WrapParagraphs,
        run: wrap_paragraphs,
    },
];

/// Apply every text pass to the protected text.
pub fn run_text_passes(protected: Protected) -> Protected {
    TEXT_PASSES.iter().fold(protected, |protected, pass| {
        let protected = protected.map(pass.run);
        trace!("{}: {} bytes", pass.stage, protected.text().len());
        protected
    })
}

/// Options for a [`Renderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Put `class="language-xxx"` on `<code>` of fenced blocks with a language.
    pub language_class: bool,
    /// Emit syntect class spans inside code blocks.
    pub highlight: bool,
    /// Prefix of fallback heading ids.
    pub anchor_prefix: String,
    /// syntect theme, only relevant with `highlight`.
    pub theme: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language_class: false,
            highlight: false,
            anchor_prefix: "section".to_string(),
            theme: "InspiredGitHub".to_string(),
        }
    }
}

impl RenderOptions {
    /// Options from the `[features]` table.
    pub fn from_features(features: &FeaturesConfig) -> Self {
        Self {
            language_class: features.language_class,
            highlight: features.highlight,
            anchor_prefix: features.anchor_prefix.clone(),
            ..Self::default()
        }
    }

    /// Options from a whole config, including the page theme.
    pub fn from_config(config: &Config) -> Self {
        Self {
            theme: config.page.theme.clone(),
            ..Self::from_features(&config.features)
        }
    }
}

/// A rendered fragment together with its headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub html: String,
    pub headings: Vec<Heading>,
}

impl Document {
    /// Text of the first `<h1>`, if any.
    pub fn title(&self) -> Option<&str> {
        self.headings
            .iter()
            .find(|heading| heading.level.number() == 1)
            .map(|heading| heading.text.as_str())
    }
}

/// Markdown-to-HTML renderer.
///
/// Holds configuration only; every call gets its own code table and anchor
/// registry, so one renderer can serve many threads.
///
/// ```
/// use handmark_render::{RenderOptions, Renderer};
///
/// let renderer = Renderer::with_options(RenderOptions {
///     language_class: true,
///     ..RenderOptions::default()
/// });
/// let html = renderer.render("```rust\nfn main() {}\n```");
/// assert_eq!(html, "<pre><code class=\"language-rust\">fn main() {}</code></pre>");
/// ```
#[derive(Debug)]
pub struct Renderer {
    options: RenderOptions,
    highlighter: Option<Highlighter>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Renderer with default options.
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Renderer with the given options. Loads syntect only when
    /// highlighting is on.
    pub fn with_options(options: RenderOptions) -> Self {
        let highlighter = options
            .highlight
            .then(|| Highlighter::with_theme(&options.theme));
        if let Some(highlighter) = &highlighter {
            if !highlighter.has_theme(highlighter.theme_name()) {
                warn!(
                    "Unknown theme '{}', available: {}",
                    highlighter.theme_name(),
                    highlighter.themes().join(", ")
                );
            }
        }
        Self {
            options,
            highlighter,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Highlighter in use, if highlighting is on.
    pub fn highlighter(&self) -> Option<&Highlighter> {
        self.highlighter.as_ref()
    }

    /// Render Markdown source to an HTML fragment.
    pub fn render(&self, source: &str) -> String {
        let protected = extract_code_blocks(source);
        debug!("{}: {} block(s)", Stage::ExtractCode, protected.blocks().len());
        for block in protected.blocks().iter() {
            trace!("{}: language {:?}", Stage::ExtractCode, block.language());
        }

        let protected = run_text_passes(protected);

        let html = restore_code_blocks_with(protected, |block| self.render_block(block));
        trace!("{}: {} bytes", Stage::RestoreCode, html.len());

        let mut registry = AnchorRegistry::new();
        let html = assign_anchors(&html, &self.options.anchor_prefix, &mut registry);
        debug!("{}: {} fallback id(s)", Stage::AssignAnchors, registry.issued());
        html
    }

    /// Render and collect the headings of the result.
    pub fn render_document(&self, source: &str) -> Document {
        let html = self.render(source);
        let headings = collect_headings(&html);
        Document { html, headings }
    }

    fn render_block(&self, block: &CodeBlock) -> String {
        let language_class = self.options.language_class;
        let Some(highlighter) = &self.highlighter else {
            return render_code_block(block, language_class);
        };

        let language = block.language();
        if let Some(name) = language.filter(|name| !highlighter.has_language(name)) {
            debug!("No syntax for '{}', highlighting as plain text", name);
        }

        match highlighter.highlight_html(code_body(&block.raw), language) {
            Ok(content) => wrap_code(block, language_class, &content),
            Err(e) => {
                warn!("Highlighting failed, emitting plain code: {}", e);
                render_code_block(block, language_class)
            }
        }
    }
}

/// Render Markdown source with default options.
///
/// ```
/// let html = handmark_render::render("# Title\n\nSome *italic* and **bold** text.\n\n```\ncode & <tag>\n```\n");
/// assert_eq!(
///     html,
///     "<h1 id=\"title\">Title</h1>\n\
///      <p>Some <em>italic</em> and <strong>bold</strong> text.</p>\n\
///      <pre><code>code &amp; &lt;tag&gt;</code></pre>"
/// );
/// ```
pub fn render(source: &str) -> String {
    Renderer::new().render(source)
}
