//! Handmark Render
//!
//! This crate turns a constrained Markdown dialect into an HTML fragment
//! with a fixed sequence of regex rewrite stages.
//!
//! # Stages
//!
//! 1. **Extract code** - fenced blocks become opaque placeholders
//! 2. **Rewrite blocks** - `#`..`###` headings and list items
//! 3. **Coalesce lists** - adjacent items wrapped in one `<ul>`
//! 4. **Rewrite inline** - emphasis, code spans, links
//! 5. **Wrap paragraphs** - `<p>` and `<br>`
//! 6. **Restore code** - escaped `<pre><code>` put back
//! 7. **Assign anchors** - `id` on every heading
//!
//! Every stage is a total function over strings; malformed input yields
//! imperfect markup, never an error.
//!
//! # Example
//!
//! ```
//! use handmark_render::render;
//!
//! let html = render("## Install\n\n- `cargo build`\n- run **it**\n");
//! assert_eq!(
//!     html,
//!     "<h2 id=\"install\">Install</h2>\n<ul>\n<li><code>cargo build</code></li>\n<li>run <strong>it</strong></li>\n</ul>"
//! );
//! ```

pub mod block;
pub mod code;
pub mod escape;
pub mod heading;
pub mod inline;
pub mod list;
pub mod paragraph;
pub mod pipeline;

pub use block::{count_heading_lines, rewrite_blocks, rewrite_headings};
pub use code::{
    code_body, extract_code_blocks, render_code_block, restore_code_blocks,
    restore_code_blocks_with, wrap_code, Protected,
};
pub use escape::{escape_attribute, escape_html};
pub use heading::{assign_anchors, collect_headings, is_empty_slug, slugify, strip_tags, Heading};
pub use inline::{rewrite_emphasis, rewrite_inline, rewrite_links};
pub use list::coalesce_lists;
pub use paragraph::{is_block_line, wrap_paragraphs};
pub use pipeline::{render, run_text_passes, Document, RenderOptions, Renderer, TextPass, TEXT_PASSES};
