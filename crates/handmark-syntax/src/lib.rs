//! Handmark Syntax
//!
//! This crate provides syntax highlighting for restored code blocks using
//! the syntect library. Output is class-based HTML (`<span class="...">`),
//! so colours live in a stylesheet generated from a syntect theme rather
//! than inline in every block.
//!
//! # Example
//!
//! ```
//! use handmark_syntax::Highlighter;
//!
//! let highlighter = Highlighter::new();
//! let html = highlighter.highlight_html("x = 1 < 2\n", Some("python")).unwrap();
//! assert!(html.contains("&lt;"));
//! assert!(html.contains("<span"));
//!
//! let css = highlighter.css().unwrap();
//! assert!(css.contains('{'));
//! ```

mod languages;

pub use languages::{language_alias, LANGUAGE_ALIASES};

use handmark_core::{HandmarkError, Result};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Class style shared by the generated spans and the generated CSS.
const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

/// Syntax highlighter for code blocks.
///
/// Loading the syntax and theme sets is expensive; build one highlighter
/// and share it. It holds no per-document state.
pub struct Highlighter {
    /// Syntax definitions
    syntax_set: SyntaxSet,
    /// Color themes
    theme_set: ThemeSet,
    /// Theme used for [`Highlighter::css`]
    theme_name: String,
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("theme_name", &self.theme_name)
            .finish()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Create a new highlighter with the default theme (InspiredGitHub).
    pub fn new() -> Self {
        Self::with_theme("InspiredGitHub")
    }

    /// Create a highlighter with a specific theme.
    ///
    /// Built-in themes include "InspiredGitHub", "base16-ocean.dark",
    /// "base16-ocean.light", "Solarized (dark)" and "Solarized (light)".
    pub fn with_theme(theme_name: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme_name.to_string(),
        }
    }

    /// Get the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Get the current theme, or an error when the name is unknown.
    pub fn theme(&self) -> Result<&Theme> {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .ok_or_else(|| HandmarkError::Highlight(format!("unknown theme '{}'", self.theme_name)))
    }

    /// Find syntax definition for a language name.
    ///
    /// Checks the alias table first, then syntect's name, token and
    /// extension lookups.
    pub fn syntax_for_language(&self, language: &str) -> Option<&SyntaxReference> {
        let canonical = language_alias(language);

        self.syntax_set
            .find_syntax_by_name(canonical)
            .or_else(|| self.syntax_set.find_syntax_by_token(canonical))
            .or_else(|| self.syntax_set.find_syntax_by_extension(canonical))
            .or_else(|| self.syntax_set.find_syntax_by_token(language))
    }

    /// Highlight `code` as HTML spans.
    ///
    /// The result is already HTML-escaped and carries no surrounding
    /// `<pre>`/`<code>`. Unknown or missing languages use plain text.
    pub fn highlight_html(&self, code: &str, language: Option<&str>) -> Result<String> {
        let syntax = language
            .and_then(|lang| self.syntax_for_language(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);
        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| HandmarkError::Highlight(e.to_string()))?;
        }
        Ok(generator.finalize())
    }

    /// Stylesheet for the spans produced by [`Highlighter::highlight_html`].
    pub fn css(&self) -> Result<String> {
        css_for_theme_with_class_style(self.theme()?, CLASS_STYLE)
            .map_err(|e| HandmarkError::Highlight(e.to_string()))
    }

    /// List available theme names.
    pub fn themes(&self) -> Vec<&str> {
        self.theme_set.themes.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a theme exists.
    pub fn has_theme(&self, name: &str) -> bool {
        self.theme_set.themes.contains_key(name)
    }

    /// Check if a language is supported.
    pub fn has_language(&self, name: &str) -> bool {
        self.syntax_for_language(name).is_some()
    }
}
