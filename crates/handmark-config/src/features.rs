//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! the optional behaviours of the renderer.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
///
/// Controls which optional renderer behaviours are enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Add `class="language-xxx"` to code elements of fenced blocks
    /// that carry a language.
    /// Default: false
    #[serde(default)]
    pub language_class: bool,

    /// Emit syntax-highlighted code blocks (class-based spans).
    /// Default: false
    #[serde(default)]
    pub highlight: bool,

    /// Prefix of fallback heading ids (`<prefix>-N`).
    /// Default: "section"
    #[serde(default = "default_anchor_prefix")]
    pub anchor_prefix: String,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            language_class: false,
            highlight: false,
            anchor_prefix: default_anchor_prefix(),
        }
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// Flags are copied from `other`; the prefix only when non-empty.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.language_class = other.language_class;
        self.highlight = other.highlight;
        if !other.anchor_prefix.is_empty() {
            self.anchor_prefix = other.anchor_prefix.clone();
        }
    }
}

fn default_anchor_prefix() -> String {
    "section".to_string()
}
