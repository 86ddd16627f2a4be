//! Page template configuration.

use serde::{Deserialize, Serialize};

/// Settings for the HTML page the rendered fragment is placed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageConfig {
    /// Document title. Empty means "derive from the first `<h1>` or file name".
    #[serde(default)]
    pub title: String,

    /// Value of the `lang` attribute on `<html>`.
    #[serde(default = "default_lang")]
    pub lang: String,

    /// syntect theme used for highlight CSS.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Extra stylesheet URL linked after the built-in CSS. Empty for none.
    #[serde(default)]
    pub stylesheet: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            lang: default_lang(),
            theme: default_theme(),
            stylesheet: String::new(),
        }
    }
}

impl PageConfig {
    /// Merge another PageConfig into this one. Empty strings in `other`
    /// leave the current value alone.
    pub fn merge(&mut self, other: &PageConfig) {
        for (mine, theirs) in [
            (&mut self.title, &other.title),
            (&mut self.lang, &other.lang),
            (&mut self.theme, &other.theme),
            (&mut self.stylesheet, &other.stylesheet),
        ] {
            if !theirs.is_empty() {
                *mine = theirs.clone();
            }
        }
    }
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_theme() -> String {
    "InspiredGitHub".to_string()
}
