//! Handmark Config
//!
//! TOML settings for handmark: optional renderer features, the page
//! template and input limits.
//!
//! The binary reads `config.toml` from the platform config directory
//! (`~/.config/handmark` on Linux, `~/Library/Application Support/handmark`
//! on macOS, `%APPDATA%\handmark` on Windows), then layers the `--config`
//! value on top.
//!
//! ```no_run
//! use handmark_config::Config;
//!
//! let mut config = Config::load().unwrap();
//! config.merge(&Config::parse_override("site.toml").unwrap());
//! ```

mod features;
mod limits;
mod page;

pub use features::FeaturesConfig;
pub use limits::{LimitsConfig, DEFAULT_MAX_INPUT_BYTES};
pub use page::PageConfig;

use handmark_core::{HandmarkError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of a default `config.toml`.
const DEFAULT_TOML: &str = r#"[features]
LanguageClass = false
Highlight     = false
AnchorPrefix  = "section"

[page]
Title      = ""
Lang       = "en"
Theme      = "InspiredGitHub"
Stylesheet = ""

[limits]
MaxInputBytes = 16777216
"#;

/// Everything handmark reads from TOML.
///
/// Every table is optional; missing tables and keys take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// `[features]`
    #[serde(default)]
    pub features: FeaturesConfig,

    /// `[page]`
    #[serde(default)]
    pub page: PageConfig,

    /// `[limits]`
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Text of the default `config.toml`.
    ///
    /// ```
    /// use handmark_config::Config;
    /// let text = Config::default_toml();
    /// assert!(text.contains("[features]"));
    /// assert!(text.contains("[limits]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// `config.toml` inside the platform config directory for handmark.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "handmark")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Read the platform config file, or defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Read and parse one TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
            .map_err(|e| HandmarkError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse the value of `--config`: a path when one exists, inline TOML
    /// otherwise.
    ///
    /// ```
    /// use handmark_config::Config;
    /// let config = Config::parse_override("[features]\nHighlight = true").unwrap();
    /// assert!(config.features.highlight);
    /// ```
    pub fn parse_override(value: &str) -> Result<Self> {
        let path = Path::new(value);
        if path.exists() {
            return Self::load_from(path);
        }
        Self::parse(value).map_err(|e| HandmarkError::Config(format!("--config: {}", e)))
    }

    /// Layer `other` on top of `self`, table by table.
    ///
    /// ```
    /// use handmark_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.merge(&Config::parse_override("[page]\nLang = \"ja\"").unwrap());
    /// assert_eq!(config.page.lang, "ja");
    /// assert_eq!(config.page.theme, "InspiredGitHub");
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.page.merge(&other.page);
        self.limits.merge(&other.limits);
    }

    fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
