//! Command-line interface for handmark.

use clap::Parser;
use std::path::{Path, PathBuf};

use handmark_config::Config;

/// Handmark - render lightweight Markdown into standalone HTML pages.
///
/// Each `name.md` argument is written to `name.html` beside it. With no
/// files, Markdown is read from stdin and HTML written to stdout.
#[derive(Parser, Debug)]
#[command(
    name = "handmark",
    author = "Handmark Contributors",
    version,
    about = "Render lightweight Markdown into standalone HTML pages",
    after_help = "Examples:\n  \
                  handmark tutorial.md\n  \
                  cat notes.md | handmark --fragment\n  \
                  handmark -t 'NumPy Tutorial' --toc numpy.md -o site/numpy.html\n  \
                  handmark -c $'[features]\\nHighlight = true' guide.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output path (only with a single input file)
    #[arg(short = 'o', long = "output", value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Page title (defaults to the first level-one heading)
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Emit only the HTML fragment, without the page template
    #[arg(long = "fragment")]
    pub fragment: bool,

    /// Syntax-highlight fenced code blocks
    #[arg(long = "highlight")]
    pub highlight: bool,

    /// Add class="language-xxx" to fenced code blocks
    #[arg(long = "language-class")]
    pub language_class: bool,

    /// Put a table of contents at the top of the page
    #[arg(long = "toc")]
    pub toc: bool,

    /// Syntax highlighting theme
    #[arg(long = "theme")]
    pub theme: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// The `-o` path when it cannot apply because several files were given.
    pub fn ignored_output(&self) -> Option<&Path> {
        self.output.as_deref().filter(|_| self.files.len() > 1)
    }

    /// Where the HTML for `input` goes.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        match &self.output {
            Some(output) if self.files.len() == 1 => output.clone(),
            _ => input.with_extension("html"),
        }
    }

    /// Apply flags that switch config options on.
    pub fn apply(&self, config: &mut Config) {
        if self.highlight {
            config.features.highlight = true;
        }
        if self.language_class {
            config.features.language_class = true;
        }
        if let Some(theme) = &self.theme {
            config.page.theme = theme.clone();
        }
    }
}

/// Show paths information.
pub fn show_paths() {
    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
