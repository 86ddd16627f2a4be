//! Language alias mapping.
//!
//! Fence info strings use short names ("py", "sh", "js"); syntect knows
//! syntaxes by their display names. This maps the former onto the latter.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Static mapping of lowercase aliases to syntect syntax names.
pub static LANGUAGE_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("python", "Python"),
        ("py", "Python"),
        ("python3", "Python"),
        ("ipython", "Python"),
        ("pycon", "Python"),
        ("javascript", "JavaScript"),
        ("js", "JavaScript"),
        ("node", "JavaScript"),
        ("rust", "Rust"),
        ("rs", "Rust"),
        ("bash", "Bourne Again Shell (bash)"),
        ("sh", "Bourne Again Shell (bash)"),
        ("shell", "Bourne Again Shell (bash)"),
        ("console", "Bourne Again Shell (bash)"),
        ("zsh", "Bourne Again Shell (bash)"),
        ("c", "C"),
        ("cpp", "C++"),
        ("c++", "C++"),
        ("java", "Java"),
        ("go", "Go"),
        ("ruby", "Ruby"),
        ("rb", "Ruby"),
        ("sql", "SQL"),
        ("sqlite", "SQL"),
        ("html", "HTML"),
        ("jinja", "HTML"),
        ("jinja2", "HTML"),
        ("css", "CSS"),
        ("json", "JSON"),
        ("yaml", "YAML"),
        ("yml", "YAML"),
        ("xml", "XML"),
        ("markdown", "Markdown"),
        ("md", "Markdown"),
        ("makefile", "Makefile"),
        ("make", "Makefile"),
        ("diff", "Diff"),
        ("patch", "Diff"),
        ("r", "R"),
        ("latex", "LaTeX"),
        ("tex", "TeX"),
        ("ini", "INI"),
        ("cfg", "INI"),
    ]
    .into_iter()
    .collect()
});

/// Resolve a fence language to a syntect syntax name.
///
/// Unknown names are returned unchanged so syntect can still try them
/// as a token or file extension.
///
/// ```
/// use handmark_syntax::language_alias;
/// assert_eq!(language_alias("py"), "Python");
/// assert_eq!(language_alias("PY"), "Python");
/// assert_eq!(language_alias("brainfuck"), "brainfuck");
/// ```
pub fn language_alias(language: &str) -> &str {
    LANGUAGE_ALIASES
        .get(language.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(language)
}
