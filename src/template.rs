//! The fixed HTML page a rendered fragment is placed in.

use handmark_render::{escape_attribute, escape_html, Document, Heading};

/// Built-in stylesheet.
pub const BASE_CSS: &str = r#"body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    line-height: 1.6;
    color: #333;
    max-width: 900px;
    margin: 0 auto;
    padding: 20px;
    background-color: #f5f5f5;
}
.container {
    background-color: white;
    padding: 30px;
    border-radius: 10px;
    box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1);
}
h1 {
    color: #2c3e50;
    border-bottom: 3px solid #3498db;
    padding-bottom: 10px;
}
h2 {
    color: #2c3e50;
    margin-top: 40px;
    border-bottom: 2px solid #ecf0f1;
    padding-bottom: 5px;
}
h3 {
    color: #34495e;
    margin-top: 30px;
}
code {
    background-color: #f8f8f8;
    padding: 2px 5px;
    border-radius: 3px;
    font-family: 'Monaco', 'Consolas', monospace;
    font-size: 0.9em;
}
pre {
    background-color: #f8f8f8;
    padding: 15px;
    border-radius: 5px;
    overflow-x: auto;
    line-height: 1.4;
}
pre code {
    background-color: transparent;
    padding: 0;
}
.toc {
    background-color: #ecf0f1;
    padding: 20px;
    border-radius: 5px;
    margin-bottom: 30px;
}
.toc ul {
    list-style-type: none;
    padding-left: 0;
}
.toc a {
    color: #3498db;
    text-decoration: none;
}
ul li {
    margin: 5px 0;
}
@media (max-width: 768px) {
    body {
        padding: 10px;
    }
    .container {
        padding: 20px;
    }
}
"#;

/// Page-level settings resolved from CLI and config.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub title: String,
    pub lang: String,
    /// Extra stylesheet URL, linked after the built-in CSS.
    pub stylesheet: Option<String>,
    /// Stylesheet for highlighted code, if highlighting is on.
    pub highlight_css: Option<String>,
    /// Put a table of contents before the content.
    pub toc: bool,
}

impl Page {
    /// Wrap a rendered document in a complete HTML page.
    pub fn wrap(&self, document: &Document) -> String {
        let mut head = format!(
            "<meta charset=\"UTF-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n<title>{}</title>\n<style>\n{}</style>\n",
            escape_html(&self.title),
            BASE_CSS
        );
        if let Some(css) = &self.highlight_css {
            head.push_str(&format!("<style>\n{}</style>\n", css));
        }
        if let Some(href) = &self.stylesheet {
            head.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                escape_attribute(href)
            ));
        }

        let toc = if self.toc {
            table_of_contents(&document.headings)
        } else {
            String::new()
        };

        format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n{}</head>\n<body>\n<div class=\"container\">\n{}{}\n</div>\n</body>\n</html>\n",
            escape_attribute(&self.lang),
            head,
            toc,
            document.html
        )
    }
}

/// Choose the page title: explicit, configured, first `<h1>`, then `fallback`.
pub fn resolve_title(
    explicit: Option<&str>,
    configured: &str,
    document: &Document,
    fallback: &str,
) -> String {
    explicit
        .filter(|title| !title.is_empty())
        .or_else(|| Some(configured).filter(|title| !title.is_empty()))
        .or_else(|| document.title())
        .unwrap_or(fallback)
        .to_string()
}

/// A `<nav class="toc">` linking every heading. Empty when there are none.
pub fn table_of_contents(headings: &[Heading]) -> String {
    if headings.is_empty() {
        return String::new();
    }

    let mut nav = String::from("<nav class=\"toc\">\n<ul>\n");
    for heading in headings {
        nav.push_str(&format!(
            "<li class=\"toc-{}\"><a href=\"#{}\">{}</a></li>\n",
            heading.level,
            heading.id,
            escape_html(&heading.text)
        ));
    }
    nav.push_str("</ul>\n</nav>\n");
    nav
}
