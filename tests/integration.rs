//! Integration tests for handmark.
//!
//! These tests run the whole pipeline on realistic documents and drive the
//! `handmark` binary end to end.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::io::Write;

use handmark_core::HandmarkError;
use handmark_config::{Config, LimitsConfig};
use handmark_render::{render, RenderOptions, Renderer};

/// Path to a file under `tests/fixtures`.
fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Helper to read a fixture file.
fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

/// A scratch directory unique to this test process and `name`.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("handmark-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn handmark() -> Command {
    Command::new(env!("CARGO_BIN_EXE_handmark"))
}

// =============================================================================
// Pipeline Tests
// =============================================================================

#[test]
fn test_render_empty() {
    assert_eq!(render(""), "");
}

#[test]
fn test_render_reference_document() {
    let html = render("# Title\n\nSome *italic* and **bold** text.\n\n```\ncode & <tag>\n```\n");
    assert!(html.contains("<h1 id=\"title\">Title</h1>"));
    assert!(html.contains("<p>Some <em>italic</em> and <strong>bold</strong> text.</p>"));
    assert!(html.contains("<pre><code>code &amp; &lt;tag&gt;</code></pre>"));
}

#[test]
fn test_tutorial_headings() {
    let html = render(&read_fixture("tutorial.md"));

    assert!(html.contains("<h1 id=\"numpy-tutorial\">NumPy Tutorial</h1>"));
    assert!(html.contains("<h2 id=\"目次\">目次</h2>"));
    assert!(html.contains("<h2 id=\"creating-arrays\">Creating arrays</h2>"));
    assert!(html.contains("<h3 id=\"shapes-sizes\">Shapes & sizes</h3>"));
    assert!(html.contains("<h2 id=\"section-1\">🚀</h2>"));
}

#[test]
fn test_tutorial_code_blocks() {
    let html = render(&read_fixture("tutorial.md"));

    assert!(html.contains(
        "<pre><code>import numpy as np\n\na = np.array([1, 2, 3])\nprint(a * 2)  # [2 4 6]</code></pre>"
    ));
    // Unterminated fence runs to the end of the document.
    assert!(html.ends_with("<pre><code>&lt;not&gt; &amp; \"escaped\" *once*</code></pre>"));
    assert!(!html.contains("<em>once</em>"));
}

#[test]
fn test_tutorial_lists_and_paragraphs() {
    let html = render(&read_fixture("tutorial.md"));

    assert!(html.contains(
        "<p>A short tour of <strong>NumPy</strong> arrays.<br>\nRead it <em>top to bottom</em>.</p>"
    ));
    assert!(html.contains(
        "<ul>\n<li><a href=\"#creating-arrays\">Creating arrays</a></li>\n<li><a href=\"#indexing\">Indexing</a></li>\n</ul>"
    ));
    assert!(html.contains(
        "<ul>\n<li><code>a.shape</code> gives the dimensions</li>\n<li><code>a.size</code> gives the element count</li>\n<li><code>a.ndim</code> gives the rank</li>\n</ul>"
    ));
    assert!(html.contains("<a href=\"https://numpy.org/doc/stable/\">the docs</a>"));
    assert!(!html.contains("<p><ul>"));
    assert!(!html.contains("</ul></p>"));
    assert!(!html.contains("<p></p>"));
}

#[test]
fn test_renderer_shared_across_threads() {
    let renderer = Renderer::new();
    let source = "# ★\n\n# ☆\n";

    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| renderer.render(source)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for html in results {
        assert_eq!(
            html,
            "<h1 id=\"section-1\">★</h1>\n<h1 id=\"section-2\">☆</h1>"
        );
    }
}

#[test]
fn test_options_from_inline_config() {
    let config = Config::parse_override("[features]\nLanguageClass = true\nAnchorPrefix = \"s\"").unwrap();
    let renderer = Renderer::with_options(RenderOptions::from_config(&config));

    assert_eq!(
        renderer.render("## ※\n```js\nlet x;\n```"),
        "<h2 id=\"s-1\">※</h2>\n<pre><code class=\"language-js\">let x;</code></pre>"
    );
}

#[test]
fn test_input_limit() {
    let limits = LimitsConfig { max_input_bytes: 8 };
    let err = limits.check("# a long heading").unwrap_err();
    assert!(matches!(
        err,
        HandmarkError::ResourceExhaustion { size: 16, limit: 8 }
    ));
}

// =============================================================================
// Binary Tests
// =============================================================================

#[test]
fn test_cli_stdin_fragment() {
    let mut child = handmark()
        .arg("--fragment")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"# Hi\r\n\r\nthere\r\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<h1 id=\"hi\">Hi</h1>\n<p>there</p>\n"
    );
}

#[test]
fn test_cli_writes_html_beside_input() {
    let dir = scratch_dir("page");
    let input = dir.join("guide.md");
    fs::write(&input, "# Guide\n\nHello.\n").unwrap();

    let status = handmark().arg(&input).status().unwrap();
    assert!(status.success());

    let page = fs::read_to_string(dir.join("guide.html")).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Guide</title>"));
    assert!(page.contains("<div class=\"container\">\n<h1 id=\"guide\">Guide</h1>\n<p>Hello.</p>\n</div>"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_title_and_output_flags() {
    let dir = scratch_dir("flags");
    let input = dir.join("notes.md");
    let output = dir.join("out.html");
    fs::write(&input, "plain text\n").unwrap();

    let status = handmark()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-t", "My <Notes>", "--toc"])
        .status()
        .unwrap();
    assert!(status.success());

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("<title>My &lt;Notes&gt;</title>"));
    assert!(!dir.join("notes.html").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_output_flag_with_several_files_warns() {
    let dir = scratch_dir("multi");
    let first = dir.join("a.md");
    let second = dir.join("b.md");
    let output = dir.join("out.html");
    fs::write(&first, "# A\n").unwrap();
    fs::write(&second, "# B\n").unwrap();

    let result = handmark()
        .arg(&first)
        .arg(&second)
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();
    assert!(result.status.success());

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Ignoring -o"), "stderr: {}", stderr);
    assert!(dir.join("a.html").exists());
    assert!(dir.join("b.html").exists());
    assert!(!output.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_title_falls_back_to_file_stem() {
    let dir = scratch_dir("stem");
    let input = dir.join("chapter-one.md");
    fs::write(&input, "no heading here\n").unwrap();

    assert!(handmark().arg(&input).status().unwrap().success());
    let page = fs::read_to_string(dir.join("chapter-one.html")).unwrap();
    assert!(page.contains("<title>chapter-one</title>"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_missing_file_fails() {
    let dir = scratch_dir("missing");
    let status = handmark()
        .arg(dir.join("absent.md"))
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_rejects_oversized_input() {
    let dir = scratch_dir("limit");
    let input = dir.join("big.md");
    fs::write(&input, "x".repeat(64)).unwrap();

    let status = handmark()
        .arg(&input)
        .args(["-c", "[limits]\nMaxInputBytes = 16"])
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
    assert!(!dir.join("big.html").exists());

    let _ = fs::remove_dir_all(&dir);
}
