//! Handmark - render lightweight Markdown into standalone HTML pages.
//!
//! This binary reads Markdown from files or stdin, runs it through the
//! handmark-render pipeline and writes HTML pages (or bare fragments).

mod cli;
mod template;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, warn, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use handmark_config::Config;
use handmark_core::Result;
use handmark_render::{RenderOptions, Renderer};
use template::{resolve_title, Page};

/// Title used when nothing better is known.
const DEFAULT_TITLE: &str = "Document";

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Handmark v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    let renderer = Renderer::with_options(RenderOptions::from_config(&config));

    if cli.should_read_stdin() {
        run_stdin(cli, &config, &renderer)
    } else {
        run_files(cli, &config, &renderer)
    }
}

/// Load configuration, then apply `--config` and command-line flags.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable config: {}", e);
        Config::default()
    });

    if let Some(ref config_arg) = cli.config {
        config.merge(&Config::parse_override(config_arg)?);
        debug!("Merged config override");
    }

    cli.apply(&mut config);
    Ok(config)
}

/// Read Markdown from stdin and write HTML to stdout.
fn run_stdin(cli: &Cli, config: &Config, renderer: &Renderer) -> Result<()> {
    info!("Reading from stdin");

    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;

    let html = convert(cli, config, renderer, &source, DEFAULT_TITLE)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Convert each input file to an HTML file.
fn run_files(cli: &Cli, config: &Config, renderer: &Renderer) -> Result<()> {
    if let Some(output) = cli.ignored_output() {
        warn!(
            "Ignoring -o {}: it needs a single input file, writing .html beside each input",
            output.display()
        );
    }

    for path in &cli.files {
        info!("Processing file: {}", path.display());

        let source = fs::read_to_string(path)?;
        let stem = file_stem(path);
        let html = convert(cli, config, renderer, &source, &stem)?;

        let output = cli.output_path_for(path);
        fs::write(&output, html)?;
        info!("Wrote {}", output.display());
    }

    Ok(())
}

/// Render one source document into the final output text.
fn convert(
    cli: &Cli,
    config: &Config,
    renderer: &Renderer,
    source: &str,
    fallback_title: &str,
) -> Result<String> {
    config.limits.check(source)?;

    let source = source.replace("\r\n", "\n");
    let document = renderer.render_document(&source);
    debug!("Rendered {} heading(s)", document.headings.len());

    if cli.fragment {
        return Ok(format!("{}\n", document.html));
    }

    let page = Page {
        title: resolve_title(
            cli.title.as_deref(),
            &config.page.title,
            &document,
            fallback_title,
        ),
        lang: config.page.lang.clone(),
        stylesheet: Some(config.page.stylesheet.clone()).filter(|href| !href.is_empty()),
        highlight_css: highlight_css(renderer),
        toc: cli.toc,
    };

    Ok(page.wrap(&document))
}

/// Stylesheet for highlighted code, when the renderer highlights.
fn highlight_css(renderer: &Renderer) -> Option<String> {
    let highlighter = renderer.highlighter()?;
    match highlighter.css() {
        Ok(css) => Some(css),
        Err(e) => {
            warn!("No highlight stylesheet: {}", e);
            None
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}
