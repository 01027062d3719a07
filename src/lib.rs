//! Core library for md-render: turns a Markdown document into a standalone
//! HTML page by filling a template.

pub mod cli;
pub mod error;
pub mod fsio;
pub mod markdown;
pub mod template;
pub mod title;

use crate::cli::Cli;
use crate::error::RenderError;
use crate::fsio::{read_text, write_text};
use crate::markdown::render_markdown;
use crate::template::compose;
use crate::title::infer_title;
use anyhow::Context;
use clap::Parser;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Renders `markdown` into `template`, titling the page after the document's
/// first level-1 heading or `fallback_title` when it has none.
pub fn render_page(
    markdown: &str,
    template: &str,
    fallback_title: &str,
) -> anyhow::Result<String> {
    let title = infer_title(markdown, fallback_title);
    log::debug!("Using page title {title:?}");

    let content = render_markdown(markdown)?;
    log::debug!(
        "Rendered {} bytes of Markdown into {} bytes of HTML",
        markdown.len(),
        content.len()
    );

    Ok(compose(&content, template, &title))
}

/// Expands a leading `~` and makes `path` absolute.
///
/// Symlinks are resolved when the path, or at least its parent directory,
/// exists.
pub fn resolve_path(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = expand_home(path);
    let absolute = std::path::absolute(&expanded)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    if let Ok(canonical) = fs::canonicalize(&absolute) {
        return Ok(canonical);
    }

    if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
        if let Ok(parent) = fs::canonicalize(parent) {
            return Ok(parent.join(name));
        }
    }

    Ok(absolute)
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), home_dir()) {
        (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}

fn home_dir() -> Option<OsString> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
}

/// The output path used when none is given: the input with an `.html` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let Cli {
        input,
        output,
        template,
        title,
        dry_run,
    } = Cli::parse();

    // 1. Resolve and validate paths before any I/O
    let input_path = resolve_path(&input)?;
    if !input_path.exists() {
        return Err(RenderError::InputNotFound(input_path).into());
    }

    let output_path = match output {
        Some(output) => resolve_path(&output)?,
        None => resolve_path(&default_output_path(&input_path))?,
    };

    let template_path = resolve_path(&template)?;
    if !template_path.exists() {
        return Err(RenderError::TemplateNotFound(template_path).into());
    }

    log::debug!(
        "Rendering {} with template {} into {}",
        input_path.display(),
        template_path.display(),
        output_path.display()
    );

    // 2. Render the page
    let markdown = read_text(&input_path)?;
    let template_html = read_text(&template_path)?;
    let page = render_page(&markdown, &template_html, &title)?;

    if dry_run {
        io::stdout().write_all(page.as_bytes())?;
        return Ok(());
    }

    // 3. Write it out
    if output_path == input_path {
        log::warn!(
            "Output path is the input file; {} will be overwritten.",
            input_path.display()
        );
    }
    write_text(&output_path, &page)?;

    println!("OK: {}", output_path.display());
    Ok(())
}
