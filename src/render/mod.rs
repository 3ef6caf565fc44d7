//! Turns a [`BuildResult`] into the artifact written at the end of a build.

use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::app::{BuboError, Result};
use crate::config::{OutputConfig, OutputFormat};
use crate::domain::BuildResult;

pub fn render(result: &BuildResult, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Html => render_html(result, &output.title),
        OutputFormat::Json => render_json(result),
    }
}

pub fn render_json(result: &BuildResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| BuboError::Render(e.to_string()))
}

pub fn render_html(result: &BuildResult, title: &str) -> Result<String> {
    let mut html = String::new();
    write_page(&mut html, result, title).map_err(|e| BuboError::Render(e.to_string()))?;
    Ok(html)
}

fn write_page(html: &mut impl fmt::Write, result: &BuildResult, title: &str) -> fmt::Result {
    let title = encode_text(title);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(html, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")?;
    writeln!(html, "<title>{title}</title>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<h1>{title}</h1>")?;
    writeln!(html, "<ul class=\"posts\">")?;

    for post in &result.posts {
        let date = post
            .published_at()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        writeln!(
            html,
            "<li><time>{}</time> <span class=\"group\">{}</span> <span class=\"feed\">{}</span> <a href=\"{}\">{}</a></li>",
            date,
            encode_text(&post.group),
            encode_text(&post.feed_title),
            encode_double_quoted_attribute(&post.link),
            encode_text(post.display_title()),
        )?;
    }
    writeln!(html, "</ul>")?;

    if !result.errors.is_empty() {
        writeln!(html, "<footer class=\"errors\">")?;
        writeln!(html, "<h2>{} feeds could not be loaded</h2>", result.errors.len())?;
        writeln!(html, "<ul>")?;
        for error in &result.errors {
            writeln!(html, "<li>{}</li>", encode_text(error))?;
        }
        writeln!(html, "</ul>")?;
        writeln!(html, "</footer>")?;
    }

    writeln!(
        html,
        "<p class=\"info\">Built with bubo {} from {} feeds.</p>",
        env!("CARGO_PKG_VERSION"),
        result.feed_count
    )?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")
}

/// Render and write the artifact, creating parent directories as needed.
pub fn write_output(result: &BuildResult, output: &OutputConfig) -> Result<()> {
    let content = render(result, output)?;
    write_file(&output.path, &content)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
