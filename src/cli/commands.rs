use std::path::PathBuf;

use crate::app::{AppContext, Result};
use crate::config::OutputFormat;
use crate::render;

pub async fn build(
    ctx: &mut AppContext,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<()> {
    if let Some(path) = output {
        ctx.config.output.path = path;
    }
    if let Some(format) = format {
        ctx.config.output.format = format;
    }

    let feed_count = ctx.config.feed_count();
    println!("Fetching {} feeds...", feed_count);

    let result = ctx.build().await;
    render::write_output(&result, &ctx.config.output)?;

    println!(
        "\nFinished writing to {}:\n- {} feeds in {:.3} seconds\n- {} posts\n- {} errors",
        ctx.config.output.path.display(),
        result.feed_count,
        result.elapsed.as_secs_f64(),
        result.posts.len(),
        result.errors.len()
    );
    for error in &result.errors {
        eprintln!("  ! {}", error);
    }

    Ok(())
}

pub fn list_feeds(ctx: &AppContext) -> Result<()> {
    let sources = ctx.sources();

    if sources.is_empty() {
        println!("No feeds");
        return Ok(());
    }

    if let Some(path) = &ctx.config_path {
        println!("{} feeds from {}", sources.len(), path.display());
    }

    for (source, delay) in ctx.scheduler.plan(&sources) {
        println!("[{}] {} (+{}ms)", source.group, source.url, delay.as_millis());
    }

    Ok(())
}
