use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bubo::app::AppContext;
use bubo::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let mut ctx = AppContext::new(cli.config.as_deref())?;

    match cli.command {
        Commands::Build { output, format } => {
            commands::build(&mut ctx, output, format).await?;
        }
        Commands::List => {
            commands::list_feeds(&ctx)?;
        }
    }

    Ok(())
}
