mod cli;
mod commands;
mod config;
mod observability;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use output::print_error;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv()
        && !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
    {
        eprintln!("Warning: Failed to load .env file: {e}");
    }

    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::resolve(&cli)?;
    observability::init_tracing(cfg.log_level());
    cfg.log_resolved();

    match &cli.command {
        Commands::Keys => commands::keys::keys(&cfg.provider).await?,
        Commands::Verify(args) => commands::verify::verify(&cfg.provider, args).await?,
        Commands::Issuer => commands::issuer::issuer(&cfg.provider)?,
    }

    Ok(())
}
