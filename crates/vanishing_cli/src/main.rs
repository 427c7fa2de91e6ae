//! Vanishing tic-tac-toe - command-line driver

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vanishing_cli::{Cli, Command, VanishingConfig};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = VanishingConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_starting_player(cli.starting_player);

    init_tracing(config.log_filter());
    debug!(?config, "Configuration resolved");

    let stdout = std::io::stdout();
    match cli.command {
        Command::Play => vanishing_cli::play(&config, std::io::stdin().lock(), stdout.lock()),
        Command::Replay { moves, json } => vanishing_cli::replay(&config, &moves, json, stdout.lock()),
        Command::Schema => vanishing_cli::schema(stdout.lock()),
    }
}

/// Logs go to stderr so stdout carries only the game.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}
