//! Terminal driver for the vanishing tic-tac-toe engine.
//!
//! The engine knows nothing about terminals; this crate reads input,
//! forwards moves, and draws whatever state the engine reports.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod session;

pub use cli::{Cli, Command, parse_moves};
pub use config::{ConfigError, VanishingConfig};
pub use render::{at_risk, board, snapshot};
pub use session::{Input, PlaySession};

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, instrument};
use vanishing_tictactoe::{GameEngine, GameState};

/// Applies `moves` to a fresh engine and writes the final board or JSON.
///
/// # Errors
///
/// Fails on an unparsable move list or the first move the engine rejects.
#[instrument(skip(config, out))]
pub fn replay(config: &VanishingConfig, moves: &str, json: bool, mut out: impl Write) -> Result<()> {
    let indices = parse_moves(moves).with_context(|| format!("Invalid move list {:?}", moves))?;
    let mut engine = GameEngine::with_starting_player(*config.starting_player());
    engine.play_all(&indices).context("Replay stopped")?;
    info!(moves = indices.len(), status = %engine.status(), "Replay finished");

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(engine.state())?)?;
    } else {
        writeln!(out, "{}", snapshot(engine.state()))?;
    }
    Ok(())
}

/// Writes the JSON Schema of [`GameState`].
pub fn schema(mut out: impl Write) -> Result<()> {
    let schema = schemars::schema_for!(GameState);
    writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
    Ok(())
}

/// Runs an interactive game until the player quits or input ends.
pub fn play(config: &VanishingConfig, input: impl BufRead, output: impl Write) -> Result<()> {
    let engine = GameEngine::with_starting_player(*config.starting_player());
    PlaySession::new(engine, input, output)
        .run()
        .context("Terminal I/O failed")
}
