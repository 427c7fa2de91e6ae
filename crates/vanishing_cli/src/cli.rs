//! Command-line interface for vanishing tic-tac-toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vanishing_tictactoe::Player;

/// Vanishing tic-tac-toe - three pieces each, the oldest one vanishes
#[derive(Parser, Debug)]
#[command(name = "vanishing")]
#[command(about = "Tic-tac-toe where your fourth piece erases your first", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Player who moves first (X or O), overriding the config file
    #[arg(long, global = true, value_parser = parse_player)]
    pub starting_player: Option<Player>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a sequence of moves and print the result
    Replay {
        /// Comma-separated cell indices, e.g. "0,3,1,4,2"
        moves: String,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON Schema of the game state snapshot
    Schema,
}

fn parse_player(s: &str) -> Result<Player, String> {
    Player::from_symbol(s).ok_or_else(|| format!("expected X or O, got {:?}", s))
}

/// Parses a comma-separated move list.
pub fn parse_moves(s: &str) -> Result<Vec<usize>, std::num::ParseIntError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>)
        .collect()
}
