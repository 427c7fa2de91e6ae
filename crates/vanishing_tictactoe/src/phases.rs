//! Game phase, winner record and derived status.

use super::position::Position;
use super::types::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Phase of the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// A winner is recorded; only a reset leaves this phase.
    Finished,
}

/// The player who completed a line, and the line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Winner {
    /// The winning player.
    pub player: Player,
    /// The three cells of the winning line.
    pub line: [Position; 3],
}

impl Winner {
    /// Creates a winner record.
    pub fn new(player: Player, line: [Position; 3]) -> Self {
        Self { player, line }
    }

    /// Returns the winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the winning line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// The winning line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether `pos` is part of the winning line, for highlighting.
    pub fn highlights(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Summary of whose turn it is or who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GameStatus {
    /// The game is in progress and this player moves next.
    Turn(Player),
    /// The game is over.
    Won(Winner),
}

impl GameStatus {
    /// Returns the winner if the game is over.
    pub fn winner(&self) -> Option<&Winner> {
        match self {
            GameStatus::Won(winner) => Some(winner),
            GameStatus::Turn(_) => None,
        }
    }

    /// Returns the phase this status belongs to.
    pub fn phase(&self) -> Phase {
        match self {
            GameStatus::Turn(_) => Phase::InProgress,
            GameStatus::Won(_) => Phase::Finished,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Turn(player) => write!(f, "Player {}'s turn", player),
            GameStatus::Won(winner) => write!(f, "Game over. Player {} wins!", winner.player),
        }
    }
}
