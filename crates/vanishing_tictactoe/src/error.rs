//! Rejected-move errors.
//!
//! None of these are fatal: a rejected move leaves the game untouched and
//! the caller is free to keep playing.

use super::Position;
use derive_more::{Display, Error};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Display)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidCellIndex(usize),

    /// The cell already holds a piece.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// A winner is recorded; only a reset accepts play again.
    #[display("Game is already over")]
    GameAlreadyFinished,
}

impl std::error::Error for MoveError {}

/// A move in a replayed sequence was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Move {} (cell {}) rejected: {}", move_number, index, source)]
pub struct ReplayError {
    /// One-based position of the move in the sequence.
    pub move_number: usize,
    /// The cell index that was played.
    pub index: usize,
    /// Why the engine rejected it.
    pub source: MoveError,
}

impl ReplayError {
    /// Creates a replay error.
    pub fn new(move_number: usize, index: usize, source: MoveError) -> Self {
        Self {
            move_number,
            index,
            source,
        }
    }
}
