//! Per-player FIFO of live pieces.

use super::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of pieces a player may have on the board.
pub const MAX_PIECES: usize = 3;

/// Positions of one player's live pieces, oldest first.
///
/// The head is the piece that vanishes on the player's next placement
/// once the queue is full.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MoveQueue {
    positions: Vec<Position>,
}

impl MoveQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            positions: Vec::with_capacity(MAX_PIECES + 1),
        }
    }

    /// Live positions, oldest first.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of live pieces.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the player has no pieces on the board.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True when the next placement will evict the head.
    pub fn is_full(&self) -> bool {
        self.positions.len() >= MAX_PIECES
    }

    /// The oldest live piece.
    pub fn head(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    /// Whether `pos` is one of this queue's pieces.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Appends `pos` as the newest piece and returns the evicted head, if the
    /// queue overflowed.
    pub(crate) fn push(&mut self, pos: Position) -> Option<Position> {
        self.positions.push(pos);
        if self.positions.len() > MAX_PIECES {
            Some(self.positions.remove(0))
        } else {
            None
        }
    }
}

#[cfg(test)]
impl MoveQueue {
    pub(crate) fn positions_mut_for_test(&mut self) -> &mut Vec<Position> {
        &mut self.positions
    }
}
