//! Queue bound invariant: no player ever has more than three pieces.

use super::super::{GameState, MAX_PIECES, Player};
use super::Invariant;

/// Invariant: every move queue holds at most [`MAX_PIECES`] positions.
pub struct QueueBoundInvariant;

impl Invariant<GameState> for QueueBoundInvariant {
    fn holds(state: &GameState) -> bool {
        [Player::X, Player::O]
            .iter()
            .all(|p| state.queue(*p).len() <= MAX_PIECES)
    }

    fn description() -> &'static str {
        "Each player has at most three pieces queued"
    }
}
