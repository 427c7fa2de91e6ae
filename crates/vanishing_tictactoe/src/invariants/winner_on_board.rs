//! Winner consistency: a recorded winning line is actually on the board.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: if a winner is recorded, all three cells of its line hold the
/// winner's mark.
pub struct WinnerOnBoardInvariant;

impl Invariant<GameState> for WinnerOnBoardInvariant {
    fn holds(state: &GameState) -> bool {
        match state.winner() {
            None => true,
            Some(winner) => winner
                .line
                .iter()
                .all(|&pos| state.board().get(pos) == Square::Occupied(winner.player)),
        }
    }

    fn description() -> &'static str {
        "Recorded winning line is held by the winner"
    }
}
