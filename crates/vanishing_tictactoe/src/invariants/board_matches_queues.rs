//! Board/queue consistency: a cell is marked iff a queue lists it.

use super::super::{GameState, Player, Position, Square};
use super::Invariant;

/// Invariant: a cell holds player P's mark if and only if its position is
/// in P's move queue, and no position appears in both queues or twice in one.
pub struct BoardMatchesQueuesInvariant;

impl Invariant<GameState> for BoardMatchesQueuesInvariant {
    fn holds(state: &GameState) -> bool {
        let cells_agree = Position::ALL.iter().all(|&pos| {
            let in_x = state.queue(Player::X).contains(pos);
            let in_o = state.queue(Player::O).contains(pos);
            match state.board().get(pos) {
                Square::Empty => !in_x && !in_o,
                Square::Occupied(Player::X) => in_x && !in_o,
                Square::Occupied(Player::O) => in_o && !in_x,
            }
        });

        // Duplicates would slip past the membership test above.
        let no_duplicates = [Player::X, Player::O].iter().all(|&player| {
            state.queue(player).len() == state.board().count(player)
        });

        cells_agree && no_duplicates
    }

    fn description() -> &'static str {
        "Board marks match the move queues exactly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameEngine;

    #[test]
    fn test_new_game_holds() {
        assert!(BoardMatchesQueuesInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_holds_after_eviction() {
        let engine = GameEngine::replay(&[0, 3, 1, 4, 5, 8, 6]).expect("legal sequence");
        let state = engine.state();
        assert!(state.board().is_empty(Position::TopLeft));
        assert!(BoardMatchesQueuesInvariant::holds(state));
    }

    #[test]
    fn test_stray_mark_violates() {
        let mut state = GameState::default();
        state.place(Position::Center);
        state
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!BoardMatchesQueuesInvariant::holds(&state));
    }

    #[test]
    fn test_cleared_cell_still_queued_violates() {
        let mut state = GameState::default();
        state.place(Position::Center);
        state.board_mut().set(Position::Center, Square::Empty);
        assert!(!BoardMatchesQueuesInvariant::holds(&state));
    }

    #[test]
    fn test_duplicate_queue_entry_violates() {
        let mut state = GameState::default();
        state.place(Position::Center);
        state
            .queue_mut_for_test(Player::X)
            .positions_mut_for_test()
            .push(Position::Center);
        assert!(!BoardMatchesQueuesInvariant::holds(&state));
    }
}
