//! Property-based tests over arbitrary move sequences.
//!
//! Sequences include out-of-range indices and repeated cells, so rejected
//! moves are exercised alongside legal ones.

use proptest::prelude::*;
use vanishing_tictactoe::{
    GameEngine, GameState, InvariantSet, MAX_PIECES, MoveError, Phase, Player, Position, Square,
    VanishingInvariants,
};

fn moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..12, 0..60)
}

fn starting() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Every reachable state keeps queues bounded and in sync with the board.
    #[test]
    fn prop_invariants_hold(first in starting(), seq in moves()) {
        let mut engine = GameEngine::with_starting_player(first);
        for index in seq {
            let _ = engine.apply_move(index);
            let state = engine.state();
            prop_assert!(VanishingInvariants::check_all(state).is_ok());
            for player in [Player::X, Player::O] {
                prop_assert!(state.queue(player).len() <= MAX_PIECES);
                for pos in Position::ALL {
                    let marked = state.board().get(pos) == Square::Occupied(player);
                    prop_assert_eq!(marked, state.queue(player).contains(pos));
                }
            }
        }
    }

    /// A rejected move never changes the state, and accepted ones follow the rules.
    #[test]
    fn prop_transitions(first in starting(), seq in moves()) {
        let mut engine = GameEngine::with_starting_player(first);
        for index in seq {
            let before: GameState = engine.state().clone();
            let mover = before.active_player();
            match engine.apply_move(index) {
                Err(MoveError::GameAlreadyFinished) => {
                    prop_assert_eq!(before.phase(), Phase::Finished);
                    prop_assert_eq!(engine.state(), &before);
                }
                Err(MoveError::InvalidCellIndex(i)) => {
                    prop_assert!(i > 8);
                    prop_assert_eq!(engine.state(), &before);
                }
                Err(MoveError::CellOccupied(pos)) => {
                    prop_assert!(!before.board().is_empty(pos));
                    prop_assert_eq!(engine.state(), &before);
                }
                Ok(after) => {
                    let pos = Position::from_index(index).expect("accepted index is on the board");
                    prop_assert_eq!(after.board().get(pos), Square::Occupied(mover));

                    // Eviction removes exactly the previous head.
                    match before.oldest_piece(mover) {
                        Some(head) => {
                            prop_assert!(after.board().is_empty(head));
                            prop_assert!(!after.queue(mover).contains(head));
                            prop_assert_eq!(
                                &after.queue(mover).positions()[..MAX_PIECES - 1],
                                &before.queue(mover).positions()[1..]
                            );
                        }
                        None => prop_assert_eq!(
                            after.queue(mover).len(),
                            before.queue(mover).len() + 1
                        ),
                    }
                    prop_assert_eq!(after.queue(mover.opponent()), before.queue(mover.opponent()));

                    // Turn passes unless the move won.
                    match after.winner() {
                        Some(winner) => {
                            prop_assert_eq!(winner.player, mover);
                            prop_assert_eq!(after.active_player(), mover);
                        }
                        None => prop_assert_eq!(after.active_player(), mover.opponent()),
                    }
                }
            }
        }
    }

    /// Reset yields the initial state no matter what came before.
    #[test]
    fn prop_reset_restores_initial_state(first in starting(), seq in moves()) {
        let mut engine = GameEngine::with_starting_player(first);
        let _ = engine.play_all(&seq);
        let state = engine.reset();
        prop_assert_eq!(state, &GameState::new(first));
        prop_assert_eq!(engine.oldest_piece(Player::X), None);
        prop_assert_eq!(engine.oldest_piece(Player::O), None);
    }

    /// The at-risk piece is reported exactly when the queue is full.
    #[test]
    fn prop_oldest_piece_only_when_full(seq in moves()) {
        let mut engine = GameEngine::new();
        for index in seq {
            let _ = engine.apply_move(index);
            for player in [Player::X, Player::O] {
                let queue = engine.state().queue(player);
                let expected = if queue.len() == MAX_PIECES { queue.head() } else { None };
                prop_assert_eq!(engine.oldest_piece(player), expected);
            }
        }
    }
}
