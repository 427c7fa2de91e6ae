//! Vanishing tic-tac-toe - rule engine
//!
//! Tic-tac-toe where each player keeps at most three pieces on the board.
//! Placing a fourth piece makes that player's oldest piece vanish.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`], [`MoveQueue`]
//! - **Rules**: pure win detection over a board ([`check_winner`])
//! - **Contracts**: preconditions and postconditions for each placement
//! - **Invariants**: properties every reachable [`GameState`] satisfies
//! - **Engine**: [`GameEngine`], the only writer of a [`GameState`]
//!
//! # Example
//!
//! ```
//! use vanishing_tictactoe::{GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index)?;
//! }
//! let winner = engine.state().winner().expect("top row");
//! assert_eq!(winner.player, Player::X);
//! assert_eq!(winner.indices(), [0, 1, 2]);
//! # Ok::<(), vanishing_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod error;
mod invariants;
mod kani_support;
mod phases;
mod position;
mod queue;
mod rules;
mod state;
mod types;

pub use contracts::{
    CellInRange, CellIsEmpty, Contract, FifoEviction, GameNotFinished, LegalMove, MoveContract,
};
pub use engine::GameEngine;
pub use error::{MoveError, ReplayError};
pub use invariants::{
    BoardMatchesQueuesInvariant, Invariant, InvariantSet, InvariantViolation,
    QueueBoundInvariant, VanishingInvariants, WinnerOnBoardInvariant,
};
pub use phases::{GameStatus, Phase, Winner};
pub use position::Position;
pub use queue::{MAX_PIECES, MoveQueue};
pub use rules::{LINES, check_winner};
pub use state::GameState;
pub use types::{Board, Player, Square};
