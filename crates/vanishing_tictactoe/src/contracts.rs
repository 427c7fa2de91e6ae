//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions decide whether a move is accepted;
//! postconditions confirm the transition kept every invariant.

use super::error::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, VanishingInvariants};
use super::{GameState, MAX_PIECES, Phase, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Validated form of the action, produced by a passing precondition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: no winner has been recorded.
pub struct GameNotFinished;

impl GameNotFinished {
    /// Rejects moves once the game is finished.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.phase() == Phase::Finished {
            Err(MoveError::GameAlreadyFinished)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell index addresses the board.
pub struct CellInRange;

impl CellInRange {
    /// Converts the index to a [`Position`].
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::InvalidCellIndex(index))
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition: game running, index in range, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, in that order.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &GameState) -> Result<Position, MoveError> {
        GameNotFinished::check(state)?;
        let pos = CellInRange::check(index)?;
        CellIsEmpty::check(pos, state)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a placement.
///
/// Postconditions:
/// - every invariant in [`VanishingInvariants`] holds
/// - the mover's queue is the old queue, minus its head if it was full,
///   plus exactly one new tail
/// - the opponent's queue is untouched
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    type Checked = Position;

    fn pre(state: &GameState, index: &usize) -> Result<Position, MoveError> {
        LegalMove::check(*index, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match VanishingInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if !FifoEviction::holds(before, after) {
            violations.push(InvariantViolation::new(FifoEviction::DESCRIPTION));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for v in &violations {
                warn!(violation = %v, "Move postcondition failed");
            }
            Err(violations)
        }
    }
}

/// Transition property: only the mover's oldest piece can vanish.
pub struct FifoEviction;

impl FifoEviction {
    const DESCRIPTION: &'static str = "Placement evicts only the mover's oldest piece";

    /// Compares the queues before and after one placement.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mover = before.active_player();
        let prev = before.queue(mover).positions();
        let next = after.queue(mover).positions();

        let kept = if prev.len() == MAX_PIECES {
            &prev[1..]
        } else {
            prev
        };

        next.len() == kept.len() + 1
            && next[..kept.len()] == *kept
            && before.queue(mover.opponent()) == after.queue(mover.opponent())
    }
}
