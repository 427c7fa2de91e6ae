//! The rule engine: the single owner of a [`GameState`].

use super::contracts::{Contract, MoveContract};
use super::error::{MoveError, ReplayError};
use super::phases::{GameStatus, Phase};
use super::position::Position;
use super::rules::check_winner;
use super::state::GameState;
use super::types::Player;
use tracing::{debug, info, instrument, warn};

/// Vanishing tic-tac-toe engine.
///
/// Owns exactly one [`GameState`] and mutates it only through
/// [`apply_move`](Self::apply_move) and [`reset`](Self::reset). Each call is
/// one complete transition; callers never observe a half-applied move.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    starting: Player,
}

impl GameEngine {
    /// Creates an engine where X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_starting_player(Player::X)
    }

    /// Creates an engine whose games start with `starting`.
    #[instrument]
    pub fn with_starting_player(starting: Player) -> Self {
        Self {
            state: GameState::new(starting),
            starting,
        }
    }

    /// Builds an engine by playing `indices` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and reports which one it was.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, ReplayError> {
        let mut engine = Self::new();
        engine.play_all(indices)?;
        Ok(engine)
    }

    /// Plays `indices` in order on this engine.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move; moves before it stay applied.
    #[instrument(skip(self))]
    pub fn play_all(&mut self, indices: &[usize]) -> Result<&GameState, ReplayError> {
        for (i, &index) in indices.iter().enumerate() {
            self.apply_move(index)
                .map_err(|e| ReplayError::new(i + 1, index, e))?;
        }
        Ok(&self.state)
    }

    /// Places the active player's piece at `index`.
    ///
    /// A valid move places the piece, evicts the player's oldest piece if
    /// they now have four, then checks for a win on the resulting board.
    /// A win freezes the game with the winner still marked active; otherwise
    /// the turn passes.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the state untouched, if the game is
    /// finished, `index` is outside 0-8, or the cell is occupied.
    #[instrument(skip(self), fields(player = %self.state.active_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<&GameState, MoveError> {
        let pos = match MoveContract::pre(&self.state, &index) {
            Ok(pos) => pos,
            Err(e) => {
                warn!(error = %e, "Move rejected");
                return Err(e);
            }
        };

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let player = self.state.active_player();
        debug!(%pos, "Placing piece");
        if let Some(evicted) = self.state.place(pos) {
            debug!(%evicted, "Oldest piece vanished");
        }

        match check_winner(self.state.board()) {
            Some(winner) => {
                info!(%player, line = ?winner.indices(), "Game won");
                self.state.set_winner(winner);
            }
            None => self.state.advance_turn(),
        }

        #[cfg(debug_assertions)]
        debug_assert!(
            MoveContract::post(&before, &self.state).is_ok(),
            "Move postconditions violated"
        );

        Ok(&self.state)
    }

    /// Restores the initial state with the designated starting player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        info!(starting = %self.starting, "Game reset");
        self.state = GameState::new(self.starting);
        &self.state
    }

    /// Read-only snapshot of the game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The player whose games start first.
    pub fn starting_player(&self) -> Player {
        self.starting
    }

    /// The piece `player` loses on their next placement, if any.
    pub fn oldest_piece(&self, player: Player) -> Option<Position> {
        self.state.oldest_piece(player)
    }

    /// Whose turn it is, or who won.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Cells the active player may play; empty once the game is finished.
    pub fn valid_moves(&self) -> Vec<Position> {
        match self.phase() {
            Phase::InProgress => Position::valid_moves(self.state.board()),
            Phase::Finished => Vec::new(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_first_move() {
        let mut engine = GameEngine::new();
        let state = engine.apply_move(4).expect("legal move");
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.active_player(), Player::O);
    }

    #[test]
    fn test_starting_player_respected_by_reset() {
        let mut engine = GameEngine::with_starting_player(Player::O);
        engine.apply_move(0).expect("legal move");
        assert_eq!(engine.state().queue(Player::O).positions(), &[Position::TopLeft]);

        let state = engine.reset();
        assert_eq!(state.active_player(), Player::O);
        assert_eq!(engine.starting_player(), Player::O);
    }

    #[test]
    fn test_valid_moves_shrinks_then_empties() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.valid_moves().len(), 9);
        engine.play_all(&[0, 3]).expect("legal moves");
        assert_eq!(engine.valid_moves().len(), 7);
        engine.play_all(&[1, 4, 2]).expect("legal moves");
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_play_all_reports_offending_move() {
        let mut engine = GameEngine::new();
        let err = engine.play_all(&[0, 1, 1]).unwrap_err();
        assert_eq!(err.move_number, 3);
        assert_eq!(err.index, 1);
        assert_eq!(err.source, MoveError::CellOccupied(Position::TopCenter));
        // Moves before the rejection stay applied.
        assert_eq!(engine.state().active_player(), Player::X);
    }

    #[test]
    fn test_win_built_from_eviction() {
        // X: 3, 0, 1 then 2 evicts 3 and completes the top row.
        let mut engine = GameEngine::replay(&[3, 4, 0, 8, 1, 6]).expect("legal sequence");
        let state = engine.apply_move(2).expect("legal move");
        assert!(state.board().is_empty(Position::MiddleLeft));
        let winner = state.winner().expect("top row");
        assert_eq!(winner.player, Player::X);
        assert_eq!(winner.indices(), [0, 1, 2]);
        assert_eq!(state.active_player(), Player::X);
    }

    #[test]
    fn test_evicted_piece_cannot_complete_a_line() {
        // X holds 0, 4, 5; playing 8 would make the 0-4-8 diagonal, but 0 vanishes first.
        let mut engine = GameEngine::replay(&[0, 1, 4, 2, 5, 6]).expect("legal sequence");
        let state = engine.apply_move(8).expect("legal move");
        assert!(state.winner().is_none());
        assert!(state.board().is_empty(Position::TopLeft));
        assert_eq!(
            state.queue(Player::X).positions(),
            &[Position::Center, Position::MiddleRight, Position::BottomRight]
        );
        assert_eq!(state.active_player(), Player::O);
    }
}
