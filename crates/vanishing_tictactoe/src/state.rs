//! The complete game state owned by [`GameEngine`](crate::GameEngine).

use super::phases::{GameStatus, Phase, Winner};
use super::position::Position;
use super::queue::MoveQueue;
use super::types::{Board, Player, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Board, both move queues, the active player and the winner, if any.
///
/// Fields are read-only outside the crate; the engine is the only writer,
/// so the board and the queues always change together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameState {
    board: Board,
    x_queue: MoveQueue,
    o_queue: MoveQueue,
    active: Player,
    winner: Option<Winner>,
}

impl GameState {
    /// Empty board, empty queues, `starting` to move, no winner.
    pub fn new(starting: Player) -> Self {
        Self {
            board: Board::new(),
            x_queue: MoveQueue::new(),
            o_queue: MoveQueue::new(),
            active: starting,
            winner: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns `player`'s live pieces, oldest first.
    pub fn queue(&self, player: Player) -> &MoveQueue {
        match player {
            Player::X => &self.x_queue,
            Player::O => &self.o_queue,
        }
    }

    /// The player entitled to move next (unchanged once the game is won).
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// The recorded winner.
    pub fn winner(&self) -> Option<&Winner> {
        self.winner.as_ref()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    /// Turn or result summary.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::Turn(self.active),
        }
    }

    /// The piece `player` loses on their next placement, if their queue is full.
    pub fn oldest_piece(&self, player: Player) -> Option<Position> {
        let queue = self.queue(player);
        if queue.is_full() { queue.head() } else { None }
    }

    fn queue_mut(&mut self, player: Player) -> &mut MoveQueue {
        match player {
            Player::X => &mut self.x_queue,
            Player::O => &mut self.o_queue,
        }
    }

    /// Places the active player's piece and evicts their oldest if needed.
    ///
    /// Unchecked: the caller has validated the move. Returns the vacated cell.
    pub(crate) fn place(&mut self, pos: Position) -> Option<Position> {
        let player = self.active;
        self.board.set(pos, Square::Occupied(player));
        let evicted = self.queue_mut(player).push(pos);
        if let Some(old) = evicted {
            self.board.set(old, Square::Empty);
        }
        evicted
    }

    /// Hands the turn to the opponent.
    pub(crate) fn advance_turn(&mut self) {
        self.active = self.active.opponent();
    }

    /// Records the winner.
    pub(crate) fn set_winner(&mut self, winner: Winner) {
        self.winner = Some(winner);
    }
}

#[cfg(test)]
impl GameState {
    /// Mutable board access for corrupting states in tests.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Mutable queue access for corrupting states in tests.
    pub(crate) fn queue_mut_for_test(&mut self, player: Player) -> &mut MoveQueue {
        self.queue_mut(player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_updates_board_and_queue_together() {
        let mut state = GameState::default();
        assert_eq!(state.place(Position::Center), None);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.queue(Player::X).positions(), &[Position::Center]);
        assert!(state.queue(Player::O).is_empty());
    }

    #[test]
    fn test_place_evicts_oldest() {
        let mut state = GameState::default();
        state.place(Position::TopLeft);
        state.place(Position::Center);
        state.place(Position::MiddleRight);
        assert_eq!(state.oldest_piece(Player::X), Some(Position::TopLeft));

        assert_eq!(state.place(Position::BottomLeft), Some(Position::TopLeft));
        assert!(state.board().is_empty(Position::TopLeft));
        assert_eq!(state.board().count(Player::X), 3);
        assert_eq!(state.oldest_piece(Player::X), Some(Position::Center));
    }

    #[test]
    fn test_oldest_piece_none_until_full() {
        let mut state = GameState::default();
        state.place(Position::TopLeft);
        state.place(Position::Center);
        assert_eq!(state.oldest_piece(Player::X), None);
        assert_eq!(state.oldest_piece(Player::O), None);
    }

    #[test]
    fn test_status_and_phase() {
        let mut state = GameState::new(Player::O);
        assert_eq!(state.status(), GameStatus::Turn(Player::O));
        assert_eq!(state.phase(), Phase::InProgress);

        let winner = Winner::new(
            Player::O,
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        state.set_winner(winner);
        assert_eq!(state.status(), GameStatus::Won(winner));
        assert_eq!(state.phase(), Phase::Finished);
        assert_eq!(state.status().to_string(), "Game over. Player O wins!");
    }
}
