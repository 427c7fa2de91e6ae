//! Text rendering of a game snapshot.
//!
//! Everything shown here is derived from the engine's state on demand:
//! the piece about to vanish is drawn in lowercase, and a winning line is
//! wrapped in brackets.

use vanishing_tictactoe::{GameState, Player, Position, Square};

fn cell(state: &GameState, pos: Position) -> String {
    match state.board().get(pos) {
        Square::Empty => format!(" {} ", pos.to_index()),
        Square::Occupied(player) => {
            let symbol = if state.oldest_piece(player) == Some(pos) && state.winner().is_none() {
                player.to_string().to_lowercase()
            } else {
                player.to_string()
            };
            match state.winner() {
                Some(winner) if winner.highlights(pos) => format!("[{}]", symbol),
                _ => format!(" {} ", symbol),
            }
        }
    }
}

/// Draws the board as a 3x3 grid.
pub fn board(state: &GameState) -> String {
    Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&pos| cell(state, pos))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// One line per player naming the piece that vanishes on their next move.
pub fn at_risk(state: &GameState) -> String {
    [Player::X, Player::O]
        .iter()
        .map(|&player| match state.oldest_piece(player) {
            Some(pos) => format!("{} loses {} ({}) on their next move", player, pos, pos.to_index()),
            None => format!("{} has {} of 3 pieces", player, state.queue(player).len()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Board followed by status.
pub fn snapshot(state: &GameState) -> String {
    format!("{}\n\n{}", board(state), state.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanishing_tictactoe::GameEngine;

    #[test]
    fn test_empty_board_shows_indices() {
        let engine = GameEngine::new();
        assert_eq!(
            board(engine.state()),
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_oldest_piece_lowercase() {
        let engine = GameEngine::replay(&[0, 3, 1, 4, 5]).expect("legal sequence");
        let drawn = board(engine.state());
        assert!(drawn.starts_with(" x | X | 2 "));
        // O has only two pieces, so nothing of theirs is marked.
        assert!(drawn.contains(" O | O | X "));
    }

    #[test]
    fn test_winning_line_bracketed() {
        let engine = GameEngine::replay(&[0, 3, 1, 4, 2]).expect("legal sequence");
        let drawn = snapshot(engine.state());
        assert!(drawn.starts_with("[X]|[X]|[X]"));
        assert!(drawn.ends_with("Game over. Player X wins!"));
    }

    #[test]
    fn test_at_risk_lines() {
        let engine = GameEngine::replay(&[0, 3, 1, 4, 5]).expect("legal sequence");
        assert_eq!(
            at_risk(engine.state()),
            "X loses Top-left (0) on their next move\nO has 2 of 3 pieces"
        );
    }
}
