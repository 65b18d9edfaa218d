//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn board_from(marks: [Option<Player>; 9]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            if let Some(player) = mark {
                board.set(pos, Square::Occupied(player));
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        #[rustfmt::skip]
        let board = board_from([
            Some(X), Some(O), Some(X),
            Some(O), Some(X), Some(X),
            Some(O), Some(X), Some(O),
        ]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        use Player::{O, X};
        // X X X / O O X / X O O
        #[rustfmt::skip]
        let board = board_from([
            Some(X), Some(X), Some(X),
            Some(O), Some(O), Some(X),
            Some(X), Some(O), Some(O),
        ]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
