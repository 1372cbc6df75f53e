//! Move legality and check detection.
//!
//! `is_valid_move` answers "may this piece go there right now": ownership,
//! piece geometry, blocking and castling preconditions. It does not look at
//! whether the move leaves the mover's own king in check; that rule is
//! enforced when the move is applied.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_castling::is_castling_legal;
use crate::moves::king_moves::is_castling_slide;
use crate::moves::piece_geometry::is_possible_move;

pub fn is_valid_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let Some(mover) = board.piece_at(from) else {
        return false;
    };
    if mover.color != color {
        return false;
    }

    let target = board.color_at(to);
    if target == Some(color) {
        return false;
    }
    let is_capture = target == Some(color.opposite());

    if !is_possible_move(Some(&mover), from, to, is_capture) {
        return false;
    }

    match mover.kind {
        PieceKind::Knight => true,
        PieceKind::King if is_castling_slide(from, to) => is_castling_legal(board, from, to, color),
        _ => path_is_clear(board, from, to),
    }
}

/// Squares strictly between `from` and `to` along a row, column or diagonal.
/// Empty when the two squares are not aligned or are adjacent.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (d_row, d_col) = displacement(from, to);
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    let steps = if aligned { d_row.abs().max(d_col.abs()) } else { 0 };

    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let (row, col) = (row_of(from) as i8, col_of(from) as i8);

    (1..steps).map(move |i| square_at((row + step_row * i) as u8, (col + step_col * i) as u8))
}

/// No piece of either color stands strictly between `from` and `to`.
#[inline]
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to).all(|sq| board.piece_at(sq).is_none())
}

/// Squares of `color.opposite()` pieces that could legally move onto `color`'s king.
pub fn attackers_of_king(board: &Board, color: Color) -> Vec<Square> {
    let king = board.king_square(color);
    let enemy = color.opposite();
    board
        .index()
        .live(enemy)
        .map(|(_, sq)| sq)
        .filter(|&sq| is_valid_move(board, sq, king, enemy))
        .collect()
}

pub fn is_check(board: &Board, color: Color) -> bool {
    let king = board.king_square(color);
    let enemy = color.opposite();
    board
        .index()
        .live(enemy)
        .any(|(_, sq)| is_valid_move(board, sq, king, enemy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::KING_SLOT;

    fn sq(row: u8, col: u8) -> Square {
        square_at(row, col)
    }

    #[test]
    fn opening_position_pieces_follow_their_geometry() {
        let board = Board::new_game();

        assert!(is_valid_move(&board, sq(1, 4), sq(3, 4), Color::White));
        assert!(is_valid_move(&board, sq(1, 4), sq(2, 4), Color::White));
        assert!(is_valid_move(&board, sq(0, 6), sq(2, 5), Color::White));
        assert!(is_valid_move(&board, sq(6, 3), sq(4, 3), Color::Black));
        assert!(is_valid_move(&board, sq(7, 1), sq(5, 2), Color::Black));

        // Sliders are boxed in by their own pawns.
        assert!(!is_valid_move(&board, sq(0, 0), sq(2, 0), Color::White));
        assert!(!is_valid_move(&board, sq(0, 2), sq(2, 4), Color::White));
        assert!(!is_valid_move(&board, sq(0, 3), sq(3, 3), Color::White));
        assert!(!is_valid_move(&board, sq(0, 4), sq(1, 4), Color::White));
    }

    #[test]
    fn ownership_is_enforced() {
        let board = Board::new_game();
        assert!(!is_valid_move(&board, sq(1, 4), sq(3, 4), Color::Black));
        assert!(!is_valid_move(&board, sq(4, 4), sq(5, 4), Color::White));
        assert!(!is_valid_move(&board, sq(0, 1), sq(1, 3), Color::White));
    }

    #[test]
    fn pawn_cannot_push_into_or_through_a_piece() {
        let board = Board::from_pieces(&[
            (sq(0, 4), Color::White, KING_SLOT),
            (sq(1, 3), Color::White, 11),
            (sq(2, 3), Color::Black, 11),
            (sq(7, 4), Color::Black, KING_SLOT),
        ])
        .expect("setup should be valid");

        assert!(!is_valid_move(&board, sq(1, 3), sq(2, 3), Color::White));
        assert!(!is_valid_move(&board, sq(1, 3), sq(3, 3), Color::White));
    }

    #[test]
    fn squares_between_walks_lines_only() {
        let a1 = sq(0, 0);
        assert_eq!(squares_between(a1, sq(0, 3)).collect::<Vec<_>>(), vec![sq(0, 1), sq(0, 2)]);
        assert_eq!(squares_between(a1, sq(3, 3)).collect::<Vec<_>>(), vec![sq(1, 1), sq(2, 2)]);
        assert_eq!(squares_between(sq(3, 3), a1).collect::<Vec<_>>(), vec![sq(2, 2), sq(1, 1)]);
        assert_eq!(squares_between(a1, sq(2, 1)).count(), 0);
        assert_eq!(squares_between(a1, sq(1, 1)).count(), 0);
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let board = Board::from_pieces(&[
            (sq(0, 4), Color::White, KING_SLOT),
            (sq(5, 4), Color::Black, 0),
            (sq(7, 0), Color::Black, KING_SLOT),
        ])
        .expect("setup should be valid");

        assert!(is_check(&board, Color::White));
        assert!(!is_check(&board, Color::Black));
        assert_eq!(attackers_of_king(&board, Color::White), vec![sq(5, 4)]);
    }

    #[test]
    fn blocked_rook_does_not_give_check() {
        let board = Board::from_pieces(&[
            (sq(0, 4), Color::White, KING_SLOT),
            (sq(2, 4), Color::White, 1),
            (sq(5, 4), Color::Black, 0),
            (sq(7, 0), Color::Black, KING_SLOT),
        ])
        .expect("setup should be valid");

        assert!(!is_check(&board, Color::White));
        assert!(attackers_of_king(&board, Color::White).is_empty());
    }

    #[test]
    fn queries_leave_the_board_untouched() {
        let board = Board::new_game();
        let before = board.clone();
        for _ in 0..3 {
            assert!(!is_check(&board, Color::White));
            assert!(!is_check(&board, Color::Black));
        }
        assert_eq!(board, before);
    }
}
