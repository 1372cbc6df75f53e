//! Castling legality.
//!
//! Called by `is_valid_move` for an unmoved king sliding two columns. The
//! rook is found through the coordinate index (slot 0 queenside, slot 7
//! kingside). The king's slide is simulated on scratch copies so the live
//! board is never touched.

use crate::game_state::chess_rules::castling_rook_slot;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_check, is_valid_move, squares_between};

/// Square the castling rook lands on: next to the king's destination, on
/// the side the king came from.
#[inline]
pub fn castling_rook_destination(king_to: Square, direction: i8) -> Square {
    square_at(row_of(king_to), (col_of(king_to) as i8 - direction) as u8)
}

pub fn is_castling_legal(board: &Board, king_from: Square, king_to: Square, color: Color) -> bool {
    let direction = displacement(king_from, king_to).1.signum();

    let Some(rook_from) = board.coordinate_of(color, castling_rook_slot(direction)) else {
        return false;
    };
    match board.piece_at(rook_from) {
        Some(rook) if rook.kind == PieceKind::Rook && !rook.has_moved => {}
        _ => return false,
    }
    if row_of(rook_from) != row_of(king_from) {
        return false;
    }

    if squares_between(king_from, rook_from).any(|sq| board.piece_at(sq).is_some()) {
        return false;
    }

    if is_check(board, color) {
        return false;
    }

    let rook_to = castling_rook_destination(king_to, direction);
    if !is_valid_move(board, rook_from, rook_to, color) {
        return false;
    }

    // The king crosses the rook's destination on its way over.
    !king_would_be_in_check(board, king_from, rook_to, color)
        && !king_would_be_in_check(board, king_from, king_to, color)
}

fn king_would_be_in_check(board: &Board, king_from: Square, king_to: Square, color: Color) -> bool {
    let mut scratch = board.clone();
    scratch.relocate(king_from, king_to);
    is_check(&scratch, color)
}
