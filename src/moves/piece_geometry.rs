//! Per-kind movement dispatch.
//!
//! Answers whether a piece's own geometry permits a displacement, ignoring
//! every other piece on the board. Pure function of the displacement, the
//! capture flag and the piece's own color and move history.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_can_move;
use crate::moves::king_moves::king_can_move;
use crate::moves::knight_moves::knight_can_move;
use crate::moves::pawn_moves::pawn_can_move;
use crate::moves::queen_moves::queen_can_move;
use crate::moves::rook_moves::rook_can_move;

/// `None` is an empty square, which can never move.
#[inline]
pub fn is_possible_move(cell: Option<&Piece>, from: Square, to: Square, is_capture: bool) -> bool {
    let Some(piece) = cell else {
        return false;
    };

    match piece.kind {
        PieceKind::King => king_can_move(from, to, piece.has_moved),
        PieceKind::Queen => queen_can_move(from, to),
        PieceKind::Rook => rook_can_move(from, to),
        PieceKind::Bishop => bishop_can_move(from, to),
        PieceKind::Knight => knight_can_move(from, to),
        PieceKind::Pawn => pawn_can_move(piece.color, piece.has_moved, from, to, is_capture),
    }
}

#[cfg(test)]
mod tests {
    use super::is_possible_move;
    use crate::game_state::chess_types::{square_at, Color, Piece, PieceKind};

    #[test]
    fn empty_square_never_moves() {
        assert!(!is_possible_move(None, square_at(1, 1), square_at(2, 1), false));
    }

    #[test]
    fn dispatch_reaches_each_kind() {
        let d4 = square_at(3, 3);
        let cases = [
            (PieceKind::King, square_at(4, 4), square_at(5, 5)),
            (PieceKind::Queen, square_at(7, 7), square_at(5, 4)),
            (PieceKind::Rook, square_at(3, 0), square_at(4, 4)),
            (PieceKind::Bishop, square_at(0, 0), square_at(3, 4)),
            (PieceKind::Knight, square_at(5, 4), square_at(5, 5)),
            (PieceKind::Pawn, square_at(4, 3), square_at(5, 3)),
        ];

        for (kind, allowed, refused) in cases {
            let mut piece = Piece::new(kind, Color::White, 0);
            piece.has_moved = true;
            assert!(is_possible_move(Some(&piece), d4, allowed, false), "{kind:?} should reach");
            assert!(!is_possible_move(Some(&piece), d4, refused, false), "{kind:?} should not reach");
        }
    }
}
