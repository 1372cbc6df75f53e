//! Canonical starting layout.
//!
//! Every piece gets a slot at setup: slots `0..8` are the back rank from the
//! A-file to the H-file, slots `8..16` the pawns in the same file order. The
//! slot therefore fixes both the piece kind and its home square.

use crate::game_state::chess_types::*;

pub const QUEENSIDE_ROOK_SLOT: SlotId = 0;
pub const KING_SLOT: SlotId = 4;
pub const KINGSIDE_ROOK_SLOT: SlotId = 7;

/// Piece kind owned by each slot.
pub const SLOT_KINDS: [PieceKind; SLOTS_PER_COLOR] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
];

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[inline]
pub const fn pawn_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Square the piece in `slot` occupies in the opening position.
#[inline]
pub const fn home_square(color: Color, slot: SlotId) -> Square {
    let row = if slot < 8 {
        back_rank(color)
    } else {
        pawn_rank(color)
    };
    square_at(row, slot % 8)
}

/// Slot of the rook that castles towards `direction` (`+1` kingside, `-1` queenside).
#[inline]
pub const fn castling_rook_slot(direction: i8) -> SlotId {
    if direction > 0 {
        KINGSIDE_ROOK_SLOT
    } else {
        QUEENSIDE_ROOK_SLOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_squares_mirror_between_colors() {
        assert_eq!(home_square(Color::White, KING_SLOT), square_at(0, 4));
        assert_eq!(home_square(Color::Black, KING_SLOT), square_at(7, 4));
        assert_eq!(home_square(Color::White, 8), square_at(1, 0));
        assert_eq!(home_square(Color::Black, 15), square_at(6, 7));
        assert_eq!(SLOT_KINDS[KINGSIDE_ROOK_SLOT as usize], PieceKind::Rook);
    }
}
