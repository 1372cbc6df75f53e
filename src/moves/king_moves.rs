//! King displacement geometry.
//!
//! One step in any direction comes from a precomputed adjacency table. An
//! unmoved king may also slide two columns along its row; whether that slide
//! is an actual castle is decided by the board.

use crate::game_state::chess_types::{displacement, Square};

pub const KING_STEPS: [u64; 64] = generate_king_steps();

#[inline]
pub const fn king_steps(square: Square) -> u64 {
    KING_STEPS[square as usize]
}

/// Same row, two columns apart: the king's half of a castle.
#[inline]
pub const fn is_castling_slide(from: Square, to: Square) -> bool {
    let (d_row, d_col) = displacement(from, to);
    d_row == 0 && (d_col == 2 || d_col == -2)
}

#[inline]
pub const fn king_can_move(from: Square, to: Square, has_moved: bool) -> bool {
    if !has_moved && is_castling_slide(from, to) {
        return true;
    }
    king_steps(from) & (1u64 << to) != 0
}

const fn generate_king_steps() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = (sq % 8) as i32;
        let row = (sq / 8) as i32;
        let mut steps = 0u64;

        steps |= set_if_valid(row - 1, col - 1);
        steps |= set_if_valid(row - 1, col);
        steps |= set_if_valid(row - 1, col + 1);
        steps |= set_if_valid(row, col - 1);
        steps |= set_if_valid(row, col + 1);
        steps |= set_if_valid(row + 1, col - 1);
        steps |= set_if_valid(row + 1, col);
        steps |= set_if_valid(row + 1, col + 1);

        table[sq] = steps;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    1u64 << ((row as usize) * 8 + (col as usize))
}
