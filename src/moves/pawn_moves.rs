//! Pawn displacement geometry.
//!
//! Captures come from per-color diagonal tables; pushes are checked from the
//! displacement. A two-row push is geometrically fine for an unmoved pawn
//! even if the square it passes over is occupied; the board walks that path.

use crate::game_state::chess_types::{displacement, Color, Square};

pub const WHITE_PAWN_CAPTURES: [u64; 64] = generate_white_pawn_captures();
pub const BLACK_PAWN_CAPTURES: [u64; 64] = generate_black_pawn_captures();

#[inline]
pub const fn pawn_captures(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_CAPTURES[square as usize],
        Color::Black => BLACK_PAWN_CAPTURES[square as usize],
    }
}

pub const fn pawn_can_move(
    color: Color,
    has_moved: bool,
    from: Square,
    to: Square,
    is_capture: bool,
) -> bool {
    if is_capture {
        return pawn_captures(color, from) & (1u64 << to) != 0;
    }

    let (d_row, d_col) = displacement(from, to);
    if d_col != 0 {
        return false;
    }

    let direction = color.pawn_direction();
    if has_moved {
        d_row == direction
    } else {
        d_row == direction || d_row == 2 * direction
    }
}

const fn generate_white_pawn_captures() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut captures = 0u64;

        if row < 7 {
            if col > 0 {
                captures |= 1u64 << (sq + 7);
            }
            if col < 7 {
                captures |= 1u64 << (sq + 9);
            }
        }

        table[sq] = captures;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_captures() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = sq % 8;
        let row = sq / 8;
        let mut captures = 0u64;

        if row > 0 {
            if col > 0 {
                captures |= 1u64 << (sq - 9);
            }
            if col < 7 {
                captures |= 1u64 << (sq - 7);
            }
        }

        table[sq] = captures;
        sq += 1;
    }

    table
}
