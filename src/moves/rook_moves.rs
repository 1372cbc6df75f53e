//! Straight-line ray tables.
//!
//! `ROOK_RAYS[sq]` holds every square on the same row or column as `sq`,
//! ignoring other pieces. Blocking is the board's job.

use crate::game_state::chess_types::Square;

pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();

#[inline]
pub const fn rook_can_move(from: Square, to: Square) -> bool {
    ROOK_RAYS[from as usize] & (1u64 << to) != 0
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray(sq_i, 0, 1);
        rays |= trace_ray(sq_i, 0, -1);
        rays |= trace_ray(sq_i, 1, 0);
        rays |= trace_ray(sq_i, -1, 0);

        table[sq] = rays;
        sq += 1;
    }

    table
}

pub(crate) const fn trace_ray(square: i32, row_step: i32, col_step: i32) -> u64 {
    let mut row = (square / 8) + row_step;
    let mut col = (square % 8) + col_step;
    let mut ray = 0u64;

    while row >= 0 && row < 8 && col >= 0 && col < 8 {
        ray |= 1u64 << (row * 8 + col);
        row += row_step;
        col += col_step;
    }

    ray
}

#[cfg(test)]
mod tests {
    use super::{rook_can_move, ROOK_RAYS};
    use crate::game_state::chess_types::square_at;

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        assert_eq!(ROOK_RAYS[square_at(3, 3) as usize].count_ones(), 14);
    }

    #[test]
    fn rook_moves_along_rows_and_columns_only() {
        let a1 = square_at(0, 0);
        assert!(rook_can_move(a1, square_at(7, 0)));
        assert!(rook_can_move(a1, square_at(0, 7)));
        assert!(!rook_can_move(a1, square_at(1, 1)));
        assert!(!rook_can_move(a1, a1));
    }
}
