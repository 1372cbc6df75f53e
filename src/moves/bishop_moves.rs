use crate::game_state::chess_types::Square;
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

/// `|d_row| == |d_col|`, nonzero.
#[inline]
pub const fn bishop_can_move(from: Square, to: Square) -> bool {
    BISHOP_RAYS[from as usize] & (1u64 << to) != 0
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray(sq_i, 1, 1);
        rays |= trace_ray(sq_i, -1, 1);
        rays |= trace_ray(sq_i, 1, -1);
        rays |= trace_ray(sq_i, -1, -1);

        table[sq] = rays;
        sq += 1;
    }

    table
}
