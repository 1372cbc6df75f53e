use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::BISHOP_RAYS;
use crate::moves::rook_moves::ROOK_RAYS;

pub const QUEEN_RAYS: [u64; 64] = generate_queen_rays();

#[inline]
pub const fn queen_can_move(from: Square, to: Square) -> bool {
    QUEEN_RAYS[from as usize] & (1u64 << to) != 0
}

const fn generate_queen_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = BISHOP_RAYS[sq] | ROOK_RAYS[sq];
        sq += 1;
    }

    table
}
