use crate::game_state::chess_types::Square;

pub const KNIGHT_JUMPS: [u64; 64] = generate_knight_jumps();

#[inline]
pub const fn knight_jumps(square: Square) -> u64 {
    KNIGHT_JUMPS[square as usize]
}

/// `(|d_row|, |d_col|)` is `(1, 2)` or `(2, 1)`. Knights ignore blockers.
#[inline]
pub const fn knight_can_move(from: Square, to: Square) -> bool {
    knight_jumps(from) & (1u64 << to) != 0
}

const fn generate_knight_jumps() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = (sq % 8) as i32;
        let row = (sq / 8) as i32;
        let mut jumps = 0u64;

        jumps |= set_if_valid(row + 2, col + 1);
        jumps |= set_if_valid(row + 1, col + 2);
        jumps |= set_if_valid(row - 1, col + 2);
        jumps |= set_if_valid(row - 2, col + 1);
        jumps |= set_if_valid(row - 2, col - 1);
        jumps |= set_if_valid(row - 1, col - 2);
        jumps |= set_if_valid(row + 1, col - 2);
        jumps |= set_if_valid(row + 2, col - 1);

        table[sq] = jumps;
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

#[cfg(test)]
mod tests {
    use super::{knight_can_move, KNIGHT_JUMPS};
    use crate::game_state::chess_types::square_at;

    #[test]
    fn centre_knight_has_eight_jumps() {
        assert_eq!(KNIGHT_JUMPS[square_at(3, 3) as usize].count_ones(), 8);
        assert_eq!(KNIGHT_JUMPS[0].count_ones(), 2);
    }

    #[test]
    fn only_l_shapes_are_accepted() {
        let b1 = square_at(0, 1);
        assert!(knight_can_move(b1, square_at(2, 2)));
        assert!(knight_can_move(b1, square_at(1, 3)));
        assert!(!knight_can_move(b1, square_at(2, 1)));
        assert!(!knight_can_move(b1, square_at(2, 3)));
    }
}
