//! Checkmate evaluation.
//!
//! A side in check is mated when its king has no safe neighbouring square and
//! the check cannot be answered by capturing or blocking a lone attacker.
//! Every hypothetical reply is tried on its own scratch copy of the board.

use std::iter;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::trial_move_is_legal;
use crate::move_generation::legal_move_checks::{attackers_of_king, is_valid_move, squares_between};
use crate::moves::king_moves::king_steps;

/// Neighbouring squares `color`'s king can legally step to.
pub fn king_escape_squares(board: &Board, color: Color) -> Vec<Square> {
    let king = board.king_square(color);
    let mut escapes = Vec::with_capacity(8);

    let mut steps = king_steps(king);
    while steps != 0 {
        let to = steps.trailing_zeros() as Square;
        if is_valid_move(board, king, to, color) && trial_move_is_legal(board, king, to) {
            escapes.push(to);
        }
        steps &= steps - 1;
    }

    escapes
}

/// Whether some piece of `color` can take `attacker` or step into its line
/// towards the king. Non-line attackers (knights) can only be captured.
pub fn can_capture_or_block(board: &Board, color: Color, attacker: Square) -> bool {
    let king = board.king_square(color);
    let targets: Vec<Square> = squares_between(king, attacker)
        .chain(iter::once(attacker))
        .collect();

    board.index().live(color).any(|(_, from)| {
        targets
            .iter()
            .any(|&to| is_valid_move(board, from, to, color) && trial_move_is_legal(board, from, to))
    })
}

/// `false` for a side that is not in check.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    let attackers = attackers_of_king(board, color);
    if attackers.is_empty() {
        return false;
    }

    if !king_escape_squares(board, color).is_empty() {
        return false;
    }

    match attackers.as_slice() {
        [single] => !can_capture_or_block(board, color, *single),
        _ => true,
    }
}
