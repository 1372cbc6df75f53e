//! Move application.
//!
//! `make_move` is the low-level step shared by the live game and every
//! scratch trial: relocate the piece (and the rook when castling), then undo
//! everything if the mover's own king ends up in check. `apply_move` adds
//! the opponent's check/checkmate evaluation on top.

use crate::game_state::chess_rules::castling_rook_slot;
use crate::game_state::chess_types::*;
use crate::move_generation::checkmate::is_checkmate;
use crate::move_generation::legal_move_castling::castling_rook_destination;
use crate::move_generation::legal_move_checks::{is_check, is_valid_move};
use crate::moves::king_moves::is_castling_slide;

/// Applies an already-validated move and enforces the self-check rule.
///
/// Returns `false` and leaves `board` exactly as it was when the move would
/// leave the mover's king in check or land on a king. A king sliding two
/// columns is a castle and brings its rook along.
pub fn make_move(board: &mut Board, from: Square, to: Square) -> bool {
    let Some(mover) = board.piece_at(from) else {
        return false;
    };
    // Kings are never taken off the board.
    if matches!(board.piece_at(to), Some(target) if target.kind == PieceKind::King) {
        return false;
    }
    let snapshot = board.clone();

    board.relocate(from, to);

    let mut rook_to = None;
    if mover.kind == PieceKind::King && is_castling_slide(from, to) {
        let direction = displacement(from, to).1.signum();
        if let Some(rook_from) = board.coordinate_of(mover.color, castling_rook_slot(direction)) {
            let destination = castling_rook_destination(to, direction);
            board.relocate(rook_from, destination);
            rook_to = Some(destination);
        }
    }

    if is_check(board, mover.color) {
        *board = snapshot;
        return false;
    }

    board.mark_moved(to);
    if let Some(rook_square) = rook_to {
        board.mark_moved(rook_square);
    }
    true
}

/// Runs `make_move` on a scratch copy; the live board is never touched.
#[inline]
pub fn trial_move_is_legal(board: &Board, from: Square, to: Square) -> bool {
    let mut scratch = board.clone();
    make_move(&mut scratch, from, to)
}

/// Applies a move the caller has already checked with `is_valid_move`.
///
/// Check on the opponent is not a separate outcome: callers that want to
/// announce it query `is_check` after a `Passed` result.
pub fn apply_move(board: &mut Board, from: Square, to: Square) -> MoveResult {
    let Some(mover) = board.piece_at(from) else {
        return MoveResult::Failed;
    };

    if !make_move(board, from, to) {
        return MoveResult::Failed;
    }

    if cfg!(debug_assertions) {
        if let Err(err) = board.check_invariants() {
            panic!("board representation broken after {from}->{to}: {err}");
        }
    }

    let opponent = mover.color.opposite();
    if is_check(board, opponent) && is_checkmate(board, opponent) {
        MoveResult::Checkmate
    } else {
        MoveResult::Passed
    }
}

/// Validates `request` and applies it when legal.
pub fn play_move(board: &mut Board, request: MoveRequest) -> MoveResult {
    if !is_valid_move(board, request.from, request.to, request.color) {
        return MoveResult::Failed;
    }
    apply_move(board, request.from, request.to)
}
