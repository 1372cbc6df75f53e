//! Errors used throughout the crate.
//!
//! `ChessError` is the single error type for recoverable failures: malformed
//! move text coming from a collaborator, or a custom setup that breaks the
//! board's representation rules. Illegal moves are NOT errors; they are
//! reported as `MoveResult::Failed`.
//!
//! The representation variants (`IndexMismatch`, `StaleIndexEntry`,
//! `MissingKing`) also describe engine bugs when they show up after a move;
//! `apply_move` turns them into a panic in debug builds.

use thiserror::Error;

use crate::game_state::chess_types::{Color, SlotId, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Move or square text that does not match `([a-h][1-8])+`.
    #[error("invalid algebraic string: {0:?}")]
    InvalidAlgebraicString(String),

    #[error("invalid algebraic character: {0:?}")]
    InvalidAlgebraicChar(char),

    #[error("square index out of bounds: {0}")]
    SquareOutOfBounds(Square),

    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    #[error("{color:?} slot {slot} is placed twice")]
    DuplicateSlot { color: Color, slot: SlotId },

    #[error("slot {0} is outside 0..16")]
    SlotOutOfRange(SlotId),

    #[error("{0:?} king is not on the board")]
    MissingKing(Color),

    /// A grid cell and its coordinate index entry disagree.
    #[error("coordinate index disagrees with grid at square {square} ({color:?} slot {slot})")]
    IndexMismatch {
        color: Color,
        slot: SlotId,
        square: Square,
    },

    /// An index entry points at a square that does not hold that piece.
    #[error("{color:?} slot {slot} indexed on square {square} which does not hold it")]
    StaleIndexEntry {
        color: Color,
        slot: SlotId,
        square: Square,
    },

    #[error("perft worker thread panicked")]
    PerftWorkerPanicked,
}

pub type ChessResult<T> = Result<T, ChessError>;
