//! Core value types shared by every subsystem.
//!
//! Squares are plain `u8` indices in `0..64` laid out as `row * 8 + col`,
//! where row 0 is White's back rank and column 0 is the A-file. With this
//! layout `0 == a1`, `7 == h1` and `63 == h8`.

pub use crate::game_state::board::Board;
pub use crate::game_state::coordinate_index::CoordinateIndex;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Stable per-color piece identity (`0..=15`), assigned at setup.
pub type SlotId = u8;

pub const BOARD_SQUARES: usize = 64;
pub const SLOTS_PER_COLOR: usize = 16;

#[inline]
pub const fn square_at(row: u8, col: u8) -> Square {
    row * 8 + col
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn col_of(square: Square) -> u8 {
    square % 8
}

/// Signed `(d_row, d_col)` displacement from `from` to `to`.
#[inline]
pub const fn displacement(from: Square, to: Square) -> (i8, i8) {
    (
        row_of(to) as i8 - row_of(from) as i8,
        col_of(to) as i8 - col_of(from) as i8,
    )
}

/// Side owning a piece. Empty squares carry no color at all (`Option<Color>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction a pawn of this color advances in, measured in rows.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Uppercase symbol; the board lowercases it for Black.
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }
}

/// A piece standing on (or captured from) the board.
///
/// `kind`, `color` and `slot` never change for the lifetime of a game;
/// `has_moved` flips to `true` the first time the piece is relocated by a
/// committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub slot: SlotId,
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color, slot: SlotId) -> Self {
        Self {
            kind,
            color,
            slot,
            has_moved: false,
        }
    }

    pub const fn symbol(&self) -> char {
        let upper = self.kind.symbol();
        match self.color {
            Color::White => upper,
            Color::Black => upper.to_ascii_lowercase(),
        }
    }
}

/// A request from a collaborator to move the piece on `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub color: Color,
}

impl MoveRequest {
    pub const fn new(from: Square, to: Square, color: Color) -> Self {
        Self { from, to, color }
    }

    /// Builds a request from zero-based `(row, col)` pairs.
    pub const fn from_coords(r1: u8, c1: u8, r2: u8, c2: u8, color: Color) -> Self {
        Self::new(square_at(r1, c1), square_at(r2, c2), color)
    }
}

/// Outcome of applying a move. `Failed` is an ordinary "illegal, ask again"
/// answer, not an engine fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveResult {
    Passed,
    Failed,
    Checkmate,
}
