//! Mailbox board state.
//!
//! `Board` is the central model: a 64-cell grid of optional pieces plus the
//! [`CoordinateIndex`] that tracks every slot. Both halves are private and
//! change together through [`Board::relocate`], so the grid and the index
//! cannot drift apart. Legality, application and check detection live in
//! `move_generation` and work on `&Board` / `&mut Board`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{home_square, SLOT_KINDS};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [Option<Piece>; BOARD_SQUARES],
    index: CoordinateIndex,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Standard opening position.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for slot in 0..SLOTS_PER_COLOR as SlotId {
                board.grid[home_square(color, slot) as usize] =
                    Some(Piece::new(SLOT_KINDS[slot as usize], color, slot));
            }
        }
        board.index = CoordinateIndex::starting();
        board
    }

    /// Puts every piece back on its home square with fresh move history.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    fn empty() -> Self {
        Self {
            grid: [None; BOARD_SQUARES],
            index: CoordinateIndex::default(),
        }
    }

    /// Builds a custom position from `(square, color, slot)` placements.
    ///
    /// The slot fixes the piece kind (see `SLOT_KINDS`). A piece counts as
    /// unmoved only while it stands on its slot's home square, so castling and
    /// pawn double steps behave as they would have in a real game. Slots left
    /// out are treated as captured. Both kings are required.
    pub fn from_pieces(placements: &[(Square, Color, SlotId)]) -> ChessResult<Self> {
        let mut board = Self::empty();

        for &(square, color, slot) in placements {
            if square as usize >= BOARD_SQUARES {
                return Err(ChessError::SquareOutOfBounds(square));
            }
            if slot as usize >= SLOTS_PER_COLOR {
                return Err(ChessError::SlotOutOfRange(slot));
            }
            if board.grid[square as usize].is_some() {
                return Err(ChessError::SquareOccupied(square));
            }
            if board.index.get(color, slot).is_some() {
                return Err(ChessError::DuplicateSlot { color, slot });
            }

            let mut piece = Piece::new(SLOT_KINDS[slot as usize], color, slot);
            piece.has_moved = square != home_square(color, slot);
            board.grid[square as usize] = Some(piece);
            board.index.set(color, slot, Some(square));
        }

        board.check_invariants()?;
        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square as usize]
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.grid[square as usize].map(|piece| piece.color)
    }

    /// Display symbol for a cell: uppercase White, lowercase Black, space if empty.
    #[inline]
    pub fn symbol_at(&self, square: Square) -> char {
        self.grid[square as usize].map_or(' ', |piece| piece.symbol())
    }

    #[inline]
    pub fn index(&self) -> &CoordinateIndex {
        &self.index
    }

    #[inline]
    pub fn coordinate_of(&self, color: Color, slot: SlotId) -> Option<Square> {
        self.index.get(color, slot)
    }

    /// Square of `color`'s king. Kings are never captured, so a missing entry
    /// is a broken board and panics.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.index
            .king(color)
            .expect("king must always be present in the coordinate index")
    }

    /// `(square, piece)` for every piece of `color` still on the board, in slot order.
    pub fn live_pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.index
            .live(color)
            .filter_map(|(_, sq)| self.grid[sq as usize].map(|piece| (sq, piece)))
    }

    /// Kinds of `color`'s captured pieces, in slot order.
    pub fn captured_pieces(&self, color: Color) -> Vec<PieceKind> {
        self.index
            .captured(color)
            .map(|slot| SLOT_KINDS[slot as usize])
            .collect()
    }

    /// Moves the piece on `from` to `to`, updating grid and index together.
    ///
    /// A piece already on `to` is captured: it leaves the grid and its index
    /// entry becomes the captured sentinel in the same step. Returns the
    /// captured piece. Relocating from an empty square changes nothing.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mover = self.grid[from as usize].take()?;

        let captured = self.grid[to as usize].replace(mover);
        if let Some(victim) = captured {
            self.index.set(victim.color, victim.slot, None);
        }
        self.index.set(mover.color, mover.slot, Some(to));

        captured
    }

    pub(crate) fn mark_moved(&mut self, square: Square) {
        if let Some(piece) = self.grid[square as usize].as_mut() {
            piece.has_moved = true;
        }
    }

    /// Audits the grid/index agreement and the presence of both kings.
    pub fn check_invariants(&self) -> ChessResult<()> {
        for (sq, cell) in self.grid.iter().enumerate() {
            if let Some(piece) = cell {
                let square = sq as Square;
                if self.index.get(piece.color, piece.slot) != Some(square) {
                    return Err(ChessError::IndexMismatch {
                        color: piece.color,
                        slot: piece.slot,
                        square,
                    });
                }
            }
        }

        for color in [Color::White, Color::Black] {
            for (slot, square) in self.index.live(color) {
                match self.grid[square as usize] {
                    Some(piece) if piece.color == color && piece.slot == slot => {}
                    _ => return Err(ChessError::StaleIndexEntry { color, slot, square }),
                }
            }

            match self.index.king(color).and_then(|sq| self.piece_at(sq)) {
                Some(piece) if piece.kind == PieceKind::King => {}
                _ => return Err(ChessError::MissingKing(color)),
            }
        }

        Ok(())
    }
}
