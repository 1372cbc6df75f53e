//! Full legal move enumeration.
//!
//! Tries every destination for every live piece of a color, keeps the ones
//! that pass `is_valid_move` and survive the self-check rule, and records the
//! board each move leads to.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, trial_move_is_legal};
use crate::move_generation::legal_move_checks::{is_check, is_valid_move};
use crate::moves::king_moves::is_castling_slide;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub is_capture: bool,
    pub is_castle: bool,
    pub gives_check: bool,
    pub is_checkmate: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub request: MoveRequest,
    pub board_after: Board,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<GeneratedMove>;
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<GeneratedMove> {
        let mut legal = Vec::with_capacity(48);

        for (from, piece) in board.live_pieces(color) {
            for to in 0..BOARD_SQUARES as Square {
                if !is_valid_move(board, from, to, color) {
                    continue;
                }

                let is_capture = board.piece_at(to).is_some();
                let mut board_after = board.clone();
                let result = apply_move(&mut board_after, from, to);
                if result == MoveResult::Failed {
                    continue;
                }

                let annotations = MoveAnnotations {
                    is_capture,
                    is_castle: piece.kind == PieceKind::King && is_castling_slide(from, to),
                    gives_check: is_check(&board_after, color.opposite()),
                    is_checkmate: result == MoveResult::Checkmate,
                };

                legal.push(GeneratedMove {
                    request: MoveRequest::new(from, to, color),
                    board_after,
                    annotations,
                });
            }
        }

        legal
    }
}

/// Legal move requests for `color`, without building the resulting boards.
pub fn legal_moves(board: &Board, color: Color) -> Vec<MoveRequest> {
    let mut out = Vec::with_capacity(48);
    for (_, from) in board.index().live(color) {
        for to in 0..BOARD_SQUARES as Square {
            if is_valid_move(board, from, to, color) && trial_move_is_legal(board, from, to) {
                out.push(MoveRequest::new(from, to, color));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::{KINGSIDE_ROOK_SLOT, KING_SLOT};
    use crate::move_generation::legal_move_apply::play_move;

    #[test]
    fn opening_position_has_twenty_moves_each() {
        let board = Board::new_game();
        assert_eq!(legal_moves(&board, Color::White).len(), 20);
        assert_eq!(legal_moves(&board, Color::Black).len(), 20);
        assert_eq!(
            LegalMoveGenerator
                .generate_legal_moves(&board, Color::White)
                .len(),
            20
        );
    }

    #[test]
    fn mated_side_has_no_legal_moves() {
        let mut board = Board::new_game();
        for request in [
            MoveRequest::from_coords(1, 5, 2, 5, Color::White),
            MoveRequest::from_coords(6, 4, 4, 4, Color::Black),
            MoveRequest::from_coords(1, 6, 3, 6, Color::White),
            MoveRequest::from_coords(7, 3, 3, 7, Color::Black),
        ] {
            play_move(&mut board, request);
        }
        assert!(legal_moves(&board, Color::White).is_empty());
    }

    #[test]
    fn annotations_flag_castles_and_checks() {
        let board = Board::from_pieces(&[
            (square_at(0, 4), Color::White, KING_SLOT),
            (square_at(0, 7), Color::White, KINGSIDE_ROOK_SLOT),
            (square_at(7, 5), Color::Black, KING_SLOT),
        ])
        .expect("setup should be valid");

        let moves = LegalMoveGenerator.generate_legal_moves(&board, Color::White);
        let castle = moves
            .iter()
            .find(|mv| mv.annotations.is_castle)
            .expect("kingside castle should be generated");
        assert_eq!(castle.request.to, square_at(0, 6));
        // Rook lands on f1 and checks the king on f8.
        assert!(castle.annotations.gives_check);
        assert!(!castle.annotations.is_checkmate);
    }
}
