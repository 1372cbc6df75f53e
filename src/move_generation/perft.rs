use std::sync::Arc;
use std::thread;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{GeneratedMove, LegalMoveGenerator, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, color: Color, depth: u8) -> PerftCounts {
    perft_with_generator(&LegalMoveGenerator, board, color, depth)
}

pub fn perft_with_generator<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    color: Color,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, color) {
        perft_recurse(generator, &mv, depth, 1, &mut total);
    }
    total
}

/// Splits the root moves across worker threads. Each worker owns the board
/// its root move produced, so no board is shared between threads.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    color: Color,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(board, color);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(generator_ref.as_ref(), &mv, depth, 1, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle.join().map_err(|_| ChessError::PerftWorkerPanicked)?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.nodes += 1;

        if mv.annotations.is_capture {
            counts.captures += 1;
        }
        if mv.annotations.is_castle {
            counts.castles += 1;
        }
        if mv.annotations.gives_check {
            counts.checks += 1;
        }
        if mv.annotations.is_checkmate {
            counts.checkmates += 1;
        }

        return;
    }

    let next = mv.request.color.opposite();
    for child in generator.generate_legal_moves(&mv.board_after, next) {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts);
    }
}
