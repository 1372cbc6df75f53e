//! Seeded random games.
//!
//! Plays uniformly random legal moves from the opening position and audits
//! the board after every ply. Used to shake out representation bugs and as a
//! benchmark workload.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::play_move;
use crate::move_generation::legal_move_checks::is_check;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: Color },
    /// The side to move had no legal move without being in check.
    NoLegalMoves(Color),
    PlyLimit,
}

#[derive(Debug, Clone)]
pub struct PlayoutSummary {
    pub moves: Vec<MoveRequest>,
    pub checks_given: usize,
    pub outcome: PlayoutOutcome,
    pub final_board: Board,
}

impl PlayoutSummary {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

pub fn random_playout(seed: u64, max_plies: usize) -> ChessResult<PlayoutSummary> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new_game();
    let mut side = Color::White;
    let mut moves = Vec::with_capacity(max_plies);
    let mut checks_given = 0usize;

    let outcome = loop {
        if moves.len() >= max_plies {
            break PlayoutOutcome::PlyLimit;
        }

        let candidates = legal_moves(&board, side);
        let Some(&request) = candidates.as_slice().choose(&mut rng) else {
            break PlayoutOutcome::NoLegalMoves(side);
        };

        let result = play_move(&mut board, request);
        board.check_invariants()?;
        debug_assert_ne!(result, MoveResult::Failed, "generated move {request:?} was rejected");
        moves.push(request);

        if result == MoveResult::Checkmate {
            break PlayoutOutcome::Checkmate { winner: side };
        }
        if is_check(&board, side.opposite()) {
            checks_given += 1;
        }
        side = side.opposite();
    };

    Ok(PlayoutSummary {
        moves,
        checks_given,
        outcome,
        final_board: board,
    })
}
