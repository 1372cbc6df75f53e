//! Crate root module declarations for the Mailbox Chess rules engine.
//!
//! This file exposes the subsystems (board state, piece geometry, legality
//! and checkmate evaluation, text utilities, and the interactive session) so
//! the binary, tests, and benchmarks can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod coordinate_index;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_geometry;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod checkmate;
    pub mod legal_move_apply;
    pub mod legal_move_castling;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_record;
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}

pub mod cli {
    pub mod play_loop;
    pub mod session_config;
}
