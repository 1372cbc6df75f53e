//! Framed text board renderer.
//!
//! Rows are printed from 8 down to 1 under an `A`..`H` column header, each
//! cell holding the symbol `Board::symbol_at` reports (uppercase White,
//! lowercase Black, space for empty). A blank line follows the bottom frame.

use crate::game_state::chess_types::*;

const FRAME: &str = "   +---+---+---+---+---+---+---+---+\n";

pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(FRAME.len() * 18);

    out.push_str("   ");
    for file in 'A'..='H' {
        out.push_str(&format!("  {file} "));
    }
    out.push('\n');

    for row in (0..8u8).rev() {
        out.push_str(FRAME);
        out.push_str(&format!("{:2} ", row + 1));
        for col in 0..8u8 {
            out.push_str(&format!("| {} ", board.symbol_at(square_at(row, col))));
        }
        out.push_str("|\n");
    }
    out.push_str(FRAME);
    out.push('\n');

    out
}
