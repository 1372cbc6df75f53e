use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Parses a two-square move such as `e2e4` (any case) into a request for `color`.
///
/// This is where malformed text is stopped; the rules core only ever sees
/// in-bounds squares.
pub fn long_algebraic_to_move_request(long_algebraic: &str, color: Color) -> ChessResult<MoveRequest> {
    let text = long_algebraic.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::InvalidAlgebraicString(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    Ok(MoveRequest::new(from, to, color))
}

pub fn move_request_to_long_algebraic(request: &MoveRequest) -> ChessResult<String> {
    let mut out = square_to_algebraic(request.from)?;
    out.push_str(&square_to_algebraic(request.to)?);
    Ok(out)
}
