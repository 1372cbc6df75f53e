//! PGN-style record of a played game.
//!
//! Moves are written in long algebraic form (`e2e4`), numbered in pairs, and
//! followed by the result token. Headers are kept sorted.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::utils::long_algebraic::move_request_to_long_algebraic;

pub const RESULT_WHITE_WINS: &str = "1-0";
pub const RESULT_BLACK_WINS: &str = "0-1";
pub const RESULT_UNFINISHED: &str = "*";

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub event: String,
    pub white: String,
    pub black: String,
    pub date: NaiveDate,
    pub moves: Vec<MoveRequest>,
    result: &'static str,
}

impl GameRecord {
    /// A record dated today.
    pub fn new(event: &str, white: &str, black: &str) -> Self {
        Self::with_date(event, white, black, Local::now().date_naive())
    }

    pub fn with_date(event: &str, white: &str, black: &str, date: NaiveDate) -> Self {
        Self {
            event: event.to_owned(),
            white: white.to_owned(),
            black: black.to_owned(),
            date,
            moves: Vec::new(),
            result: RESULT_UNFINISHED,
        }
    }

    pub fn push(&mut self, request: MoveRequest) {
        self.moves.push(request);
    }

    /// Records the winner of a checkmate.
    pub fn set_winner(&mut self, winner: Color) {
        self.result = match winner {
            Color::White => RESULT_WHITE_WINS,
            Color::Black => RESULT_BLACK_WINS,
        };
    }

    pub fn result(&self) -> &'static str {
        self.result
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.result = RESULT_UNFINISHED;
    }

    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::<String, String>::new();
        headers.insert("Event".to_owned(), self.event.clone());
        headers.insert("Site".to_owned(), "Local".to_owned());
        headers.insert("Date".to_owned(), self.date.format("%Y.%m.%d").to_string());
        headers.insert("Round".to_owned(), "-".to_owned());
        headers.insert("White".to_owned(), self.white.clone());
        headers.insert("Black".to_owned(), self.black.clone());
        headers.insert("Result".to_owned(), self.result.to_owned());
        headers
    }

    pub fn to_pgn(&self) -> ChessResult<String> {
        let mut out = String::new();

        for (key, value) in self.headers() {
            out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(&value)));
        }
        out.push('\n');

        let mut movetext_parts = Vec::<String>::with_capacity(self.moves.len() + 1);
        for (ply, request) in self.moves.iter().enumerate() {
            let lan = move_request_to_long_algebraic(request)?;
            if ply % 2 == 0 {
                movetext_parts.push(format!("{}. {}", (ply / 2) + 1, lan));
            } else {
                movetext_parts.push(lan);
            }
        }
        movetext_parts.push(self.result.to_owned());

        out.push_str(&movetext_parts.join(" "));
        out.push('\n');
        Ok(out)
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated_record() -> GameRecord {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("date should be valid");
        GameRecord::with_date("Club \"Night\"", "Alice", "Bob", date)
    }

    #[test]
    fn empty_record_is_unfinished() {
        let pgn = dated_record().to_pgn().expect("PGN should write");
        assert!(pgn.contains("[Date \"2024.03.09\"]\n"));
        assert!(pgn.contains("[Event \"Club \\\"Night\\\"\"]\n"));
        assert!(pgn.ends_with("\n*\n"));
    }

    #[test]
    fn moves_are_numbered_in_pairs() {
        let mut record = dated_record();
        record.push(MoveRequest::from_coords(1, 5, 2, 5, Color::White));
        record.push(MoveRequest::from_coords(6, 4, 4, 4, Color::Black));
        record.push(MoveRequest::from_coords(1, 6, 3, 6, Color::White));
        record.push(MoveRequest::from_coords(7, 3, 3, 7, Color::Black));
        record.set_winner(Color::Black);

        let pgn = record.to_pgn().expect("PGN should write");
        assert!(pgn.contains("[Result \"0-1\"]\n"));
        assert!(pgn.ends_with("\n1. f2f3 e7e5 2. g2g4 d8h4 0-1\n"));

        let header_keys: Vec<String> = record.headers().into_keys().collect();
        assert_eq!(header_keys, ["Black", "Date", "Event", "Result", "Round", "Site", "White"]);
    }

    #[test]
    fn clear_resets_moves_and_result() {
        let mut record = dated_record();
        record.push(MoveRequest::from_coords(1, 4, 3, 4, Color::White));
        record.set_winner(Color::White);
        record.clear();
        assert!(record.moves.is_empty());
        assert_eq!(record.result(), RESULT_UNFINISHED);
    }
}
