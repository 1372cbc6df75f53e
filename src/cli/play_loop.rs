//! Two-player text game loop.
//!
//! Reads one line at a time: either a move in `e2e4` form for the side to
//! move, or a session command. Output goes to whatever writer the caller
//! passes in, so the loop can be driven from tests as well as from stdin.

use std::io::{self, BufRead, Write};

use crate::cli::session_config::SessionConfig;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_check, is_valid_move};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::utils::game_record::GameRecord;
use crate::utils::long_algebraic::{long_algebraic_to_move_request, move_request_to_long_algebraic};
use crate::utils::render_game_state::render_board;

pub const INVALID_MOVE_MESSAGE: &str = "Error invalid move. Please try again!";
pub const SELF_CHECK_MESSAGE: &str = "Can't make that move, your King is in check";
pub const CHECKMATE_MESSAGE: &str = "Checkmate!";
pub const INPUT_HINT_MESSAGE: &str =
    "Invalid selection please enter a start space and a destination space. For example: e2e4";

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = PlaySession::new(config);

    session.write_turn_header(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct PlaySession {
    board: Board,
    side_to_move: Color,
    record: GameRecord,
    config: SessionConfig,
    game_over: bool,
}

impl PlaySession {
    pub fn new(config: SessionConfig) -> Self {
        let record = GameRecord::new(&config.event, &config.white_name, &config.black_name);
        Self {
            board: Board::new_game(),
            side_to_move: Color::White,
            record,
            config,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Handles one input line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let lowered = trimmed.to_ascii_lowercase();
        let mut parts = lowered.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next();

        match (cmd, arg) {
            ("q" | "quit", _) => return Ok(true),
            ("new", _) => {
                self.board.reset();
                self.side_to_move = Color::White;
                self.record.clear();
                self.game_over = false;
                self.write_turn_header(out)?;
            }
            ("board", None) => {
                write!(out, "{}", render_board(&self.board))?;
            }
            ("board", Some(toggle)) => match parse_toggle(toggle) {
                Some(on) => self.config.show_board = on,
                None => writeln!(out, "info string board expects on or off")?,
            },
            ("debug", Some(toggle)) => match parse_toggle(toggle) {
                Some(on) => self.config.debug = on,
                None => writeln!(out, "info string debug expects on or off")?,
            },
            ("pgn", _) => match self.record.to_pgn() {
                Ok(pgn) => write!(out, "{pgn}")?,
                Err(err) => writeln!(out, "info string pgn error: {err}")?,
            },
            ("moves", _) => {
                let listed: Vec<String> = legal_moves(&self.board, self.side_to_move)
                    .iter()
                    .filter_map(|request| move_request_to_long_algebraic(request).ok())
                    .collect();
                writeln!(out, "{}", listed.join(" "))?;
            }
            _ => self.handle_move_text(trimmed, out)?,
        }

        Ok(false)
    }

    fn handle_move_text(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        if self.game_over {
            writeln!(out, "Game over. Enter new to play again or q to quit")?;
            return Ok(());
        }

        let request = match long_algebraic_to_move_request(text, self.side_to_move) {
            Ok(request) => request,
            Err(err) => {
                writeln!(out, "{INPUT_HINT_MESSAGE}")?;
                if self.config.debug {
                    writeln!(out, "info string input error: {err}")?;
                }
                return Ok(());
            }
        };

        if !is_valid_move(&self.board, request.from, request.to, request.color) {
            writeln!(out, "{INVALID_MOVE_MESSAGE}")?;
            return Ok(());
        }

        let result = apply_move(&mut self.board, request.from, request.to);
        if self.config.debug {
            writeln!(out, "info string move {} result {:?}", text.to_ascii_lowercase(), result)?;
        }

        match result {
            MoveResult::Failed => {
                writeln!(out, "{SELF_CHECK_MESSAGE}")?;
            }
            MoveResult::Checkmate => {
                self.record.push(request);
                self.record.set_winner(self.side_to_move);
                self.game_over = true;
                if self.config.show_board {
                    write!(out, "{}", render_board(&self.board))?;
                }
                writeln!(out, "{CHECKMATE_MESSAGE}")?;
                writeln!(out, "{} wins {}", self.side_to_move.name(), self.record.result())?;
            }
            MoveResult::Passed => {
                self.record.push(request);
                let opponent = self.side_to_move.opposite();
                if is_check(&self.board, opponent) {
                    writeln!(out, "{} King is in check", opponent.name())?;
                }
                self.side_to_move = opponent;
                self.write_turn_header(out)?;
            }
        }

        Ok(())
    }

    /// Board (when enabled), debug diagnostics and the move prompt.
    pub fn write_turn_header(&self, out: &mut impl Write) -> io::Result<()> {
        if self.config.show_board {
            write!(out, "{}", render_board(&self.board))?;
        }
        if self.config.debug {
            writeln!(
                out,
                "info string legal_moves {}",
                legal_moves(&self.board, self.side_to_move).len()
            )?;
            for color in [Color::White, Color::Black] {
                let captured: Vec<String> = self
                    .board
                    .captured_pieces(color)
                    .iter()
                    .map(|kind| kind.symbol().to_string())
                    .collect();
                writeln!(
                    out,
                    "info string captured {} [{}]",
                    color.name().to_ascii_lowercase(),
                    captured.join(" ")
                )?;
            }
        }
        writeln!(out, "Please enter {}'s move or q to quit: ", self.side_to_move.name())
    }
}

fn parse_toggle(value: &str) -> Option<bool> {
    match value {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::game_record::RESULT_BLACK_WINS;

    fn quiet_session() -> PlaySession {
        PlaySession::new(SessionConfig {
            show_board: false,
            ..SessionConfig::default()
        })
    }

    fn feed(session: &mut PlaySession, lines: &[&str]) -> String {
        let mut out = Vec::<u8>::new();
        for line in lines {
            session
                .handle_command(line, &mut out)
                .expect("writing to a Vec should not fail");
        }
        String::from_utf8(out).expect("output should be UTF-8")
    }

    #[test]
    fn legal_move_switches_sides_and_prompts() {
        let mut session = quiet_session();
        let output = feed(&mut session, &["E2E4"]);

        assert_eq!(session.side_to_move(), Color::Black);
        assert_eq!(session.record().moves.len(), 1);
        assert!(output.contains("Please enter Black's move or q to quit: "));
    }

    #[test]
    fn bad_text_and_illegal_moves_keep_the_turn() {
        let mut session = quiet_session();
        let output = feed(&mut session, &["hello", "e2e5", "e7e5"]);

        assert!(output.contains(INPUT_HINT_MESSAGE));
        assert_eq!(output.matches(INVALID_MOVE_MESSAGE).count(), 2);
        assert_eq!(session.side_to_move(), Color::White);
        assert_eq!(session.board(), &Board::new_game());
    }

    #[test]
    fn pinned_piece_reports_own_king_in_check() {
        let mut session = quiet_session();
        // 2...Bb4+ and a2a3 does nothing about the check.
        let output = feed(&mut session, &["e2e4", "e7e5", "d2d4", "f8b4", "a2a3"]);

        assert!(output.contains("White King is in check"));
        assert!(output.contains(SELF_CHECK_MESSAGE));
        assert_eq!(session.side_to_move(), Color::White);
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut session = quiet_session();
        let output = feed(&mut session, &["f2f3", "e7e5", "g2g4", "d8h4", "a2a3"]);

        assert!(output.contains(CHECKMATE_MESSAGE));
        assert!(output.contains("Black wins 0-1"));
        assert!(output.contains("Game over."));
        assert!(session.is_game_over());
        assert_eq!(session.record().result(), RESULT_BLACK_WINS);
        assert_eq!(session.record().moves.len(), 4);
    }

    #[test]
    fn new_resets_board_and_record() {
        let mut session = quiet_session();
        feed(&mut session, &["f2f3", "e7e5", "g2g4", "d8h4", "new"]);

        assert!(!session.is_game_over());
        assert_eq!(session.board(), &Board::new_game());
        assert_eq!(session.side_to_move(), Color::White);
        assert!(session.record().moves.is_empty());
    }

    #[test]
    fn commands_write_board_moves_and_pgn() {
        let mut session = quiet_session();
        let output = feed(&mut session, &["e2e4", "board", "moves", "pgn"]);

        assert!(output.contains(" 4 |   |   |   |   | P |   |   |   |"));
        assert!(output.contains("b8a6 b8c6"));
        assert!(output.contains("1. e2e4 *"));
    }

    #[test]
    fn debug_toggle_emits_info_lines() {
        let mut session = quiet_session();
        let output = feed(&mut session, &["debug on", "e2e4", "debug off", "e7e5"]);

        assert!(output.contains("info string move e2e4 result Passed"));
        assert!(output.contains("info string legal_moves 20"));
        assert!(output.contains("info string captured white []"));
        assert!(!output.contains("info string move e7e5"));
    }

    #[test]
    fn board_toggle_controls_redraw_and_quit_ends_session() {
        let mut session = quiet_session();
        let mut out = Vec::<u8>::new();
        assert!(!session.handle_command("board on", &mut out).expect("write"));
        assert!(!session.handle_command("e2e4", &mut out).expect("write"));
        assert!(session.handle_command("q", &mut out).expect("write"));

        let output = String::from_utf8(out).expect("output should be UTF-8");
        assert!(output.contains("     A   B   C   D   E   F   G   H"));
    }
}
