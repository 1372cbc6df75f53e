use std::process::ExitCode;

use mailbox_chess::cli::play_loop::run_stdio_loop;
use mailbox_chess::cli::session_config::SessionConfig;

fn main() -> ExitCode {
    let config = match SessionConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: mailbox_chess [--no-board] [--debug] [--event NAME] [--white NAME] [--black NAME]");
            return ExitCode::from(2);
        }
    };

    match run_stdio_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("io error: {err}");
            ExitCode::FAILURE
        }
    }
}
