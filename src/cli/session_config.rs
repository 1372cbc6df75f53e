//! Settings for an interactive two-player session.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Redraw the board before every turn.
    pub show_board: bool,
    /// Emit `info string` diagnostics alongside the normal prompts.
    pub debug: bool,
    pub event: String,
    pub white_name: String,
    pub black_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            debug: false,
            event: "Mailbox Chess Game".to_owned(),
            white_name: "White".to_owned(),
            black_name: "Black".to_owned(),
        }
    }
}

impl SessionConfig {
    /// Parses command-line flags (program name already stripped).
    pub fn from_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--no-board" => config.show_board = false,
                "--debug" => config.debug = true,
                flag @ ("--event" | "--white" | "--black") => {
                    let value = args
                        .next()
                        .ok_or_else(|| format!("{flag} requires a value"))?
                        .as_ref()
                        .to_owned();
                    match flag {
                        "--event" => config.event = value,
                        "--white" => config.white_name = value,
                        _ => config.black_name = value,
                    }
                }
                other => return Err(format!("Unknown argument: {other}")),
            }
        }

        Ok(config)
    }
}
