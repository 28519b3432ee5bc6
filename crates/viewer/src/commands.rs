use thiserror::Error;

pub const HELP: &str = "\
Commands:
  r, refresh            fetch the signal now
  a, auto               toggle auto refresh (every 30s)
  s, symbol <SYMBOL>    switch symbol, e.g. s ETH-USDT
  t, timeframe <TF>     switch timeframe, e.g. t 4hour
  h, help               show this list
  q, quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    ToggleAuto,
    Symbol(String),
    Timeframe(String),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}, type h for help")]
    Unknown(String),

    #[error("{0} needs a value")]
    MissingArgument(&'static str),
}

impl Command {
    /// Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(None);
        };
        let argument = parts.next().map(str::to_string);

        let command = match word.to_ascii_lowercase().as_str() {
            "r" | "refresh" => Command::Refresh,
            "a" | "auto" => Command::ToggleAuto,
            "s" | "symbol" => {
                Command::Symbol(argument.ok_or(CommandError::MissingArgument("symbol"))?)
            }
            "t" | "timeframe" => {
                Command::Timeframe(argument.ok_or(CommandError::MissingArgument("timeframe"))?)
            }
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}
