use crate::movie::SortKey;

pub const HELP: &str = "\
Type a movie title and press Enter to search.
  :sort year|rating|none   reorder the current results
  :home                    back to the featured movies
  :help                    this text
  :quit                    exit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw term, possibly blank; validation happens in the search itself.
    Search(String),
    Sort(Option<SortKey>),
    Home,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix(':') else {
            return Ok(Command::Search(line.to_string()));
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();

        match name.as_str() {
            "sort" => match arg.map(str::to_lowercase).as_deref() {
                None | Some("none") | Some("default") => Ok(Command::Sort(None)),
                Some(key) => key
                    .parse::<SortKey>()
                    .map(|k| Command::Sort(Some(k)))
                    .map_err(|_| CommandError::BadSortKey(key.to_string())),
            },
            "home" => Ok(Command::Home),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name)),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command :{0} (try :help)")]
    Unknown(String),
    #[error("Unknown sort key {0:?}, expected year, rating or none")]
    BadSortKey(String),
}
