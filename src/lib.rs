pub mod app;
pub mod config;
pub mod controller;
pub mod movie;
pub mod omdb;
pub mod render;

#[cfg(test)]
mod testing;

use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use app::{Command, Session};
use movie::{MovieService, SortKey};
use omdb::OmdbClient;
use render::{Screen, TerminalRenderer};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("API client error: {0}")]
    Api(#[from] omdb::ApiError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Startup options collected by the binary.
#[derive(Debug, Default)]
pub struct Options {
    pub config_path: Option<String>,
    pub api_key: Option<String>,
    pub debug_logs: bool,
    /// Run one search and exit instead of starting the interactive loop.
    pub search: Option<String>,
    pub sort: Option<SortKey>,
}

pub async fn run(options: Options) -> Result<(), AppError> {
    let mut config = match options.config_path.as_deref() {
        Some(path) => {
            info!("Using config file: {}", path);
            config::Config::from_file(path)?
        }
        None => config::Config::default(),
    };
    config.debug_logs = options.debug_logs;
    config.resolve_api_key(options.api_key, std::env::var(config::API_KEY_ENV).ok())?;

    info!("OMDb endpoint: {}", config.omdb.baseurl);
    if config.debug_logs {
        info!("Debug logging enabled");
    }

    let client = OmdbClient::from_config(&config.omdb)?;
    let service = MovieService::new(Arc::new(client));
    let screen = Screen::new(Arc::new(TerminalRenderer::stdout()), &config.placeholder_poster);
    let mut session = Session::new(service, screen, config.recommendations.limit);

    if let Some(term) = options.search {
        session.search(&term).await;
        if options.sort.is_some() {
            session.sort(options.sort);
        }
        return Ok(());
    }

    session.load_featured(&config.featured).await;
    interactive(&mut session, BufReader::new(tokio::io::stdin())).await
}

async fn interactive<R>(session: &mut Session, input: R) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
{
    println!("{}", app::command::HELP);
    let mut input = input;
    let mut buf = Vec::new();

    loop {
        print!("> ");
        if let Err(e) = std::io::stdout().flush() {
            warn!("Failed to flush prompt: {}", e);
        }

        let Some(line) = read_line(&mut input, &mut buf).await? else {
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Search(term)) => session.search(&term).await,
            Ok(Command::Sort(key)) => {
                if !session.sort(key) {
                    println!("Nothing to sort yet, search for a title first.");
                }
            }
            Ok(Command::Home) => session.home(),
            Ok(Command::Help) => println!("{}", app::command::HELP),
            Ok(Command::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

/// Next input line without its terminator, or `None` at end of input.
///
/// Bytes that are not UTF-8 are replaced rather than rejected.
async fn read_line<R>(input: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if input.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
