use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinesearch::movie::SortKey;

#[derive(Parser, Debug)]
#[command(name = "cinesearch")]
#[command(about = "Search the OMDb movie database from the terminal", long_about = None)]
struct Args {
    #[arg(short, long)]
    config: Option<String>,
    /// OMDb API key; overrides OMDB_API_KEY and the config file.
    #[arg(long)]
    apikey: Option<String>,
    /// Run a single search and exit.
    #[arg(short, long)]
    search: Option<String>,
    /// Order one-shot results by year or rating.
    #[arg(long, requires = "search")]
    sort: Option<SortKey>,
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug { "cinesearch=debug" } else { "cinesearch=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = cinesearch::Options {
        config_path: args.config,
        api_key: args.apikey,
        debug_logs: args.debug,
        search: args.search,
        sort: args.sort,
    };

    if let Err(e) = cinesearch::run(options).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
