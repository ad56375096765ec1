//! Terminal preview of the pinboard feed.
//!
//! Runs the same initial load and search flow as the browser board and prints
//! the resulting pins, one image URL per line or as JSON.

mod render;

use clap::{Parser, Subcommand};
use pins::config::parse_per_page;
use pins::feed::fetch_all;
use pins::{
    DEFAULT_TERMS, Feed, FirebaseApp, FirebaseConfig, FirebaseError, ImageSearch, SearchError, UnsplashClient,
    UnsplashConfig,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Firebase(#[from] FirebaseError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "pinboard", about = "Pinboard feed preview")]
struct Cli {
    /// Overrides `UNSPLASH_ACCESS_KEY`.
    #[arg(long)]
    access_key: Option<String>,

    /// Overrides `UNSPLASH_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    /// Overrides `UNSPLASH_PER_PAGE`.
    #[arg(long, value_parser = parse_per_page)]
    per_page: Option<u32>,

    #[arg(long)]
    request_timeout_secs: Option<u64>,

    #[arg(long)]
    connect_timeout_secs: Option<u64>,

    /// Print pins as JSON instead of one URL per line.
    #[arg(long)]
    json: bool,

    /// Seed the shuffle for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the board from the canned terms.
    Feed,
    /// Load the board, then apply each search in order.
    Search {
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Initialize the Firebase handle from `FIREBASE_*` and print it.
    Firebase,
}

impl Cli {
    /// Flags win over `UNSPLASH_*` environment variables; both go through
    /// the same parsing and validation.
    fn unsplash_config(&self) -> Result<UnsplashConfig, CliError> {
        UnsplashConfig::from_lookup(|key| self.flag(key).or_else(|| std::env::var(key).ok())).map_err(CliError::from)
    }

    fn flag(&self, key: &str) -> Option<String> {
        match key {
            "UNSPLASH_ACCESS_KEY" => self.access_key.clone(),
            "UNSPLASH_BASE_URL" => self.base_url.clone(),
            "UNSPLASH_PER_PAGE" => self.per_page.map(|n| n.to_string()),
            "UNSPLASH_REQUEST_TIMEOUT_SECS" => self.request_timeout_secs.map(|n| n.to_string()),
            "UNSPLASH_CONNECT_TIMEOUT_SECS" => self.connect_timeout_secs.map(|n| n.to_string()),
            _ => None,
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Feed => run_board(&cli, &[]).await,
        Command::Search { terms } => run_board(&cli, terms).await,
        Command::Firebase => run_firebase(),
    }
}

async fn run_board(cli: &Cli, terms: &[String]) -> Result<(), CliError> {
    let client = UnsplashClient::new(cli.unsplash_config()?)?;
    let mut rng = cli.rng();
    let feed = build_board(&client, terms, &mut rng).await?;

    let out = if cli.json { render::render_json(feed.pins())? } else { render::render_lines(feed.pins()) };
    print!("{out}");
    Ok(())
}

/// Initial load followed by each search in order.
///
/// A failed initial load is fatal; a failed search is logged and skipped.
async fn build_board<S>(search: &S, terms: &[String], rng: &mut StdRng) -> Result<Feed, SearchError>
where
    S: ImageSearch + ?Sized,
{
    let mut feed = Feed::new();
    let ticket = feed.begin();
    let pins = fetch_all(search, &DEFAULT_TERMS).await?;
    feed.replace(ticket, pins, rng);

    for term in terms {
        let ticket = feed.begin();
        match search.search(term).await {
            Ok(results) => {
                let added = results.len();
                feed.prepend(ticket, results, rng);
                tracing::info!(%term, added, total = feed.len(), "search applied");
            }
            Err(err) => tracing::warn!(%term, retryable = err.retryable(), error = %err, "search failed"),
        }
    }
    Ok(feed)
}

fn run_firebase() -> Result<(), CliError> {
    let app = FirebaseApp::initialize(FirebaseConfig::from_env())?;
    let out = render::render_firebase(&app);
    print!("{out}");
    Ok(())
}
