use anyhow::Context;
use clap::{Parser, Subcommand};
use granola_cache::adapters::{FileCacheSource, SystemClock};
use granola_cache::commands::{self, Query};
use granola_cache::config::AppConfig;
use granola_cache::domain::Cache;
use std::path::PathBuf;

/// Query the local Granola meeting cache
#[derive(Parser)]
#[command(name = "granola-cache", version, about)]
struct Cli {
    /// Cache file to read (defaults to the app's per-user cache)
    #[arg(long, global = true)]
    cache_path: Option<PathBuf>,

    /// Never fall back to document panels for meeting notes
    #[arg(long, global = true)]
    no_panels: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search meetings by title, participant and transcript
    Search {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one meeting's details
    Details { meeting_id: String },
    /// Show a meeting's transcript
    Transcript { meeting_id: String },
    /// List a meeting's documents
    Documents { meeting_id: String },
    /// Analyze participants, frequency or topics over a date window
    Patterns {
        kind: String,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
}

impl Command {
    fn into_query(self, config: &AppConfig) -> Query {
        match self {
            Command::Search { query, limit } => Query::Search {
                query,
                limit: limit.unwrap_or(config.default_search_limit),
            },
            Command::Details { meeting_id } => Query::Details { meeting_id },
            Command::Transcript { meeting_id } => Query::Transcript { meeting_id },
            Command::Documents { meeting_id } => Query::Documents { meeting_id },
            Command::Patterns { kind, start, end } => Query::Patterns { kind, start, end },
        }
    }
}

/// Resolve configuration: environment first, then command-line flags
fn initialize_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::from_env()?;
    if let Some(path) = &cli.cache_path {
        config = config.with_cache_path(path);
    }
    if cli.no_panels {
        config = config.with_panel_extraction(false);
    }
    Ok(config)
}

fn load(config: &AppConfig) -> anyhow::Result<Cache> {
    let source = FileCacheSource::new(&config.cache_path);
    let cache = granola_cache::load_cache(&source, &SystemClock, config.panel_extraction)
        .with_context(|| format!("Failed to read cache {}", config.cache_path.display()))?;
    log::debug!("Cache stats: {:?}", cache.stats());
    Ok(cache)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = initialize_config(&cli)?;
    let query = cli.command.into_query(&config);
    query.validate()?;
    let cache = load(&config)?;

    let output = commands::execute(&cache, &query)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
