//! Fundamentals Collector: binary entrypoint.
//! Refreshes the cached per-ticker dataset from the configured sources.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fundamentals_collector::ingest::config::{load_config_default, CollectorConfig};
use fundamentals_collector::reconcile::Scope;
use fundamentals_collector::{run, sources, tickers};

#[derive(Debug, Parser)]
#[command(about = "Collects fundamentals for B3 tickers into one JSON dataset.")]
#[command(author, version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Refresh every configured source (fresh and exhausted sources are kept from cache).
    Collect {
        /// Keep this source from cache for the whole run. Repeatable.
        #[arg(long, value_name = "SOURCE")]
        exclude: Vec<String>,
        #[command(flatten)]
        tickers: TickerArgs,
    },
    /// Refresh a single source now, leaving every other source untouched.
    Refresh {
        #[arg(long, value_name = "SOURCE")]
        source: String,
        #[command(flatten)]
        tickers: TickerArgs,
    },
    /// List the known sources and their key counts.
    Sources,
}

#[derive(Debug, Args)]
struct TickerArgs {
    /// Ticker list file (plain list or spreadsheet CSV export).
    #[arg(long, value_name = "FILE", conflicts_with = "symbols")]
    tickers: Option<PathBuf>,
    /// Tickers to process, overriding any list file.
    #[arg(value_name = "TICKER")]
    symbols: Vec<String>,
}

impl TickerArgs {
    fn resolve(&self, cfg: &CollectorConfig) -> Result<Vec<String>> {
        if !self.symbols.is_empty() {
            return Ok(tickers::parse_tickers(&self.symbols.join("\n")));
        }
        match self.tickers.as_ref().or(cfg.tickers_file.as_ref()) {
            Some(path) => tickers::load_tickers_from(path),
            None => bail!("no tickers given; pass TICKER... or --tickers FILE, or set tickers_file"),
        }
    }
}

/// Compact logs by default, JSON lines with COLLECTOR_LOG_JSON=1.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fundamentals_collector=info,collector=info,warn"));
    let json = std::env::var("COLLECTOR_LOG_JSON")
        .ok()
        .is_some_and(|v| v == "1");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

fn list_sources() {
    for schema in sources::builtin() {
        println!(
            "{:<24} {:<24} keys={:<3} gated={}",
            schema.name,
            schema.display,
            schema.field_keys().len(),
            schema.freshness_gated
        );
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    if let Command::Sources = cli.command {
        list_sources();
        return Ok(());
    }

    let cfg = load_config_default()?;
    let scrapers = cfg.build_scrapers();
    let (scope, exclude, ticker_args) = match &cli.command {
        Command::Collect { exclude, tickers } => (Scope::Full, exclude.clone(), tickers),
        Command::Refresh { source, tickers } => {
            let Some(schema) = sources::find(source) else {
                bail!("unknown source {source:?}; see `collector sources`");
            };
            (Scope::SingleSource(schema.name.to_string()), Vec::new(), tickers)
        }
        Command::Sources => return Ok(()),
    };
    for name in &exclude {
        if sources::find(name).is_none() {
            bail!("unknown source {name:?} in --exclude");
        }
    }

    let tickers = ticker_args.resolve(&cfg)?;
    let summary = run::run_once(&cfg, &scrapers, &tickers, &scope, &exclude).await?;
    println!(
        "{} tickers: {} reconciled, {} recovered, {} dropped",
        summary.tickers, summary.reconciled, summary.recovered, summary.dropped
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    match dispatch(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
