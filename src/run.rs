// src/run.rs
//! Sequential run loop: load the cache, reconcile each ticker in list order, save once.

use anyhow::{bail, Result};
use chrono::Utc;
use metrics::gauge;

use crate::ingest::config::CollectorConfig;
use crate::ingest::types::SourceScraper;
use crate::record::FieldRecord;
use crate::reconcile::{
    reconcile_ticker, recover_ticker, MissingTickerPolicy, RunContext, Scope,
};
use crate::store;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub tickers: usize,
    pub reconciled: usize,
    /// Failed tickers that kept their cached record (or got a placeholder).
    pub recovered: usize,
    pub dropped: usize,
    pub exhausted_sources: Vec<String>,
}

/// Reconcile `tickers` against `cached` and return the new record list plus a summary.
/// Nothing is written; the caller persists the list in one go.
pub async fn collect_records(
    tickers: &[String],
    cached: Vec<FieldRecord>,
    scope: &Scope,
    scrapers: &[Box<dyn SourceScraper>],
    ctx: &mut RunContext,
    policy: MissingTickerPolicy,
) -> Result<(Vec<FieldRecord>, RunSummary)> {
    if let Scope::SingleSource(name) = scope {
        if !scrapers.iter().any(|s| s.name().eq_ignore_ascii_case(name)) {
            bail!("source {name:?} is not configured for this run");
        }
    }

    let cache = store::index_by_ticker(cached);
    let mut out = Vec::with_capacity(tickers.len());
    let mut summary = RunSummary {
        tickers: tickers.len(),
        ..Default::default()
    };

    for (i, ticker) in tickers.iter().enumerate() {
        let cached = cache.get(ticker.as_str());
        tracing::info!(ticker = %ticker, n = i + 1, of = tickers.len(), "processing");
        match reconcile_ticker(ticker, cached, scope, scrapers, ctx).await {
            Ok(rec) => {
                summary.reconciled += 1;
                out.push(rec);
            }
            Err(e) => match recover_ticker(ticker, cached, &e, policy, ctx) {
                Some(rec) => {
                    summary.recovered += 1;
                    out.push(rec);
                }
                None => summary.dropped += 1,
            },
        }
    }

    summary.exhausted_sources = ctx.exhausted().map(str::to_string).collect();
    Ok((out, summary))
}

/// One complete run against the configured data file.
pub async fn run_once(
    cfg: &CollectorConfig,
    scrapers: &[Box<dyn SourceScraper>],
    tickers: &[String],
    scope: &Scope,
    exclude: &[String],
) -> Result<RunSummary> {
    if scrapers.is_empty() {
        bail!("no sources configured; set fixture_dir or a base_url per source");
    }
    // An empty list would rewrite the dataset as `[]`.
    if tickers.is_empty() {
        tracing::warn!(path = %cfg.data_file.display(), "no tickers to process; dataset left untouched");
        return Ok(RunSummary::default());
    }
    let now = Utc::now().with_timezone(&cfg.utc_offset()?);
    let mut ctx = RunContext::new(now, cfg.freshness_days).with_exclude(exclude.iter().cloned());

    let cached = store::load_records(&cfg.data_file);
    tracing::info!(
        cached = cached.len(),
        tickers = tickers.len(),
        ?scope,
        "run started"
    );

    let (records, summary) =
        collect_records(tickers, cached, scope, scrapers, &mut ctx, cfg.missing_ticker).await?;
    store::save_records(&cfg.data_file, &records)?;

    gauge!("collector_last_run_ts").set(Utc::now().timestamp() as f64);
    tracing::info!(
        reconciled = summary.reconciled,
        recovered = summary.recovered,
        dropped = summary.dropped,
        exhausted = ?summary.exhausted_sources,
        "run finished"
    );
    Ok(summary)
}
