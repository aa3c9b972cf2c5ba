// src/reconcile.rs
//! # Record Reconciler
//! Decides per ticker and per source whether to keep the cached group, fetch a fresh one, or
//! restore the cache after a failure, and assembles the resulting [`FieldRecord`].
//!
//! Run-wide state (clock, freshness window, exhausted sources) lives in an explicit
//! [`RunContext`] created at the start of each run and threaded through every call.

use chrono::{DateTime, FixedOffset, NaiveDate};
use metrics::counter;
use serde::Deserialize;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::ingest::{ensure_metrics_described, fetch_group, types::FetchError, types::SourceScraper};
use crate::record::{FieldRecord, SourceGroup, TICKER_KEY, TIMESTAMP_FORMAT, UPDATED_AT_KEY};
use crate::sources::SourceSchema;

pub const DEFAULT_FRESHNESS_DAYS: i64 = 5;

/// Key carried by placeholder records.
pub const PLACEHOLDER_ERROR_KEY: &str = "erro";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Every configured source, subject to freshness, exhaustion and exclusions.
    Full,
    /// Exactly one source, fetched regardless of freshness (unless its credentials ran out this
    /// run); everything else passes through from cache.
    SingleSource(String),
}

/// What to emit for a ticker that failed outright and has no cached record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTickerPolicy {
    #[default]
    Drop,
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    QuotaExhausted,
    Fresh { age_days: i64 },
    Excluded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePlan {
    Fetch,
    Skip(SkipReason),
}

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("no collaborator for source {0:?}")]
    UnknownSource(String),
    #[error("fetching {ticker}: {error}")]
    Fetch {
        ticker: String,
        #[source]
        error: FetchError,
    },
}

/// State shared by every ticker of one run. Never persisted.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub now: DateTime<FixedOffset>,
    pub freshness_days: i64,
    pub exclude: BTreeSet<String>,
    exhausted: BTreeSet<String>,
}

impl RunContext {
    pub fn new(now: DateTime<FixedOffset>, freshness_days: i64) -> Self {
        Self {
            now,
            freshness_days: freshness_days.max(1),
            exclude: BTreeSet::new(),
            exhausted: BTreeSet::new(),
        }
    }

    pub fn with_exclude<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(sources.into_iter().map(Into::into));
        self
    }

    pub fn is_exhausted(&self, source: &str) -> bool {
        self.exhausted.contains(source)
    }

    pub fn mark_exhausted(&mut self, source: &str) {
        if self.exhausted.insert(source.to_string()) {
            tracing::warn!(source, "quota exhausted; source skipped for the rest of the run");
        }
    }

    pub fn exhausted(&self) -> impl Iterator<Item = &str> {
        self.exhausted.iter().map(String::as_str)
    }

    pub fn timestamp(&self) -> String {
        self.now.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

/// Whole days between the date in the first 10 characters of `stamp` and `today`.
/// `None` when the stamp does not start with a `%Y-%m-%d` date.
pub fn freshness_age(stamp: &str, today: NaiveDate) -> Option<i64> {
    let date = stamp.trim().get(..10)?;
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some((today - parsed).num_days())
}

/// Full-scope decision for one source of one ticker.
pub fn plan_source(
    schema: &SourceSchema,
    cached: Option<&FieldRecord>,
    ctx: &RunContext,
) -> SourcePlan {
    if ctx.exclude.iter().any(|s| s.eq_ignore_ascii_case(schema.name)) {
        return SourcePlan::Skip(SkipReason::Excluded);
    }
    if ctx.is_exhausted(schema.name) {
        return SourcePlan::Skip(SkipReason::QuotaExhausted);
    }
    let stamp = schema
        .timestamp_key()
        .and_then(|key| cached?.get(&key)?.as_str().map(str::to_string));
    if let Some(age) = stamp.and_then(|s| freshness_age(&s, ctx.today())) {
        if age < ctx.freshness_days {
            return SourcePlan::Skip(SkipReason::Fresh { age_days: age });
        }
    }
    SourcePlan::Fetch
}

/// Reconcile one ticker against its cached record.
///
/// An `Err` is a whole-ticker failure; callers recover it with [`recover_ticker`].
pub async fn reconcile_ticker(
    ticker: &str,
    cached: Option<&FieldRecord>,
    scope: &Scope,
    scrapers: &[Box<dyn SourceScraper>],
    ctx: &mut RunContext,
) -> Result<FieldRecord, ReconcileError> {
    ensure_metrics_described();
    match scope {
        Scope::Full => reconcile_full(ticker, cached, scrapers, ctx).await,
        Scope::SingleSource(name) => {
            let scraper = scrapers
                .iter()
                .find(|s| s.name().eq_ignore_ascii_case(name))
                .ok_or_else(|| ReconcileError::UnknownSource(name.clone()))?;
            reconcile_single(ticker, cached, scraper.as_ref(), ctx).await
        }
    }
}

async fn reconcile_full(
    ticker: &str,
    cached: Option<&FieldRecord>,
    scrapers: &[Box<dyn SourceScraper>],
    ctx: &mut RunContext,
) -> Result<FieldRecord, ReconcileError> {
    let mut out = FieldRecord::new(ticker);

    // Namespaces of sources not collected in this run pass through from cache.
    if let Some(c) = cached {
        let prefixes: Vec<String> = scrapers.iter().map(|s| s.schema().prefix()).collect();
        for (k, v) in c.iter() {
            if k == TICKER_KEY || k == UPDATED_AT_KEY {
                continue;
            }
            if !prefixes.iter().any(|p| k.starts_with(p.as_str())) {
                out.insert(k.clone(), v.clone());
            }
        }
    }

    for scraper in scrapers {
        let schema = scraper.schema();
        let cached_group = cached.and_then(|c| c.group(schema.name));

        let group = match plan_source(schema, cached, ctx) {
            SourcePlan::Skip(reason) => {
                tracing::debug!(ticker, source = schema.name, ?reason, "carrying cached group");
                counter!("collector_source_skipped_total").increment(1);
                carried_group(schema, cached_group)
            }
            SourcePlan::Fetch => {
                let mut fresh = fetch_group(scraper.as_ref(), ticker, &ctx.now)
                    .await
                    .map_err(|error| ReconcileError::Fetch {
                        ticker: ticker.to_string(),
                        error,
                    })?;
                if fresh.is_quota_exhausted() {
                    ctx.mark_exhausted(schema.name);
                    if let Some(g) = &cached_group {
                        fresh.overlay(g);
                    }
                }
                fresh
            }
        };
        out.merge_group(&group);
    }

    out.insert(TICKER_KEY, ticker);
    out.insert(UPDATED_AT_KEY, ctx.timestamp());
    Ok(out)
}

/// Cached group completed with nulls for keys it lacks, or an empty group when there is none.
fn carried_group(schema: &SourceSchema, cached: Option<SourceGroup>) -> SourceGroup {
    match cached {
        Some(mut g) => {
            schema.fill_missing(&mut g);
            g
        }
        None => schema.empty_group(),
    }
}

async fn reconcile_single(
    ticker: &str,
    cached: Option<&FieldRecord>,
    scraper: &dyn SourceScraper,
    ctx: &mut RunContext,
) -> Result<FieldRecord, ReconcileError> {
    let schema = scraper.schema();
    let mut out = cached.cloned().unwrap_or_else(|| FieldRecord::new(ticker));
    let cached_group = cached.and_then(|c| c.group(schema.name));

    // Exhausted credentials never regress cached data, here as in the full scope.
    if ctx.is_exhausted(schema.name) {
        tracing::debug!(ticker, source = schema.name, "quota exhausted; keeping cached group");
        counter!("collector_source_skipped_total").increment(1);
        out.replace_group(&carried_group(schema, cached_group));
    } else {
        let mut group = fetch_group(scraper, ticker, &ctx.now)
            .await
            .map_err(|error| ReconcileError::Fetch {
                ticker: ticker.to_string(),
                error,
            })?;
        if group.is_quota_exhausted() {
            ctx.mark_exhausted(schema.name);
            if let Some(g) = &cached_group {
                group.overlay(g);
            }
        }
        out.replace_group(&group);
    }
    out.insert(TICKER_KEY, ticker);
    out.insert(UPDATED_AT_KEY, ctx.timestamp());
    Ok(out)
}

/// Output for a ticker whose reconciliation failed: the cached record verbatim, else what the
/// policy says (`None` drops the ticker from the run's output).
pub fn recover_ticker(
    ticker: &str,
    cached: Option<&FieldRecord>,
    error: &ReconcileError,
    policy: MissingTickerPolicy,
    ctx: &RunContext,
) -> Option<FieldRecord> {
    counter!("collector_ticker_fallback_total").increment(1);
    if let Some(c) = cached {
        tracing::warn!(ticker, %error, "ticker failed; keeping cached record");
        return Some(c.clone());
    }
    match policy {
        MissingTickerPolicy::Drop => {
            tracing::warn!(ticker, %error, "ticker failed with no cached record; dropped");
            None
        }
        MissingTickerPolicy::Placeholder => {
            tracing::warn!(ticker, %error, "ticker failed with no cached record; placeholder");
            let mut rec = FieldRecord::new(ticker);
            rec.insert(UPDATED_AT_KEY, ctx.timestamp());
            rec.insert(PLACEHOLDER_ERROR_KEY, error.to_string());
            Some(rec)
        }
    }
}
