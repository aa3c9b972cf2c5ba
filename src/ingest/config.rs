// src/ingest/config.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ingest::providers::{fixture::FixtureScraper, http::HttpScraper};
use crate::ingest::types::SourceScraper;
use crate::reconcile::MissingTickerPolicy;
use crate::sources;

const ENV_PATH: &str = "COLLECTOR_CONFIG_PATH";
const ENV_DATA_FILE: &str = "COLLECTOR_DATA_FILE";
const ENV_FRESHNESS: &str = "COLLECTOR_FRESHNESS_DAYS";

/// Run configuration. Every field has a default so an empty file is valid.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CollectorConfig {
    /// Cached record set (JSON array), read at start and rewritten at the end of a run.
    pub data_file: PathBuf,
    /// Ticker list used when the command line names none.
    pub tickers_file: Option<PathBuf>,
    /// Freshness window for gated sources, in days.
    pub freshness_days: i64,
    /// Offset of the local clock used for timestamps and freshness age.
    pub utc_offset_hours: i32,
    pub missing_ticker: MissingTickerPolicy,
    /// When set, every source reads `<fixture_dir>/<source>/<TICKER>.json` instead of HTTP.
    pub fixture_dir: Option<PathBuf>,
    pub http: HttpSettings,
    /// Per-source endpoint settings keyed by source name.
    pub sources: BTreeMap<String, SourceEndpoint>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HttpSettings {
    pub attempts: u32,
    pub backoff_ms: u64,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceEndpoint {
    pub base_url: Option<String>,
    pub api_keys: Vec<String>,
    /// Name of an env var holding comma-separated API keys.
    pub api_keys_env: Option<String>,
    pub disabled: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/dados_acoes.json"),
            tickers_file: None,
            freshness_days: 5,
            utc_offset_hours: -3,
            missing_ticker: MissingTickerPolicy::default(),
            fixture_dir: None,
            http: HttpSettings::default(),
            sources: BTreeMap::new(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff_ms: 1_000,
            timeout_secs: 20,
        }
    }
}

impl SourceEndpoint {
    /// Inline keys followed by the ones from `api_keys_env`, trimmed and without blanks.
    pub fn resolved_keys(&self) -> Vec<String> {
        let from_env = self
            .api_keys_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .unwrap_or_default();
        let mut keys: Vec<String> = Vec::new();
        for k in self.api_keys.iter().map(String::as_str).chain(from_env.split(',')) {
            let k = k.trim();
            if !k.is_empty() && !keys.iter().any(|x| x == k) {
                keys.push(k.to_string());
            }
        }
        keys
    }
}

impl CollectorConfig {
    fn sanitize(mut self) -> Self {
        self.freshness_days = self.freshness_days.max(1);
        self.utc_offset_hours = self.utc_offset_hours.clamp(-12, 14);
        self.http.attempts = self.http.attempts.max(1);
        self.sources = self
            .sources
            .into_iter()
            .filter_map(|(name, ep)| match sources::find(name.trim()) {
                Some(schema) => Some((schema.name.to_string(), ep)),
                None => {
                    tracing::warn!(source = %name, "ignoring settings for unknown source");
                    None
                }
            })
            .collect();
        self
    }

    fn apply_env(mut self) -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_DATA_FILE) {
            if !p.trim().is_empty() {
                self.data_file = PathBuf::from(p.trim());
            }
        }
        if let Ok(d) = std::env::var(ENV_FRESHNESS) {
            self.freshness_days = d
                .trim()
                .parse()
                .with_context(|| format!("{ENV_FRESHNESS} must be an integer, got {d:?}"))?;
        }
        Ok(self)
    }

    pub fn utc_offset(&self) -> Result<chrono::FixedOffset> {
        chrono::FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .ok_or_else(|| anyhow!("invalid utc_offset_hours {}", self.utc_offset_hours))
    }

    /// One collaborator per enabled built-in source, in built-in order.
    ///
    /// With `fixture_dir` set every enabled source reads fixtures. Otherwise only sources with a
    /// `base_url` get an HTTP collaborator; the rest are left out of the run.
    pub fn build_scrapers(&self) -> Vec<Box<dyn SourceScraper>> {
        let mut out: Vec<Box<dyn SourceScraper>> = Vec::new();
        let client = reqwest::Client::new();
        for schema in sources::builtin() {
            let ep = self.sources.get(schema.name).cloned().unwrap_or_default();
            if ep.disabled {
                continue;
            }
            if let Some(dir) = &self.fixture_dir {
                out.push(Box::new(FixtureScraper::new(schema, dir.clone())));
                continue;
            }
            let Some(base) = ep.base_url.as_deref().filter(|b| !b.trim().is_empty()) else {
                tracing::info!(source = schema.name, "no endpoint configured; source not collected");
                continue;
            };
            let scraper = HttpScraper::new(schema, base)
                .with_client(client.clone())
                .with_api_keys(ep.resolved_keys())
                .with_attempts(self.http.attempts)
                .with_backoff(Duration::from_millis(self.http.backoff_ms))
                .with_timeout(Duration::from_secs(self.http.timeout_secs));
            out.push(Box::new(scraper));
        }
        out
    }
}

/// Load configuration from an explicit path. Supports TOML or JSON formats.
pub fn load_config_from(path: &Path) -> Result<CollectorConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let cfg = parse_config(&content, ext.as_str())
        .with_context(|| format!("parsing config {}", path.display()))?;
    cfg.apply_env().map(CollectorConfig::sanitize)
}

/// Load configuration using env var + fallbacks:
/// 1) $COLLECTOR_CONFIG_PATH
/// 2) config/collector.toml
/// 3) config/collector.json
/// 4) defaults
pub fn load_config_default() -> Result<CollectorConfig> {
    if let Ok(p) = std::env::var(ENV_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_config_from(&pb);
        } else {
            return Err(anyhow!("{ENV_PATH} points to non-existent path"));
        }
    }
    let toml_p = PathBuf::from("config/collector.toml");
    if toml_p.exists() {
        return load_config_from(&toml_p);
    }
    let json_p = PathBuf::from("config/collector.json");
    if json_p.exists() {
        return load_config_from(&json_p);
    }
    CollectorConfig::default()
        .apply_env()
        .map(CollectorConfig::sanitize)
}

fn parse_config(s: &str, hint_ext: &str) -> Result<CollectorConfig> {
    if hint_ext == "json" || s.trim_start().starts_with('{') {
        return Ok(serde_json::from_str(s)?);
    }
    Ok(toml::from_str(s)?)
}
