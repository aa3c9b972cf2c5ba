// src/ingest/types.rs
use thiserror::Error;

use crate::sources::SourceSchema;

/// One labeled value as extracted from a page, before any normalization.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct RawField {
    pub label: String, // e.g. "P/L", "Dividend Yield"
    #[serde(default)]
    pub value: serde_json::Value, // usually a string; anything else normalizes to null
}

impl RawField {
    pub fn text(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: serde_json::Value::String(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The source failed for this ticker; other sources carry on.
    #[error("{0}")]
    Source(String),
    /// Every credential for the source is spent for this run.
    #[error("all credentials exhausted")]
    QuotaExhausted,
    /// The ticker cannot be processed at all (e.g. unknown symbol).
    #[error("fatal: {0}")]
    Fatal(String),
}

/// Fetch collaborator for one source.
#[async_trait::async_trait]
pub trait SourceScraper: Send + Sync {
    fn schema(&self) -> &'static SourceSchema;
    async fn fetch(&self, ticker: &str) -> Result<Vec<RawField>, FetchError>;

    fn name(&self) -> &'static str {
        self.schema().name
    }
}
