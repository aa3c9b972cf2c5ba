// src/ingest/providers/fixture.rs
//! Offline collaborator: raw labeled pairs stored as `<dir>/<source>/<TICKER>.json`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::ingest::types::{FetchError, RawField, SourceScraper};
use crate::sources::SourceSchema;

pub struct FixtureScraper {
    schema: &'static SourceSchema,
    dir: PathBuf,
}

impl FixtureScraper {
    pub fn new(schema: &'static SourceSchema, dir: impl Into<PathBuf>) -> Self {
        Self {
            schema,
            dir: dir.into(),
        }
    }

    pub fn path_for(&self, ticker: &str) -> PathBuf {
        self.dir
            .join(self.schema.name)
            .join(format!("{}.json", ticker.to_uppercase()))
    }

    fn parse(path: &Path, content: &str) -> Result<Vec<RawField>, FetchError> {
        serde_json::from_str(content)
            .map_err(|e| FetchError::Source(format!("invalid fixture {}: {e}", path.display())))
    }
}

#[async_trait]
impl SourceScraper for FixtureScraper {
    fn schema(&self) -> &'static SourceSchema {
        self.schema
    }

    async fn fetch(&self, ticker: &str) -> Result<Vec<RawField>, FetchError> {
        let path = self.path_for(ticker);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FetchError::Source(format!("reading {}: {e}", path.display())))?;
        Self::parse(&path, &content)
    }
}
