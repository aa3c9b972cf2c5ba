// tests/common/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use fundamentals_collector::sources::SourceSchema;
use fundamentals_collector::{FetchError, RawField, RunContext, SourceScraper};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Scripted collaborator: answers per ticker, records every ticker it was asked for.
pub struct MockScraper {
    pub schema: &'static SourceSchema,
    pub answers: HashMap<String, Result<Vec<RawField>, FetchError>>,
    pub default: Result<Vec<RawField>, FetchError>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockScraper {
    pub fn new(schema: &'static SourceSchema, default: Vec<RawField>) -> Self {
        Self {
            schema,
            answers: HashMap::new(),
            default: Ok(default),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn answer(mut self, ticker: &str, outcome: Result<Vec<RawField>, FetchError>) -> Self {
        self.answers.insert(ticker.to_string(), outcome);
        self
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl SourceScraper for MockScraper {
    fn schema(&self) -> &'static SourceSchema {
        self.schema
    }

    async fn fetch(&self, ticker: &str) -> Result<Vec<RawField>, FetchError> {
        self.calls.lock().unwrap().push(ticker.to_string());
        self.answers
            .get(ticker)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }
}

pub fn now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-03-20T10:00:00-03:00").unwrap()
}

pub fn ctx() -> RunContext {
    RunContext::new(now(), 5)
}
