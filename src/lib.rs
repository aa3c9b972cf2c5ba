// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod ingest;
pub mod normalize;
pub mod record;
pub mod reconcile;
pub mod run;
pub mod sources;
pub mod store;
pub mod tickers;

// ---- Re-exports for stable public API ----
pub use crate::ingest::types::{FetchError, RawField, SourceScraper};
pub use crate::normalize::normalize_value;
pub use crate::record::{FieldRecord, FieldValue, SourceGroup};
pub use crate::reconcile::{reconcile_ticker, MissingTickerPolicy, RunContext, Scope};
