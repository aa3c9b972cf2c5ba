// src/ingest/mod.rs
pub mod config;
pub mod providers;
pub mod types;

use chrono::{DateTime, Datelike, FixedOffset};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, histogram};
use once_cell::sync::OnceCell;

use crate::ingest::types::{FetchError, RawField, SourceScraper};
use crate::normalize::{normalize_json, normalize_scaled};
use crate::record::{FieldValue, SourceGroup, QUOTA_EXHAUSTED, TIMESTAMP_FORMAT};
use crate::sources::SourceSchema;

/// One-time metrics registration (so series carry descriptions once a recorder is installed).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("collector_fetch_total", "Source fetches attempted.");
        describe_counter!(
            "collector_fetch_errors_total",
            "Source fetches that ended in an error group."
        );
        describe_counter!(
            "collector_source_skipped_total",
            "Sources carried forward from cache instead of fetched."
        );
        describe_counter!(
            "collector_quota_exhausted_total",
            "Fetches that reported exhausted credentials."
        );
        describe_counter!(
            "collector_ticker_fallback_total",
            "Tickers that fell back to their cached record or were dropped."
        );
        describe_histogram!("collector_fetch_ms", "Source fetch time in milliseconds.");
        describe_gauge!("collector_last_run_ts", "Unix ts when the last run finished.");
    });
}

/// Clean scraped text: decode entities, strip stray tags, collapse whitespace.
pub fn clean_raw_text(s: &str) -> String {
    // 1) HTML entity decode
    let out = html_escape::decode_html_entities(s).to_string();

    // 2) Strip HTML tags
    static RE_TAGS: OnceCell<regex::Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
    let out = re_tags.replace_all(&out, "");

    // 3) Collapse whitespace (NBSP included)
    static RE_WS: OnceCell<regex::Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").expect("whitespace regex"));
    re_ws.replace_all(&out, " ").trim().to_string()
}

/// Assemble a complete group for `schema` from raw labeled pairs.
///
/// Numeric keys go through the normalizer, text keys keep the cleaned text. The first
/// non-null value seen for a key wins; unknown labels are ignored.
pub fn build_group(schema: &SourceSchema, raw: &[RawField], current_year: i32) -> SourceGroup {
    let mut group = schema.empty_group();
    for field in raw {
        let Some(key) = schema.key_for_label(&field.label, current_year) else {
            tracing::debug!(source = schema.name, label = %field.label, "unmapped label");
            continue;
        };
        if group.get(&key).is_some_and(|v| !v.is_null()) {
            continue;
        }

        let cleaned = match &field.value {
            serde_json::Value::String(s) => serde_json::Value::String(clean_raw_text(s)),
            other => other.clone(),
        };
        let value = if !schema.is_numeric(&key) {
            match cleaned {
                serde_json::Value::String(s) if s.is_empty() => FieldValue::Null,
                serde_json::Value::String(s) => FieldValue::Text(s),
                serde_json::Value::Null => FieldValue::Null,
                other => FieldValue::Text(other.to_string()),
            }
        } else if schema.value_pow10 > 0 {
            normalize_scaled(cleaned.as_str(), schema.value_pow10)
        } else {
            normalize_json(&cleaned)
        };
        group.insert(key.into_owned(), value);
    }
    group
}

/// Fetch one source and turn the outcome into a group.
///
/// Source failures and quota exhaustion become an error group (null values plus a message in
/// `<source>_erro`). Only [`FetchError::Fatal`] is returned as an error.
pub async fn fetch_group(
    scraper: &dyn SourceScraper,
    ticker: &str,
    now: &DateTime<FixedOffset>,
) -> Result<SourceGroup, FetchError> {
    ensure_metrics_described();
    let schema = scraper.schema();
    let t0 = std::time::Instant::now();
    counter!("collector_fetch_total").increment(1);

    let outcome = scraper.fetch(ticker).await;
    histogram!("collector_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);

    match outcome {
        Ok(raw) => {
            let mut group = build_group(schema, &raw, now.year());
            if let Some(ts) = schema.timestamp_key() {
                group.insert(ts, now.format(TIMESTAMP_FORMAT).to_string());
            }
            tracing::debug!(ticker, source = schema.name, raw = raw.len(), "source fetched");
            Ok(group)
        }
        Err(FetchError::QuotaExhausted) => {
            tracing::warn!(ticker, source = schema.name, "credentials exhausted");
            counter!("collector_quota_exhausted_total").increment(1);
            let mut group = schema.empty_group();
            group.set_error(QUOTA_EXHAUSTED);
            Ok(group)
        }
        Err(FetchError::Source(msg)) => {
            tracing::warn!(ticker, source = schema.name, error = %msg, "source fetch failed");
            counter!("collector_fetch_errors_total").increment(1);
            let mut group = schema.empty_group();
            group.set_error(format!("{}: {msg}", schema.display));
            Ok(group)
        }
        Err(e @ FetchError::Fatal(_)) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{fundamentus, investidor10, investsite_passivo};

    #[test]
    fn clean_raw_text_decodes_and_collapses() {
        let s = "  R$&nbsp;&nbsp;<b>207,42</b>\n Bilhões ";
        assert_eq!(clean_raw_text(s), "R$ 207,42 Bilhões");
    }

    #[test]
    fn first_non_null_value_wins() {
        let raw = vec![
            RawField::text("Receita Líquida", "-"),
            RawField::text("Receita Líquida", "1.000"),
            RawField::text("Receita Líquida", "2.000"),
        ];
        let g = build_group(&fundamentus::SCHEMA, &raw, 2026);
        assert_eq!(
            g.get("fundamentus_receita_liquida_12m"),
            Some(&FieldValue::Int(1000))
        );
    }

    #[test]
    fn text_fields_skip_the_normalizer() {
        let raw = vec![
            RawField::text("Setor", " Bancos "),
            RawField::text("Empresa", ""),
            RawField::text("P/L", "8,51"),
            RawField::text("Not a label", "1"),
        ];
        let g = build_group(&fundamentus::SCHEMA, &raw, 2026);
        assert_eq!(g.get("fundamentus_setor"), Some(&FieldValue::from("Bancos")));
        assert_eq!(g.get("fundamentus_empresa"), Some(&FieldValue::Null));
        assert_eq!(g.get("fundamentus_pl"), Some(&FieldValue::Float(8.51)));
        assert_eq!(g.error(), "");
        assert!(g.fields.keys().all(|k| k.starts_with("fundamentus_")));
    }

    #[test]
    fn thousands_sheet_is_scaled() {
        let raw = vec![RawField::text("Passivo Total", "1.234.567")];
        let g = build_group(&investsite_passivo::SCHEMA, &raw, 2026);
        assert_eq!(
            g.get("investsitepassivo_passivo_total"),
            Some(&FieldValue::Int(1_234_567_000))
        );
    }

    #[test]
    fn upper_cased_titles_match() {
        let raw = vec![RawField::text("Dividend Yield", "7,96%")];
        let g = build_group(&investidor10::SCHEMA, &raw, 2026);
        assert_eq!(
            g.get("investidor10_dy_percentual"),
            Some(&FieldValue::Float(7.96))
        );
    }
}
