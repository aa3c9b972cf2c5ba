// src/store.rs
//! Cached record set on disk: one JSON array of flat objects, one per ticker.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::record::FieldRecord;

/// Read the cached records. A missing, unreadable, or malformed file yields an empty set;
/// array items that are not valid records are skipped.
pub fn load_records(path: &Path) -> Vec<FieldRecord> {
    let content = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no cached records yet");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "reading cached records: {e:#}");
            return Vec::new();
        }
    };
    let items: Vec<serde_json::Value> = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(path = %path.display(), "cached records are not a JSON array: {e}");
            return Vec::new();
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<FieldRecord>(item) {
            Ok(rec) if rec.ticker().is_some() => out.push(rec),
            Ok(_) => tracing::warn!(idx, "skipping cached record without ticker"),
            Err(e) => tracing::warn!(idx, "skipping invalid cached record: {e}"),
        }
    }
    out
}

/// Map records by ticker; a later duplicate wins.
pub fn index_by_ticker(records: Vec<FieldRecord>) -> HashMap<String, FieldRecord> {
    records
        .into_iter()
        .filter_map(|r| r.ticker().map(str::to_string).map(|t| (t, r)))
        .collect()
}

/// Overwrite `path` with `records` as 4-space-indented UTF-8 JSON.
///
/// The data goes to a sibling temp file that is renamed into place, so a failed write leaves
/// the previous file intact.
pub fn save_records(path: &Path, records: &[FieldRecord]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    records
        .serialize(&mut ser)
        .context("serializing records")?;
    buf.push(b'\n');

    let tmp = path.with_extension("json.tmp");
    let mut f = fs::File::create(&tmp).with_context(|| format!("creating {}", tmp.display()))?;
    f.write_all(&buf)
        .and_then(|_| f.sync_all())
        .with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("renaming {} to {}", tmp.display(), path.display()))?;
    tracing::info!(path = %path.display(), records = records.len(), "records saved");
    Ok(())
}
