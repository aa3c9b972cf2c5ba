// src/tickers.rs
use anyhow::{Context, Result};
use std::path::Path;

const EXCHANGE_PREFIX: &str = "BVMF:";

/// Load the ticker list from a local file.
///
/// A file mentioning `BVMF:` is read as a spreadsheet CSV export: the header row is skipped and
/// only first-column cells carrying the prefix are kept. Any other file is a plain list with one
/// ticker per line (first comma-separated field), ignoring blanks and `#` comments.
pub fn load_tickers_from(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading ticker list from {}", path.display()))?;
    Ok(parse_tickers(&content))
}

pub fn parse_tickers(content: &str) -> Vec<String> {
    let raw: Vec<String> = if content.to_ascii_uppercase().contains(EXCHANGE_PREFIX) {
        content
            .lines()
            .skip(1)
            .filter_map(first_field)
            .filter_map(|cell| {
                let up = cell.to_ascii_uppercase();
                up.strip_prefix(EXCHANGE_PREFIX).map(|t| t.trim().to_string())
            })
            .collect()
    } else {
        content
            .lines()
            .map(str::trim)
            .filter(|l| !l.starts_with('#'))
            .filter_map(first_field)
            .map(|t| t.to_ascii_uppercase())
            .collect()
    };
    clean_list(raw)
}

fn first_field(line: &str) -> Option<&str> {
    let cell = line.split(',').next()?.trim().trim_matches('"').trim();
    (!cell.is_empty()).then_some(cell)
}

// Keeps first occurrence order; duplicates would be processed twice otherwise.
fn clean_list(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}
