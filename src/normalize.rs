// src/normalize.rs
//! # Value Normalizer
//! Turns localized (pt-BR) numeric text scraped from a page into a canonical number.
//!
//! Steps, in order:
//! 1. lowercase + trim; `None`, `""` and `"-"` are null
//! 2. strip `r$` and `%`
//! 3. magnitude word: `bi`/`bilhões` → ×10⁹, else `mi`/`milhões` → ×10⁶
//! 4. drop `.` (thousands), then `,` → `.` (decimal point)
//! 5. the cleaned text must look like `-?digits(.digits)?`, otherwise null
//! 6. integral results come back as [`FieldValue::Int`], the rest as [`FieldValue::Float`]
//!
//! Integrality is decided on the exact decimal digits, not on a float product.
//! Never panics; every failure is `Null`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::FieldValue;

const SENTINEL: &str = "-";

static RE_BILLIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"bi(lhões)?").expect("billions regex"));
static RE_MILLIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"mi(lhões)?").expect("millions regex"));
static RE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?)([0-9]+)(?:\.([0-9]+))?$").expect("number regex"));

/// Normalize one raw token.
pub fn normalize_value(raw: Option<&str>) -> FieldValue {
    match parse_localized(raw) {
        Some(n) => n.to_value(),
        None => FieldValue::Null,
    }
}

/// Same as [`normalize_value`], for tokens that arrive as JSON. Non-strings are null.
pub fn normalize_json(raw: &serde_json::Value) -> FieldValue {
    normalize_value(raw.as_str())
}

/// Normalize and shift by `10^pow10`, truncating toward zero.
/// Used for pages that report amounts in thousands.
pub fn normalize_scaled(raw: Option<&str>, pow10: u32) -> FieldValue {
    match parse_localized(raw) {
        Some(mut n) => {
            n.exp += pow10;
            n.truncated()
        }
        None => FieldValue::Null,
    }
}

/// Decimal value `sign · int.frac · 10^exp`, kept as digit strings.
#[derive(Debug, Clone, PartialEq)]
struct LocalizedNumber {
    negative: bool,
    int_digits: String,
    frac_digits: String,
    exp: u32,
}

fn parse_localized(raw: Option<&str>) -> Option<LocalizedNumber> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == SENTINEL {
        return None;
    }

    let mut s = trimmed.to_lowercase().replace("r$", "").replace('%', "");
    s = s.trim().to_string();

    let mut exp = 0u32;
    if s.contains("bi") {
        exp = 9;
        s = RE_BILLIONS.replace_all(&s, "").trim().to_string();
    } else if s.contains("mi") {
        exp = 6;
        s = RE_MILLIONS.replace_all(&s, "").trim().to_string();
    }

    // Thousands first, then decimal. Reversing this breaks "1.234,56".
    let s = s.replace('.', "").replace(',', ".");

    let caps = RE_NUMBER.captures(&s)?;
    let frac_digits = caps
        .get(3)
        .map(|m| m.as_str().trim_end_matches('0').to_string())
        .unwrap_or_default();
    Some(LocalizedNumber {
        negative: !caps[1].is_empty(),
        int_digits: caps[2].to_string(),
        frac_digits,
        exp,
    })
}

impl LocalizedNumber {
    fn to_value(&self) -> FieldValue {
        if self.frac_digits.len() <= self.exp as usize {
            if let Some(i) = self.integer_part() {
                return FieldValue::Int(i);
            }
        }
        self.to_f64().map(FieldValue::Float).unwrap_or_default()
    }

    fn truncated(&self) -> FieldValue {
        match self.integer_part() {
            Some(i) => FieldValue::Int(i),
            None => self
                .to_f64()
                .map(|f| FieldValue::Float(f.trunc()))
                .unwrap_or_default(),
        }
    }

    /// Integer part after applying `exp`; `None` on i64 overflow.
    fn integer_part(&self) -> Option<i64> {
        let shift = self.exp as usize;
        let mut digits = self.int_digits.clone();
        let frac: String = self.frac_digits.chars().take(shift).collect();
        digits.push_str(&frac);
        digits.push_str(&"0".repeat(shift - frac.len()));
        let magnitude: i64 = digits.parse().ok()?;
        Some(if self.negative { -magnitude } else { magnitude })
    }

    fn to_f64(&self) -> Option<f64> {
        let text = format!(
            "{}{}.{}",
            if self.negative { "-" } else { "" },
            self.int_digits,
            if self.frac_digits.is_empty() { "0" } else { &self.frac_digits }
        );
        let base: f64 = text.parse().ok()?;
        let v = base * 10f64.powi(self.exp as i32);
        v.is_finite().then_some(v)
    }
}
