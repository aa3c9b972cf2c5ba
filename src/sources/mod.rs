// src/sources/mod.rs
//! # Source Schemas
//! One declared descriptor per data provider: which page labels map to which record keys,
//! which keys hold text instead of numbers, and how the group is refreshed.
//!
//! The descriptor is shared by the fetch side (assembling a group from raw labeled text) and
//! by the reconciler (null-filled groups, error and timestamp keys), so the key set of a source
//! is defined in exactly one place.

pub mod fundamentus;
pub mod investidor10;
pub mod investsite_indicadores;
pub mod investsite_passivo;
pub mod statusinvest;

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::record::{group_prefix, FieldValue, SourceGroup};

/// How far back yearly oscillation rows are tracked (`ano_menos_1` .. `ano_menos_5`).
const YEARLY_OSCILLATION_DEPTH: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSchema {
    /// Key namespace, e.g. `"statusInvest"`.
    pub name: &'static str,
    /// Human label used in error messages.
    pub display: &'static str,
    /// Page label → record key, in page order.
    pub labels: &'static [(&'static str, &'static str)],
    /// Keys stored as text instead of going through the normalizer.
    pub non_numeric: &'static [&'static str],
    /// Numeric values are multiplied by `10^value_pow10` and truncated (pages in thousands).
    pub value_pow10: u32,
    /// Group is stamped on refresh and skipped while the stamp is within the freshness window.
    pub freshness_gated: bool,
    /// Compare labels case-insensitively (the page upper-cases its titles).
    pub case_insensitive_labels: bool,
    /// Rows labelled with a year map to `<name>_oscilacao_ano_*_percentual`.
    pub yearly_oscillation: bool,
}

impl SourceSchema {
    pub fn prefix(&self) -> String {
        group_prefix(self.name)
    }

    pub fn error_key(&self) -> String {
        format!("{}_erro", self.name)
    }

    pub fn timestamp_key(&self) -> Option<String> {
        self.freshness_gated
            .then(|| format!("{}_data_atualizacao", self.name))
    }

    /// Every data key of the source, ordered and without duplicates.
    /// Excludes the error and timestamp keys.
    pub fn field_keys(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        let yearly = if self.yearly_oscillation {
            self.yearly_keys()
        } else {
            Vec::new()
        };
        let keys = self
            .labels
            .iter()
            .map(|(_, key)| key.to_string())
            .chain(yearly);
        for key in keys {
            if seen.insert(key.clone()) {
                out.push(key);
            }
        }
        out
    }

    pub fn is_numeric(&self, key: &str) -> bool {
        !self.non_numeric.contains(&key)
    }

    /// Map a page label to its record key. `current_year` resolves yearly oscillation rows.
    pub fn key_for_label(&self, label: &str, current_year: i32) -> Option<Cow<'static, str>> {
        let label = label.trim();
        let hit = if self.case_insensitive_labels {
            let upper = label.to_uppercase();
            self.labels
                .iter()
                .find(|(l, _)| l.to_uppercase() == upper)
        } else {
            self.labels.iter().find(|(l, _)| *l == label)
        };
        if let Some((_, key)) = hit {
            return Some(Cow::Borrowed(*key));
        }

        if self.yearly_oscillation && !label.is_empty() && label.chars().all(|c| c.is_ascii_digit())
        {
            let year: i32 = label.parse().ok()?;
            return self.yearly_key(current_year - year).map(Cow::Owned);
        }
        None
    }

    /// All schema keys null, error key empty, timestamp null.
    pub fn empty_group(&self) -> SourceGroup {
        let mut g = SourceGroup::new(self.name);
        for key in self.field_keys() {
            g.insert(key, FieldValue::Null);
        }
        g.set_error("");
        if let Some(ts) = self.timestamp_key() {
            g.insert(ts, FieldValue::Null);
        }
        g
    }

    /// Add null entries for schema keys the group lacks. Existing values are untouched.
    pub fn fill_missing(&self, group: &mut SourceGroup) {
        let template = self.empty_group();
        for (k, v) in template.fields {
            group.fields.entry(k).or_insert(v);
        }
    }

    fn yearly_key(&self, years_back: i32) -> Option<String> {
        match years_back {
            0 => Some(format!("{}_oscilacao_ano_atual_percentual", self.name)),
            1..=YEARLY_OSCILLATION_DEPTH => Some(format!(
                "{}_oscilacao_ano_menos_{years_back}_percentual",
                self.name
            )),
            _ => None,
        }
    }

    fn yearly_keys(&self) -> Vec<String> {
        (0..=YEARLY_OSCILLATION_DEPTH)
            .filter_map(|n| self.yearly_key(n))
            .collect()
    }
}

/// The five built-in sources, in the order a full run queries them.
pub fn builtin() -> Vec<&'static SourceSchema> {
    vec![
        &investidor10::SCHEMA,
        &fundamentus::SCHEMA,
        &statusinvest::SCHEMA,
        &investsite_passivo::SCHEMA,
        &investsite_indicadores::SCHEMA,
    ]
}

/// Case-insensitive lookup by source name.
pub fn find(name: &str) -> Option<&'static SourceSchema> {
    builtin()
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
}
