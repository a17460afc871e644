//! Aggregate statistics over the dream journal.
//!
//! Pure functions over a slice of dreams; the store exposes them with the
//! current clock, tests call them with a pinned date.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::model::Dream;

/// Aggregate numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamStats {
    /// Number of journaled dreams.
    pub total: usize,
    /// Dreams dated within the trailing 7 days, inclusive.
    pub this_week: usize,
    /// Dreams reported as lucid.
    pub lucid_count: usize,
    /// Share of lucid dreams, in percent (0 when the journal is empty).
    pub lucid_percentage: f64,
    /// Mean mood weight, one decimal place (3.0 when the journal is empty).
    pub average_mood: f64,
}

/// Occurrence count for one dream symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolCount {
    pub symbol: String,
    pub count: usize,
}

/// Computes journal statistics as of `today`.
pub fn compute_stats(dreams: &[Dream], today: NaiveDate) -> DreamStats {
    let total = dreams.len();
    let week_start = today - Days::new(7);
    let this_week = dreams
        .iter()
        .filter(|d| d.date >= week_start && d.date <= today)
        .count();
    let lucid_count = dreams.iter().filter(|d| d.lucid).count();
    let lucid_percentage = if total > 0 {
        lucid_count as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    let average_mood = if total > 0 {
        let sum: u32 = dreams.iter().map(|d| u32::from(d.mood.weight())).sum();
        (sum as f64 / total as f64 * 10.0).round() / 10.0
    } else {
        3.0
    };

    DreamStats {
        total,
        this_week,
        lucid_count,
        lucid_percentage,
        average_mood,
    }
}

/// Counts symbol occurrences across the journal, most frequent first,
/// truncated to `limit`.
///
/// Ties are broken alphabetically so the ordering is stable.
pub fn symbol_distribution(dreams: &[Dream], limit: usize) -> Vec<SymbolCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for dream in dreams {
        for symbol in &dream.symbols {
            *counts.entry(symbol.as_str()).or_insert(0) += 1;
        }
    }

    let mut distribution: Vec<SymbolCount> = counts
        .into_iter()
        .map(|(symbol, count)| SymbolCount {
            symbol: symbol.to_string(),
            count,
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.symbol.cmp(&b.symbol)));
    distribution.truncate(limit);
    distribution
}
