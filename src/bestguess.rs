//! Deterministic majority-label selector used to seed and refresh the
//! default rule in the sequential coverer.

use crate::dataset::Labels;
use crate::error::ExtractError;
use std::collections::BTreeMap;

/// The most frequent label among `rows`; ties broken lexicographically
/// (smallest label wins), by scanning label counts in ascending key order
/// and only replacing the incumbent on a strictly higher count.
pub fn bestguess<L: Labels>(labels: &L, rows: &[usize]) -> Result<L::Label, ExtractError> {
    if rows.is_empty() {
        return Err(ExtractError::InternalInvariantViolated(
            "bestguess called over an empty label set".into(),
        ));
    }
    let mut counts: BTreeMap<L::Label, usize> = BTreeMap::new();
    for &row in rows {
        *counts.entry(labels.get(row).clone()).or_insert(0) += 1;
    }
    let mut best: Option<(L::Label, usize)> = None;
    for (label, count) in counts {
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((label, count)),
        }
    }
    Ok(best.expect("counts is non-empty because rows is non-empty").0)
}
