//! Pruner (C5): drop conjuncts whose removal doesn't worsen error beyond a
//! decay threshold. Works generically over `Rule::length`/`Rule::slice`, so
//! the same loop handles both flat and multi-modal antecedents — dropping
//! one atom in the former is the same move as dropping one whole modality in
//! the latter.

use crate::atom::Atom;
use crate::config::PruningMode;
use crate::dataset::{Dataset, Labels};
use crate::metrics::compute_metrics;
use crate::rule::Rule;

pub struct PruneConfig {
    pub s: f64,
    pub tau: f64,
}

impl PruneConfig {
    pub fn from_mode(mode: PruningMode) -> Option<Self> {
        match mode {
            PruningMode::Disabled => None,
            PruningMode::Enabled { s, tau } => Some(Self { s, tau }),
        }
    }
}

/// Walk the rule's conjuncts in descending original order, tentatively
/// dropping each one and keeping the drop only if the relative error
/// increase stays under `tau`. Never reduces a rule below one conjunct.
pub fn prune<A, Y, Info>(
    rule: &Rule<A, Y, Info>,
    dataset: &impl Dataset<Atom = A>,
    labels: &impl Labels<Label = Y>,
    rows: &[usize],
    config: &PruneConfig,
) -> Rule<A, Y, Info>
where
    A: Atom,
    Y: Clone + PartialEq,
    Info: Clone,
{
    let n = rule.length();
    if n == 0 {
        return rule.slice(&[]);
    }

    let mut valid: Vec<usize> = (0..n).collect();
    let mut baseline = compute_metrics(&rule.slice(&valid), dataset, labels, rows).error;

    for i in (0..n).rev() {
        if valid.len() < 2 {
            break;
        }
        if !valid.contains(&i) {
            continue;
        }
        let candidate: Vec<usize> = valid.iter().copied().filter(|&x| x != i).collect();
        let candidate_error = compute_metrics(&rule.slice(&candidate), dataset, labels, rows).error;
        let decay = (candidate_error - baseline) / baseline.max(config.s);
        if decay < config.tau {
            valid = candidate;
            baseline = candidate_error;
        }
    }

    rule.slice(&valid)
}
