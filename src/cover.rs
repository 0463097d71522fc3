//! Sequential coverer / STEL (C7): greedily pick the best surviving rule,
//! strip the instances it covers, and repeat until the default rule wins or
//! nothing is left to cover.
//!
//! The default rule is kept outside the candidate pool the whole time
//! (rather than threading an index into `candidates` through each removal),
//! so "the loop picked the default" is just "the winning slot was
//! `Slot::Default`" and there's no index bookkeeping to get wrong across
//! `Vec::remove` calls.

use crate::atom::Atom;
use crate::bestguess::bestguess;
use crate::cancel::CancellationToken;
use crate::dataset::{Dataset, Labels};
use crate::decision_list::DecisionList;
use crate::error::ExtractError;
use crate::evaluate::ant_holds;
use crate::metrics::{compute_metrics, Metrics};
use crate::rule::Rule;
use rand::Rng;
use rayon::prelude::*;

pub struct CoverConfig {
    pub min_frequency: f64,
}

enum Slot {
    Candidate(usize),
    Default,
}

pub fn cover<A, Y, Info, D, L>(
    selected: Vec<Rule<A, Y, Info>>,
    dataset: &D,
    labels: &L,
    config: &CoverConfig,
    rng: &mut impl Rng,
    cancel: &CancellationToken,
) -> Result<DecisionList<A, Y, Info>, ExtractError>
where
    A: Atom,
    Y: Clone + PartialEq + Ord + std::hash::Hash + Send + Sync,
    Info: Clone + Default + Send + Sync,
    D: Dataset<Atom = A>,
    L: Labels<Label = Y>,
{
    let full_rows: Vec<usize> = (0..dataset.nrows()).collect();
    let default_label = bestguess(labels, &full_rows)?;
    let mut default = Rule::new(
        crate::antecedent::Antecedent::tautology(),
        default_label,
        Info::default(),
    );

    // Rules that don't clear min_frequency on the *original* dataset are
    // dropped before the loop starts; the default rule is exempt since its
    // support is always 1.0 by construction.
    let mut candidates: Vec<Rule<A, Y, Info>> = selected
        .into_iter()
        .filter(|rule| {
            compute_metrics(rule, dataset, labels, &full_rows).support >= config.min_frequency
        })
        .collect();

    let mut result: Vec<Rule<A, Y, Info>> = Vec::new();
    let mut d_rows = full_rows.clone();

    loop {
        if cancel.is_cancelled() {
            return Err(ExtractError::Cancelled);
        }

        let slots: Vec<Slot> = (0..candidates.len())
            .map(Slot::Candidate)
            .chain(std::iter::once(Slot::Default))
            .collect();
        let metrics: Vec<Metrics> = slots
            .par_iter()
            .map(|slot| {
                let rule = match slot {
                    Slot::Candidate(i) => &candidates[*i],
                    Slot::Default => &default,
                };
                compute_metrics(rule, dataset, labels, &d_rows)
            })
            .collect();

        let best = pick_best(&metrics, rng)?;

        match slots[best] {
            Slot::Default => {
                return Ok(DecisionList::new(result, default.consequent().clone()));
            }
            Slot::Candidate(i) => {
                let chosen = candidates[i].clone();
                let new_d_rows: Vec<usize> = d_rows
                    .iter()
                    .copied()
                    .filter(|&row| !ant_holds(chosen.antecedent(), dataset, row))
                    .collect();
                result.push(chosen);
                candidates.remove(i);

                if new_d_rows.is_empty() {
                    let default_label = bestguess(labels, &full_rows)?;
                    return Ok(DecisionList::new(result, default_label));
                }

                d_rows = new_d_rows;
                let refreshed = bestguess(labels, &d_rows)?;
                default = Rule::new(
                    default.antecedent().clone(),
                    refreshed,
                    default.info().clone(),
                );
            }
        }
    }
}

/// min error -> max support -> min length -> uniform random among ties.
fn pick_best(metrics: &[Metrics], rng: &mut impl Rng) -> Result<usize, ExtractError> {
    if metrics.is_empty() {
        return Err(ExtractError::InternalInvariantViolated(
            "STEL has no candidate rules, not even the default".into(),
        ));
    }
    let min_error = metrics
        .iter()
        .map(|m| m.error)
        .fold(f64::INFINITY, f64::min);
    let by_error: Vec<usize> = (0..metrics.len())
        .filter(|&i| metrics[i].error == min_error)
        .collect();

    let max_support = by_error
        .iter()
        .map(|&i| metrics[i].support)
        .fold(f64::NEG_INFINITY, f64::max);
    let by_support: Vec<usize> = by_error
        .into_iter()
        .filter(|&i| metrics[i].support == max_support)
        .collect();

    let min_length = by_support
        .iter()
        .map(|&i| metrics[i].length)
        .min()
        .expect("by_support is non-empty");
    let by_length: Vec<usize> = by_support
        .into_iter()
        .filter(|&i| metrics[i].length == min_length)
        .collect();

    if by_length.len() == 1 {
        Ok(by_length[0])
    } else {
        Ok(by_length[rng.gen_range(0..by_length.len())])
    }
}
