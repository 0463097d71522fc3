//! Rule metrics (C4): support, error, length, and confidence, derived purely
//! from the evaluator's output.

use crate::atom::Atom;
use crate::dataset::{Dataset, Labels};
use crate::evaluate::evaluate;
use crate::rule::Rule;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub support: f64,
    pub error: f64,
    pub length: usize,
    pub confidence: f64,
}

/// `error` is `1.0` when the rule fires on nothing, so an always-wrong rule
/// and a never-firing rule both sort last under the "min error" tie-break in
/// `cover`.
pub fn compute_metrics<A, Y, Info>(
    rule: &Rule<A, Y, Info>,
    dataset: &impl Dataset<Atom = A>,
    labels: &impl Labels<Label = Y>,
    rows: &[usize],
) -> Metrics
where
    A: Atom,
    Y: Clone + PartialEq,
{
    let eval = evaluate(rule, dataset, labels, rows);
    let n_sat = eval.idxs_sat.len();
    let support = n_sat as f64 / rows.len().max(1) as f64;
    let error = if n_sat == 0 {
        1.0
    } else {
        let wrong = eval
            .cons_sat
            .iter()
            .filter(|c| matches!(c, Some(false)))
            .count();
        wrong as f64 / n_sat as f64
    };
    Metrics {
        support,
        error,
        length: rule.length(),
        confidence: 1.0 - error,
    }
}
