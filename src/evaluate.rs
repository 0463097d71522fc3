//! Rule evaluator (C3): per-instance satisfaction and prediction over a row
//! view. Sequential within one rule — the parallel fan-out in C5/C6/C7
//! happens one level up, across rules.

use crate::antecedent::Antecedent;
use crate::atom::Atom;
use crate::dataset::{Dataset, Labels};
use crate::rule::Rule;

/// `ant_sat`, `cons_sat`, and `y_pred` are indexed by position within `rows`,
/// not by the original dataset row id — the same shape as the (possibly
/// shrunk) view they were computed over.
pub struct Evaluation<Y> {
    pub ant_sat: Vec<bool>,
    pub idxs_sat: Vec<usize>,
    pub cons_sat: Vec<Option<bool>>,
    pub y_pred: Vec<Option<Y>>,
}

/// Whether `rule`'s antecedent holds on `row`.
pub fn ant_holds<A: Atom>(antecedent: &Antecedent<A>, dataset: &impl Dataset<Atom = A>, row: usize) -> bool {
    antecedent.holds(dataset, row)
}

pub fn evaluate<A, Y, Info>(
    rule: &Rule<A, Y, Info>,
    dataset: &impl Dataset<Atom = A>,
    labels: &impl Labels<Label = Y>,
    rows: &[usize],
) -> Evaluation<Y>
where
    A: Atom,
    Y: Clone + PartialEq,
{
    let mut ant_sat = Vec::with_capacity(rows.len());
    let mut idxs_sat = Vec::new();
    let mut cons_sat = Vec::with_capacity(rows.len());
    let mut y_pred = Vec::with_capacity(rows.len());

    for (pos, &row) in rows.iter().enumerate() {
        let holds = ant_holds(rule.antecedent(), dataset, row);
        ant_sat.push(holds);
        if holds {
            idxs_sat.push(pos);
            let prediction = rule.consequent().clone();
            let correct = prediction == *labels.get(row);
            y_pred.push(Some(prediction));
            cons_sat.push(Some(correct));
        } else {
            y_pred.push(None);
            cons_sat.push(None);
        }
    }

    Evaluation {
        ant_sat,
        idxs_sat,
        cons_sat,
        y_pred,
    }
}
