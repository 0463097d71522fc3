//! The antecedent of a rule: a conjunction of atoms, either flat or grouped
//! by modality.

use crate::atom::Atom;
use std::collections::BTreeMap;

/// Identifies one modality in a [`Antecedent::MultiModal`] antecedent (e.g.
/// "text" vs "image" vs "tabular"). Opaque beyond ordering, which fixes a
/// deterministic iteration order over modalities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModalityId(pub u32);

/// A rule's left-hand side. `Conjunctive` is the shape the path enumerator
/// (`enumerate`) produces from a single tree; `MultiModal` is a shape a
/// caller may construct directly when atoms are naturally grouped.
///
/// Pruning and selection only need `length` and `slice`, so both shapes are
/// handled generically: one "conjunct" is one atom for `Conjunctive`, and one
/// modality's whole sub-antecedent for `MultiModal`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Antecedent<A: Atom> {
    Conjunctive(Vec<A>),
    MultiModal(BTreeMap<ModalityId, Vec<A>>),
}

impl<A: Atom> Antecedent<A> {
    pub fn tautology() -> Self {
        Antecedent::Conjunctive(Vec::new())
    }

    /// Number of conjuncts: atoms for `Conjunctive`, modalities for
    /// `MultiModal`.
    pub fn length(&self) -> usize {
        match self {
            Antecedent::Conjunctive(atoms) => atoms.len(),
            Antecedent::MultiModal(modalities) => modalities.len(),
        }
    }

    /// Restrict to the conjuncts at the given positions (ascending, indexing
    /// into this antecedent's own conjunct order — atom order for
    /// `Conjunctive`, `BTreeMap` key order for `MultiModal`). Dropping a
    /// `MultiModal` antecedent down to zero or one modality keeps the
    /// `MultiModal` shape; it is never collapsed into `Conjunctive`.
    pub fn slice(&self, idxs: &[usize]) -> Self {
        match self {
            Antecedent::Conjunctive(atoms) => {
                Antecedent::Conjunctive(idxs.iter().map(|&i| atoms[i].clone()).collect())
            }
            Antecedent::MultiModal(modalities) => {
                let kept: BTreeMap<ModalityId, Vec<A>> = modalities
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| idxs.contains(i))
                    .map(|(_, (k, v))| (*k, v.clone()))
                    .collect();
                Antecedent::MultiModal(kept)
            }
        }
    }

    /// Whether every atom holds on `row`, flattening `MultiModal` into the
    /// conjunction across its modalities.
    pub fn holds(&self, dataset: &impl crate::dataset::Dataset<Atom = A>, row: usize) -> bool {
        match self {
            Antecedent::Conjunctive(atoms) => atoms.iter().all(|a| dataset.holds(a, row)),
            Antecedent::MultiModal(modalities) => modalities
                .values()
                .all(|atoms| atoms.iter().all(|a| dataset.holds(a, row))),
        }
    }
}
