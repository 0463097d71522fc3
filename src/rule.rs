//! A rule pairs an antecedent with the consequent it predicts when the
//! antecedent holds, plus opaque provenance.

use crate::antecedent::Antecedent;
use crate::atom::Atom;

/// Provenance attached to rules minted by the path enumerator: which tree in
/// the forest the rule came from and how deep its leaf sat. Purely
/// informational — nothing downstream inspects it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleOrigin {
    pub tree_index: usize,
    pub depth: usize,
}

/// `R = (Antecedent, Consequent, Info)`. Rules are immutable: pruning and
/// slicing always produce a new `Rule`.
///
/// Equality (used by the path enumerator's dedup pass) compares only the
/// antecedent and consequent — `Info` is provenance, not identity.
#[derive(Clone, Debug)]
pub struct Rule<A: Atom, Y, Info = RuleOrigin> {
    antecedent: Antecedent<A>,
    consequent: Y,
    info: Info,
}

impl<A: Atom, Y, Info> Rule<A, Y, Info> {
    pub fn new(antecedent: Antecedent<A>, consequent: Y, info: Info) -> Self {
        Self {
            antecedent,
            consequent,
            info,
        }
    }

    pub fn antecedent(&self) -> &Antecedent<A> {
        &self.antecedent
    }

    pub fn consequent(&self) -> &Y {
        &self.consequent
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn length(&self) -> usize {
        self.antecedent.length()
    }

    /// A new rule over the conjuncts at `idxs`, same consequent and info.
    pub fn slice(&self, idxs: &[usize]) -> Self
    where
        Y: Clone,
        Info: Clone,
    {
        Self {
            antecedent: self.antecedent.slice(idxs),
            consequent: self.consequent.clone(),
            info: self.info.clone(),
        }
    }
}

impl<A: Atom, Y: PartialEq, Info> PartialEq for Rule<A, Y, Info> {
    fn eq(&self, other: &Self) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl<A: Atom, Y: Eq, Info> Eq for Rule<A, Y, Info> {}
