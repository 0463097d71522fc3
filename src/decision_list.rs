//! The pipeline's output: an ordered list of rules plus a default.

use crate::atom::Atom;
use crate::dataset::Dataset;
use crate::evaluate::ant_holds;
use crate::rule::Rule;

#[derive(Clone, Debug)]
pub struct DecisionList<A: Atom, Y, Info = crate::rule::RuleOrigin> {
    rules: Vec<Rule<A, Y, Info>>,
    default: Y,
}

impl<A: Atom, Y, Info> DecisionList<A, Y, Info> {
    pub fn new(rules: Vec<Rule<A, Y, Info>>, default: Y) -> Self {
        Self { rules, default }
    }

    pub fn rules(&self) -> &[Rule<A, Y, Info>] {
        &self.rules
    }

    pub fn default_consequent(&self) -> &Y {
        &self.default
    }

    /// The consequent of the first rule whose antecedent holds on `row`,
    /// else the default.
    pub fn predict(&self, dataset: &impl Dataset<Atom = A>, row: usize) -> &Y {
        for rule in &self.rules {
            if ant_holds(rule.antecedent(), dataset, row) {
                return rule.consequent();
            }
        }
        &self.default
    }
}
