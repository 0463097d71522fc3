//! Path enumerator (C2): one rule per root-to-leaf path, deduplicated by
//! structural equality across the whole forest.

use crate::antecedent::Antecedent;
use crate::rule::{Rule, RuleOrigin};
use crate::treemodel::{ModelKind, TreeNode};
use std::collections::HashSet;

/// Walk every tree in `model` pre-order (left before right), emitting one
/// rule per leaf with the atoms along its path — negated wherever the right
/// branch was taken — then drop any rule whose `(antecedent, consequent)` is
/// structurally equal to one already emitted.
pub fn enumerate_rules<N: TreeNode>(
    model: &ModelKind<N>,
) -> Vec<Rule<N::Atom, N::Label, RuleOrigin>>
where
    N::Label: Clone + Eq + std::hash::Hash,
{
    let mut rules = Vec::new();
    for (tree_index, root) in model.roots().into_iter().enumerate() {
        let mut path = Vec::new();
        walk(root, tree_index, 0, &mut path, &mut rules);
    }
    dedup(rules)
}

fn walk<N: TreeNode>(
    node: &N,
    tree_index: usize,
    depth: usize,
    path: &mut Vec<N::Atom>,
    out: &mut Vec<Rule<N::Atom, N::Label, RuleOrigin>>,
) where
    N::Label: Clone,
{
    if node.is_leaf() {
        out.push(Rule::new(
            Antecedent::Conjunctive(path.clone()),
            node.label().clone(),
            RuleOrigin { tree_index, depth },
        ));
        return;
    }
    let atom = node.atom().clone();
    path.push(atom.clone());
    walk(node.left(), tree_index, depth + 1, path, out);
    path.pop();
    path.push(atom.negate());
    walk(node.right(), tree_index, depth + 1, path, out);
    path.pop();
}

/// Structural-equality dedup that keeps the first occurrence, ignoring
/// `Info` — a plain `Vec::dedup` would miss duplicates that aren't adjacent,
/// and deriving `Hash` for `Antecedent::MultiModal`'s `BTreeMap` would be
/// fine but isn't needed here since C2 only ever emits `Conjunctive` rules.
fn dedup<A, Y, Info>(rules: Vec<Rule<A, Y, Info>>) -> Vec<Rule<A, Y, Info>>
where
    A: crate::atom::Atom,
    Y: Clone + Eq + std::hash::Hash,
{
    let mut seen: HashSet<(Vec<A>, Y)> = HashSet::new();
    let mut kept = Vec::with_capacity(rules.len());
    for rule in rules {
        let key = match rule.antecedent() {
            Antecedent::Conjunctive(atoms) => atoms.clone(),
            Antecedent::MultiModal(modalities) => {
                modalities.values().flatten().cloned().collect()
            }
        };
        if seen.insert((key, rule.consequent().clone())) {
            kept.push(rule);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{leaf, split, ToyNode};

    #[test]
    fn single_leaf_tree_has_no_split() {
        let model = ModelKind::Tree(leaf("yes"));
        let rules = enumerate_rules(&model);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].length(), 0);
        assert_eq!(*rules[0].consequent(), "yes");
    }

    #[test]
    fn single_split_emits_two_rules_with_negation() {
        let tree = split(0, leaf("A"), leaf("B"));
        let model = ModelKind::Tree(tree);
        let rules = enumerate_rules(&model);
        assert_eq!(rules.len(), 2);
        match rules[0].antecedent() {
            Antecedent::Conjunctive(atoms) => assert_eq!(atoms[0].0, 1),
            _ => panic!(),
        }
        match rules[1].antecedent() {
            Antecedent::Conjunctive(atoms) => assert_eq!(atoms[0].0, -1),
            _ => panic!(),
        }
    }

    #[test]
    fn dedup_collapses_identical_trees_in_a_forest() {
        let t1: ToyNode = split(0, leaf("A"), leaf("B"));
        let t2: ToyNode = split(0, leaf("A"), leaf("B"));
        let model = ModelKind::Forest(vec![t1, t2]);
        let rules = enumerate_rules(&model);
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn preorder_visits_left_before_right() {
        let tree = split(0, split(1, leaf("A"), leaf("B")), leaf("C"));
        let model = ModelKind::Tree(tree);
        let rules = enumerate_rules(&model);
        let consequents: Vec<_> = rules.iter().map(|r| *r.consequent()).collect();
        assert_eq!(consequents, vec!["A", "B", "C"]);
    }
}
