//! Orchestrator (C8): the single public entry point. Resolves configuration
//! defaults and wires C2 -> C5 -> C6 -> C7.

use crate::atom::Atom;
use crate::cancel::CancellationToken;
use crate::config::{Config, SelectionMethod};
use crate::cover::{cover, CoverConfig};
use crate::dataset::{Dataset, Labels};
use crate::decision_list::DecisionList;
use crate::enumerate::enumerate_rules;
use crate::error::ExtractError;
use crate::prune::{prune, PruneConfig};
use crate::rule::RuleOrigin;
use crate::select::select_cbc_with_threshold;
use crate::treemodel::{ModelKind, TreeNode};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Convert `model` into a decision list over `(dataset, labels)` using
/// `config`, honoring `cancel` between each parallel phase.
pub fn extract_decision_list<N, D, L>(
    model: &ModelKind<N>,
    dataset: &D,
    labels: &L,
    config: &Config,
    cancel: &CancellationToken,
) -> Result<DecisionList<N::Atom, N::Label, RuleOrigin>, ExtractError>
where
    N: TreeNode,
    N::Atom: Atom,
    N::Label: Clone + PartialEq + Eq + Ord + std::hash::Hash + Send + Sync,
    D: Dataset<Atom = N::Atom>,
    L: Labels<Label = N::Label>,
{
    if dataset.nrows() == 0 {
        return Err(ExtractError::DegenerateDataset);
    }
    if let ModelKind::Forest(trees) = model {
        if trees.is_empty() {
            return Err(ExtractError::UnsupportedModelKind(
                "forest has zero trees".into(),
            ));
        }
    }
    let method_name = match &config.selection_method {
        SelectionMethod::Cbc => None,
        SelectionMethod::Other(name) => Some(name.clone()),
    };
    if let Some(name) = method_name {
        return Err(ExtractError::UnknownSelectionMethod(name));
    }

    log::info!("enumerating rule paths from model");
    let mut rules = enumerate_rules(model);
    log::debug!("{} raw rules enumerated", rules.len());

    if cancel.is_cancelled() {
        return Err(ExtractError::Cancelled);
    }

    match PruneConfig::from_mode(config.resolved_pruning()) {
        Some(prune_config) => {
            let all_rows: Vec<usize> = (0..dataset.nrows()).collect();
            rules = rules
                .par_iter()
                .map(|rule| prune(rule, dataset, labels, &all_rows, &prune_config))
                .collect();
            log::debug!("pruning complete");
        }
        None => log::debug!("pruning disabled by configuration gate"),
    }

    if cancel.is_cancelled() {
        return Err(ExtractError::Cancelled);
    }

    let selected = select_cbc_with_threshold(rules, dataset, config.selection_threshold);
    log::debug!("{} rules survive correlation filtering", selected.len());
    if selected.is_empty() {
        log::warn!("no non-default rules survived pruning and selection");
    }

    if cancel.is_cancelled() {
        return Err(ExtractError::Cancelled);
    }

    let cover_config = CoverConfig {
        min_frequency: config.min_frequency,
    };
    let mut rng = SmallRng::seed_from_u64(config.rng_seed);
    cover(selected, dataset, labels, &cover_config, &mut rng, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{leaf, split, ToyDataset, ToyLabels};

    #[test]
    fn single_leaf_tree_yields_a_default_only_list() {
        let model = ModelKind::Tree(leaf("yes"));
        let dataset = ToyDataset::new(vec![vec![true], vec![false], vec![true]]);
        let labels = ToyLabels::new(vec!["yes", "yes", "yes"]);
        let config = Config::default();
        let list = extract_decision_list(
            &model,
            &dataset,
            &labels,
            &config,
            &CancellationToken::new(),
        )
        .unwrap();
        assert!(list.rules().is_empty());
        assert_eq!(*list.default_consequent(), "yes");
    }

    #[test]
    fn empty_forest_is_unsupported() {
        let model: ModelKind<crate::fixtures::ToyNode> = ModelKind::Forest(vec![]);
        let dataset = ToyDataset::new(vec![vec![true]]);
        let labels = ToyLabels::new(vec!["A"]);
        let config = Config::default();
        let result = extract_decision_list(
            &model,
            &dataset,
            &labels,
            &config,
            &CancellationToken::new(),
        );
        assert!(matches!(result, Err(ExtractError::UnsupportedModelKind(_))));
    }

    #[test]
    fn unknown_selection_method_is_rejected() {
        let model = ModelKind::Tree(leaf("yes"));
        let dataset = ToyDataset::new(vec![vec![true]]);
        let labels = ToyLabels::new(vec!["yes"]);
        let mut config = Config::default();
        config.selection_method = SelectionMethod::Other("bogus".into());
        let result = extract_decision_list(
            &model,
            &dataset,
            &labels,
            &config,
            &CancellationToken::new(),
        );
        assert!(matches!(result, Err(ExtractError::UnknownSelectionMethod(_))));
    }

    #[test]
    fn degenerate_dataset_is_rejected() {
        let model = ModelKind::Tree(leaf("yes"));
        let dataset = ToyDataset::new(vec![]);
        let labels = ToyLabels::new(vec![]);
        let config = Config::default();
        let result = extract_decision_list(
            &model,
            &dataset,
            &labels,
            &config,
            &CancellationToken::new(),
        );
        assert!(matches!(result, Err(ExtractError::DegenerateDataset)));
    }

    #[test]
    fn two_rule_tautology_collision_classifies_everything_correctly() {
        let tree = split(0, leaf("A"), leaf("B"));
        let model = ModelKind::Forest(vec![tree]);
        let dataset = ToyDataset::new(vec![
            vec![true],
            vec![true],
            vec![false],
            vec![false],
        ]);
        let labels = ToyLabels::new(vec!["A", "A", "B", "B"]);
        let config = Config::default();
        let list = extract_decision_list(
            &model,
            &dataset,
            &labels,
            &config,
            &CancellationToken::new(),
        )
        .unwrap();
        for row in 0..dataset.nrows() {
            assert_eq!(*list.predict(&dataset, row), *labels.get(row));
        }
    }
}
