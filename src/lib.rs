//! Converts a decision tree or forest into a compact, ordered decision list
//! via the inTrees pipeline: enumerate root-to-leaf paths as rules, prune each
//! rule's conjuncts against an error-decay test, drop near-duplicate rules by
//! coverage correlation, then sequentially cover the training set.
//!
//! The core is generic over the caller's feature predicates (`Atom`), dataset
//! (`Dataset`), labels (`Labels`), and tree shape (`TreeNode`) — training the
//! underlying trees, the symbolic-logic atom language, and persistence all
//! live outside this crate.

pub mod antecedent;
pub mod atom;
pub mod bestguess;
pub mod cancel;
pub mod config;
pub mod cover;
pub mod dataset;
pub mod decision_list;
pub mod enumerate;
pub mod error;
pub mod evaluate;
pub mod metrics;
pub mod orchestrator;
pub mod prune;
pub mod rule;
pub mod select;
pub mod treemodel;

#[cfg(test)]
mod fixtures;

pub use antecedent::{Antecedent, ModalityId};
pub use atom::Atom;
pub use cancel::CancellationToken;
pub use config::{Config, SelectionMethod};
pub use dataset::{Dataset, Labels};
pub use decision_list::DecisionList;
pub use error::ExtractError;
pub use orchestrator::extract_decision_list;
pub use rule::{Rule, RuleOrigin};
pub use treemodel::{ModelKind, TreeNode};
