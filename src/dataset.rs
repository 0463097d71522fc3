//! Collaborator interfaces for the dataset the rules are mined and scored
//! against. The core never owns a concrete dataset representation — it only
//! needs row count, a way to test an atom at a row, and a way to read back a
//! row's label. Slicing, in the sense of the distilled spec's "opaque
//! row-addressable view with slicing", is realized here as index subsets
//! (`&[usize]`) rather than a materialized sub-dataset: every metric and
//! evaluator function below takes the active row indices as a parameter, so
//! the sequential coverer (`cover`) can shrink its working set without
//! cloning `X`/`Y` on each iteration.

use crate::atom::Atom;
use std::fmt::Debug;

/// Row-addressable, read-only feature view. Implemented by the caller over
/// whatever in-memory or columnar representation backs their data.
pub trait Dataset: Sync {
    type Atom: Atom;

    fn nrows(&self) -> usize;

    /// Evaluate a single atom against a single row.
    fn holds(&self, atom: &Self::Atom, row: usize) -> bool;
}

/// Row-addressable, read-only label view, parallel to [`Dataset`].
pub trait Labels: Sync {
    type Label: Clone + Eq + Ord + std::hash::Hash + Debug + Send + Sync;

    fn nrows(&self) -> usize;

    fn get(&self, row: usize) -> &Self::Label;
}
