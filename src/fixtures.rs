//! Shared toy implementations of the collaborator traits, used only by unit
//! tests across the crate: a boolean-feature dataset, string labels, and a
//! binary tree builder.

use crate::atom::Atom;
use crate::dataset::{Dataset, Labels};
use crate::treemodel::TreeNode;

/// `ToyAtom(k)` tests feature `|k| - 1`; negative `k` is the negation.
/// Feature indices passed to `ToyAtom::new` are zero-based.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToyAtom(pub i32);

impl ToyAtom {
    pub fn new(feature: u32) -> Self {
        ToyAtom(feature as i32 + 1)
    }
}

impl Atom for ToyAtom {
    fn negate(&self) -> Self {
        ToyAtom(-self.0)
    }
}

pub struct ToyDataset {
    pub rows: Vec<Vec<bool>>,
}

impl ToyDataset {
    pub fn new(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }
}

impl Dataset for ToyDataset {
    type Atom = ToyAtom;

    fn nrows(&self) -> usize {
        self.rows.len()
    }

    fn holds(&self, atom: &ToyAtom, row: usize) -> bool {
        let idx = (atom.0.unsigned_abs() - 1) as usize;
        let value = self.rows[row][idx];
        if atom.0 > 0 {
            value
        } else {
            !value
        }
    }
}

pub struct ToyLabels {
    pub values: Vec<&'static str>,
}

impl ToyLabels {
    pub fn new(values: Vec<&'static str>) -> Self {
        Self { values }
    }
}

impl Labels for ToyLabels {
    type Label = &'static str;

    fn nrows(&self) -> usize {
        self.values.len()
    }

    fn get(&self, row: usize) -> &&'static str {
        &self.values[row]
    }
}

pub enum ToyNode {
    Leaf(&'static str),
    Split {
        atom: ToyAtom,
        left: Box<ToyNode>,
        right: Box<ToyNode>,
    },
}

pub fn leaf(label: &'static str) -> ToyNode {
    ToyNode::Leaf(label)
}

pub fn split(feature: u32, left: ToyNode, right: ToyNode) -> ToyNode {
    ToyNode::Split {
        atom: ToyAtom::new(feature),
        left: Box::new(left),
        right: Box::new(right),
    }
}

impl TreeNode for ToyNode {
    type Atom = ToyAtom;
    type Label = &'static str;

    fn is_leaf(&self) -> bool {
        matches!(self, ToyNode::Leaf(_))
    }

    fn atom(&self) -> &ToyAtom {
        match self {
            ToyNode::Split { atom, .. } => atom,
            ToyNode::Leaf(_) => panic!("leaf has no atom"),
        }
    }

    fn left(&self) -> &ToyNode {
        match self {
            ToyNode::Split { left, .. } => left,
            ToyNode::Leaf(_) => panic!("leaf has no children"),
        }
    }

    fn right(&self) -> &ToyNode {
        match self {
            ToyNode::Split { right, .. } => right,
            ToyNode::Leaf(_) => panic!("leaf has no children"),
        }
    }

    fn label(&self) -> &&'static str {
        match self {
            ToyNode::Leaf(label) => label,
            ToyNode::Split { .. } => panic!("internal node has no label"),
        }
    }
}
