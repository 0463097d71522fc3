//! Selector (C6): correlation-based covering (CBC). Builds a coverage
//! bitset per rule, then greedily drops the more-correlated-with-everything
//! rule of each above-threshold pair until nothing exceeds the threshold.
//!
//! Coverage columns are packed into 64-bit words (per the source's own
//! recommendation) so the Pearson correlation between any two columns
//! reduces to population counts over their bitwise AND — exact for boolean
//! data, and cheap enough to precompute once as an O(J^2) matrix since
//! neither a column's popcount nor its pairwise AND depends on which other
//! columns survive elimination.

use crate::atom::Atom;
use crate::dataset::Dataset;
use crate::evaluate::ant_holds;
use crate::rule::Rule;
use rayon::prelude::*;
use std::collections::BTreeSet;

struct Bitset {
    words: Vec<u64>,
    len: usize,
}

impl Bitset {
    fn from_bits(bits: impl Iterator<Item = bool>) -> Self {
        let mut words = Vec::new();
        let mut len = 0;
        let mut word = 0u64;
        for (i, bit) in bits.enumerate() {
            if i > 0 && i % 64 == 0 {
                words.push(word);
                word = 0;
            }
            if bit {
                word |= 1 << (i % 64);
            }
            len += 1;
        }
        words.push(word);
        Self { words, len }
    }

    fn popcount(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    fn and_popcount(&self, other: &Bitset) -> u32 {
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a & b).count_ones())
            .sum()
    }

    fn is_constant(&self) -> bool {
        let ones = self.popcount() as usize;
        ones == 0 || ones == self.len
    }
}

/// Pearson correlation between two 0/1 columns of length `n`, via population
/// counts: `corr = (n*sum(xy) - sum(x)*sum(y)) / sqrt(var(x) * var(y))`,
/// with `sum(x^2) = sum(x)` for boolean columns.
fn pearson(a: &Bitset, b: &Bitset, n: usize) -> f64 {
    let n = n as f64;
    let sum_x = a.popcount() as f64;
    let sum_y = b.popcount() as f64;
    let sum_xy = a.and_popcount(b) as f64;
    let numerator = n * sum_xy - sum_x * sum_y;
    let var_x = n * sum_x - sum_x * sum_x;
    let var_y = n * sum_y - sum_y * sum_y;
    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Apply CBC over `rules`, returning the surviving rules in original order.
pub fn select_cbc<A, Y, Info>(
    rules: Vec<Rule<A, Y, Info>>,
    dataset: &impl Dataset<Atom = A>,
) -> Vec<Rule<A, Y, Info>>
where
    A: Atom,
    Y: Sync,
    Info: Sync,
{
    select_cbc_with_threshold(rules, dataset, 0.0)
}

pub fn select_cbc_with_threshold<A, Y, Info>(
    rules: Vec<Rule<A, Y, Info>>,
    dataset: &impl Dataset<Atom = A>,
    theta: f64,
) -> Vec<Rule<A, Y, Info>>
where
    A: Atom,
    Y: Sync,
    Info: Sync,
{
    let n = dataset.nrows();
    let coverage: Vec<Bitset> = rules
        .par_iter()
        .map(|rule| {
            Bitset::from_bits((0..n).map(|row| ant_holds(rule.antecedent(), dataset, row)))
        })
        .collect();

    let mut remaining: BTreeSet<usize> = (0..rules.len()).collect();
    for (i, bits) in coverage.iter().enumerate() {
        if bits.is_constant() {
            remaining.remove(&i);
        }
    }

    let corr = |a: usize, b: usize| pearson(&coverage[a], &coverage[b], n);
    let mean_abs_corr = |x: usize, remaining: &BTreeSet<usize>| -> f64 {
        let others: Vec<usize> = remaining.iter().copied().filter(|&y| y != x).collect();
        if others.is_empty() {
            0.0
        } else {
            others.iter().map(|&y| corr(x, y).abs()).sum::<f64>() / others.len() as f64
        }
    };

    loop {
        let mut worst: Option<(usize, usize, f64)> = None;
        for &a in &remaining {
            for &b in &remaining {
                if a >= b {
                    continue;
                }
                let c = corr(a, b).abs();
                if c > theta && worst.is_none_or(|(_, _, best)| c > best) {
                    worst = Some((a, b, c));
                }
            }
        }
        let Some((a, b, _)) = worst else { break };
        let drop = if mean_abs_corr(a, &remaining) >= mean_abs_corr(b, &remaining) {
            a
        } else {
            b
        };
        remaining.remove(&drop);
    }

    let mut rules = rules;
    let mut kept = Vec::with_capacity(remaining.len());
    for (i, rule) in rules.drain(..).enumerate() {
        if remaining.contains(&i) {
            kept.push(rule);
        }
    }
    kept
}
