//! Pipeline configuration and its defaults. No file or environment layer —
//! the core takes its configuration as a plain Rust value from its caller.

/// Selection method for C6. `Cbc` is the only implemented method; anything
/// else is a caller error surfaced as `ExtractError::UnknownSelectionMethod`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionMethod {
    Cbc,
    Other(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Master switch for C5. The per-field override gate below can still
    /// disable pruning even when this is `true`.
    pub prune_rules: bool,
    /// Error-floor override for the pruning decay test. `None` uses the
    /// default (`1e-6`) unless `pruning_decay_threshold` is also overridden.
    pub pruning_s: Option<f64>,
    /// Decay-threshold override for the pruning decay test. `None` uses the
    /// default (`0.05`) unless `pruning_s` is also overridden.
    pub pruning_decay_threshold: Option<f64>,
    pub selection_method: SelectionMethod,
    pub selection_threshold: f64,
    pub min_frequency: f64,
    pub rng_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prune_rules: true,
            pruning_s: None,
            pruning_decay_threshold: None,
            selection_method: SelectionMethod::Cbc,
            selection_threshold: 0.0,
            min_frequency: 0.01,
            rng_seed: 1,
        }
    }
}

/// Resolved outcome of `Config`'s pruning fields: either both knobs take
/// effect (with defaults filled in where unset) or pruning is disabled
/// outright, per the "exactly one of {s, tau} supplied" ambiguous-tuning
/// guard in the pruner's contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PruningMode {
    Disabled,
    Enabled { s: f64, tau: f64 },
}

pub const DEFAULT_PRUNING_S: f64 = 1e-6;
pub const DEFAULT_PRUNING_TAU: f64 = 0.05;

impl Config {
    pub fn resolved_pruning(&self) -> PruningMode {
        if !self.prune_rules {
            return PruningMode::Disabled;
        }
        match (self.pruning_s, self.pruning_decay_threshold) {
            (None, None) => PruningMode::Enabled {
                s: DEFAULT_PRUNING_S,
                tau: DEFAULT_PRUNING_TAU,
            },
            (Some(s), Some(tau)) => PruningMode::Enabled { s, tau },
            _ => PruningMode::Disabled,
        }
    }
}
