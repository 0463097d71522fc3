//! The stable error taxonomy surfaced at every fallible boundary of the
//! pipeline. `EmptyRuleSet` from the distilled spec is deliberately absent:
//! it is not a failure, just a `DecisionList` of one default rule, logged at
//! `warn` by the orchestrator.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("unsupported model kind: {0}")]
    UnsupportedModelKind(String),

    #[error("unknown selection method: {0}")]
    UnknownSelectionMethod(String),

    #[error("dataset has zero rows")]
    DegenerateDataset,

    #[error("extraction cancelled")]
    Cancelled,

    #[error("internal invariant violated: {0}")]
    InternalInvariantViolated(String),
}
