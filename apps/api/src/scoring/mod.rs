// Relevance scoring: skill overlap (hard match) blended with a pluggable semantic signal.
// The blend itself is pure; the semantic value comes from a `SemanticScorer` held in `AppState`.

pub mod relevance;
pub mod semantic;

use thiserror::Error;

pub use relevance::score_match;
pub use semantic::{FixedSemanticScorer, RandomSemanticScorer, SemanticScorer};

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("job posting has no must-have skills; hard match score is undefined")]
    NoMustHaveSkills,

    #[error("semantic score must be a finite value, got {0}")]
    InvalidSemanticScore(f64),
}
