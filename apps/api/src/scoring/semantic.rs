//! Semantic scorer — pluggable source of the "meaning" half of the relevance score.
//!
//! Default: `RandomSemanticScorer`, an unseeded placeholder drawing from [60, 90).
//! `FixedSemanticScorer` returns a constant and keeps analyses reproducible.
//!
//! `AppState` holds an `Arc<dyn SemanticScorer>`, chosen at startup via config.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;

use crate::config::SemanticBackend;
use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::models::resume::CandidateResume;

const RANDOM_LOW: f64 = 60.0;
const RANDOM_HIGH: f64 = 90.0;

/// Implement this to swap in a real similarity model without touching the
/// scorer or the handlers.
#[async_trait]
pub trait SemanticScorer: Send + Sync {
    async fn score(&self, resume: &CandidateResume, job: &JobPosting) -> Result<f64, AppError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Placeholder for a real semantic comparison: ignores its inputs and draws
/// uniformly from [60, 90) on the thread-local RNG.
pub struct RandomSemanticScorer;

#[async_trait]
impl SemanticScorer for RandomSemanticScorer {
    async fn score(&self, _resume: &CandidateResume, _job: &JobPosting) -> Result<f64, AppError> {
        Ok(rand::rng().random_range(RANDOM_LOW..RANDOM_HIGH))
    }

    fn backend(&self) -> &'static str {
        "random"
    }
}

pub struct FixedSemanticScorer(pub f64);

#[async_trait]
impl SemanticScorer for FixedSemanticScorer {
    async fn score(&self, _resume: &CandidateResume, _job: &JobPosting) -> Result<f64, AppError> {
        Ok(self.0)
    }

    fn backend(&self) -> &'static str {
        "fixed"
    }
}

impl SemanticBackend {
    pub fn build(&self) -> Arc<dyn SemanticScorer> {
        match self {
            SemanticBackend::Random => Arc::new(RandomSemanticScorer),
            SemanticBackend::Fixed(score) => Arc::new(FixedSemanticScorer(*score)),
        }
    }
}
