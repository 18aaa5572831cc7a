//! Relevance Scorer — compares a candidate's skills against a job's skill lists.
//!
//! Pure and synchronous: the only non-deterministic input (the semantic score)
//! is passed in by the caller, so every output here is reproducible in tests.

use std::collections::HashSet;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use super::ScoringError;
use crate::models::result::{MatchResult, Verdict};

const HARD_MATCH_FLOOR: f64 = 20.0;
const HARD_MATCH_SPAN: f64 = 70.0;
const HARD_MATCH_CAP: f64 = 90.0;
const HARD_WEIGHT: f64 = 0.6;
const SEMANTIC_WEIGHT: f64 = 0.4;
const MAX_STRENGTHS: usize = 3;
const MAX_WEAKNESSES: usize = 2;

/// Everything the scorer derives for one (candidate, job) pair.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Unrounded; rounded only when stored.
    pub hard_match_score: f64,
    pub semantic_match_score: f64,
    pub relevance_score: u32,
    pub verdict: Verdict,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ScoreBreakdown {
    /// Stamps the breakdown with a fresh id and timestamp.
    pub fn into_result(self, resume_id: Uuid, job_id: Uuid) -> MatchResult {
        MatchResult {
            id: Uuid::new_v4(),
            resume_id,
            job_id,
            relevance_score: self.relevance_score,
            verdict: self.verdict,
            hard_match_score: self.hard_match_score.round() as u32,
            semantic_match_score: self.semantic_match_score.round() as u32,
            matched_skills: self.matched_skills,
            missing_skills: self.missing_skills,
            strengths: self.strengths,
            weaknesses: self.weaknesses,
            suggestions: self.suggestions,
            analyzed_at: Utc::now(),
        }
    }
}

/// Scores one candidate against one job.
///
/// Matching is exact and case-sensitive. A job with no must-have skills is
/// rejected rather than divided by zero.
pub fn score_match(
    candidate_skills: &[String],
    must_have: &[String],
    good_to_have: &[String],
    semantic_score: f64,
) -> Result<ScoreBreakdown, ScoringError> {
    if must_have.is_empty() {
        return Err(ScoringError::NoMustHaveSkills);
    }
    if !semantic_score.is_finite() {
        return Err(ScoringError::InvalidSemanticScore(semantic_score));
    }
    let semantic_score = semantic_score.clamp(0.0, 100.0);

    let wanted: HashSet<&str> = must_have
        .iter()
        .chain(good_to_have.iter())
        .map(String::as_str)
        .collect();
    let held: HashSet<&str> = candidate_skills.iter().map(String::as_str).collect();

    let matched_skills = unique_in_order(
        candidate_skills
            .iter()
            .filter(|skill| wanted.contains(skill.as_str())),
    );
    let missing_skills = unique_in_order(
        must_have
            .iter()
            .filter(|skill| !held.contains(skill.as_str())),
    );

    let hard_match_score = hard_match(matched_skills.len(), must_have.len());
    let relevance_score = (hard_match_score * HARD_WEIGHT + semantic_score * SEMANTIC_WEIGHT)
        .round()
        .clamp(0.0, 100.0) as u32;

    Ok(ScoreBreakdown {
        strengths: matched_skills.iter().take(MAX_STRENGTHS).cloned().collect(),
        weaknesses: missing_skills.iter().take(MAX_WEAKNESSES).cloned().collect(),
        suggestions: build_suggestions(&missing_skills),
        verdict: Verdict::from_score(relevance_score),
        matched_skills,
        missing_skills,
        hard_match_score,
        semantic_match_score: semantic_score,
        relevance_score,
    })
}

/// `min(90, matched / must_have * 70 + 20)`. Caller guarantees `must_have > 0`.
fn hard_match(matched: usize, must_have: usize) -> f64 {
    let ratio = matched as f64 / must_have as f64;
    (ratio * HARD_MATCH_SPAN + HARD_MATCH_FLOOR).min(HARD_MATCH_CAP)
}

fn unique_in_order<'a>(skills: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .filter(|skill| seen.insert(skill.as_str()))
        .cloned()
        .collect()
}

fn build_suggestions(missing_skills: &[String]) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(3);
    if let Some(first) = missing_skills.first() {
        suggestions.push(format!("Consider adding {first} to your skillset"));
    }
    suggestions.push("Add more relevant project experience".to_string());
    suggestions.push("Get certified in cloud technologies".to_string());
    suggestions
}
