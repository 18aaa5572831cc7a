use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Three-tier label derived by thresholding the relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    High,
    Medium,
    Low,
}

impl Verdict {
    pub fn from_score(relevance_score: u32) -> Self {
        if relevance_score >= 80 {
            Verdict::High
        } else if relevance_score >= 60 {
            Verdict::Medium
        } else {
            Verdict::Low
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::High => "High",
            Verdict::Medium => "Medium",
            Verdict::Low => "Low",
        };
        f.write_str(label)
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" | "high" => Ok(Verdict::High),
            "Medium" | "medium" => Ok(Verdict::Medium),
            "Low" | "low" => Ok(Verdict::Low),
            other => Err(format!("unknown verdict '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub job_id: Uuid,
    pub relevance_score: u32,
    pub verdict: Verdict,
    pub hard_match_score: u32,
    pub semantic_match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}
