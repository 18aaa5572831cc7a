use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::models::job::JobPosting;
use crate::models::result::{MatchResult, Verdict};
use crate::models::resume::CandidateResume;

/// Filter for the job list. `"all"` or an empty value disables a field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilter {
    pub search: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, job: &JobPosting) -> bool {
        let search_ok = match active(&self.search) {
            Some(term) => contains_ci(&job.title, term) || contains_ci(&job.company, term),
            None => true,
        };
        let location_ok = active(&self.location).map_or(true, |l| job.location == l);
        let status_ok = active(&self.status).map_or(true, |s| job.status.as_str() == s);
        search_ok && location_ok && status_ok
    }
}

/// Filter for the resume list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeFilter {
    pub search: Option<String>,
    pub location: Option<String>,
}

impl ResumeFilter {
    pub fn matches(&self, resume: &CandidateResume) -> bool {
        let search_ok = match active(&self.search) {
            Some(term) => {
                contains_ci(&resume.student_name, term) || contains_ci(&resume.email, term)
            }
            None => true,
        };
        let location_ok = active(&self.location).map_or(true, |l| resume.location == l);
        search_ok && location_ok
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultSort {
    /// Highest relevance first.
    #[default]
    Score,
    /// Newest first.
    Date,
    /// Student name, A → Z.
    Name,
}

impl FromStr for ResultSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "score" => Ok(ResultSort::Score),
            "date" => Ok(ResultSort::Date),
            "name" => Ok(ResultSort::Name),
            other => Err(format!("unknown sort '{other}' (expected score, date or name)")),
        }
    }
}

impl ResultSort {
    pub fn apply(&self, rows: &mut [ResultRow]) {
        match self {
            ResultSort::Score => {
                rows.sort_by(|a, b| b.result.relevance_score.cmp(&a.result.relevance_score))
            }
            ResultSort::Date => rows.sort_by(|a, b| b.result.analyzed_at.cmp(&a.result.analyzed_at)),
            ResultSort::Name => rows.sort_by(|a, b| compare_names(a, b)),
        }
    }
}

fn compare_names(a: &ResultRow, b: &ResultRow) -> Ordering {
    let a = a.student_name.as_deref().unwrap_or("").to_lowercase();
    let b = b.student_name.as_deref().unwrap_or("").to_lowercase();
    a.cmp(&b)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultQuery {
    /// Matches the candidate's name or the job's title.
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_filter")]
    pub verdict: Option<Verdict>,
    #[serde(default, deserialize_with = "deserialize_filter")]
    pub job_id: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_filter")]
    pub resume_id: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_sort")]
    pub sort: ResultSort,
}

impl ResultQuery {
    pub fn matches(&self, row: &ResultRow) -> bool {
        let search_ok = match active(&self.search) {
            Some(term) => {
                row.student_name.as_deref().is_some_and(|n| contains_ci(n, term))
                    || row.job_title.as_deref().is_some_and(|t| contains_ci(t, term))
            }
            None => true,
        };
        search_ok
            && self.verdict.map_or(true, |v| row.result.verdict == v)
            && self.job_id.map_or(true, |id| row.result.job_id == id)
            && self.resume_id.map_or(true, |id| row.result.resume_id == id)
    }
}

/// A result joined with the display names of the records it references.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    #[serde(flatten)]
    pub result: MatchResult,
    pub student_name: Option<String>,
    pub job_title: Option<String>,
}

/// Parses a query value, treating `"all"` or an empty value as no filter.
fn deserialize_filter<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match active(&raw) {
        Some(v) => v.parse::<T>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn deserialize_sort<'de, D>(deserializer: D) -> Result<ResultSort, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_filter(deserializer).map(Option::unwrap_or_default)
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::resume_with;
    use serde_json::json;

    #[test]
    fn test_resume_filter_matches_name_or_email() {
        let resume = resume_with("Sneha Kulkarni", "Pune", &["Java"]);
        let by_name = ResumeFilter {
            search: Some("SNEHA".to_string()),
            location: None,
        };
        let by_email = ResumeFilter {
            search: Some("kulkarni@".to_string()),
            location: Some("Pune".to_string()),
        };
        let wrong_city = ResumeFilter {
            search: None,
            location: Some("Delhi NCR".to_string()),
        };
        assert!(by_name.matches(&resume));
        assert!(by_email.matches(&resume));
        assert!(!wrong_city.matches(&resume));
    }

    #[test]
    fn test_verdict_filter_all_means_none() {
        let query: ResultQuery =
            serde_json::from_value(json!({ "verdict": "all", "sort": "date" })).unwrap();
        assert!(query.verdict.is_none());
        assert_eq!(query.sort, ResultSort::Date);

        let query: ResultQuery = serde_json::from_value(json!({ "verdict": "Medium" })).unwrap();
        assert_eq!(query.verdict, Some(Verdict::Medium));
        assert_eq!(query.sort, ResultSort::Score);
    }

    #[test]
    fn test_id_and_sort_filters_accept_all_or_empty() {
        let query: ResultQuery =
            serde_json::from_value(json!({ "job_id": "all", "resume_id": "", "sort": "" }))
                .unwrap();
        assert!(query.job_id.is_none());
        assert!(query.resume_id.is_none());
        assert_eq!(query.sort, ResultSort::Score);

        let id = Uuid::new_v4();
        let query: ResultQuery =
            serde_json::from_value(json!({ "job_id": id.to_string(), "sort": "Name" })).unwrap();
        assert_eq!(query.job_id, Some(id));
        assert_eq!(query.sort, ResultSort::Name);
    }

    #[test]
    fn test_malformed_job_id_rejected() {
        let parsed = serde_json::from_value::<ResultQuery>(json!({ "job_id": "job-1" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_unknown_verdict_rejected() {
        let parsed = serde_json::from_value::<ResultQuery>(json!({ "verdict": "Great" }));
        assert!(parsed.is_err());
    }
}
