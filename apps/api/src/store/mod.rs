//! In-memory store for job postings, resumes and match results.
//!
//! Each collection sits behind its own `parking_lot::RwLock`. Writers take a
//! single lock for the whole mutation, so concurrent appends never interleave.
//! Readers that join collections lock in the fixed order jobs → resumes → results.
//! Nothing is persisted: state lives as long as the process.

pub mod query;
pub mod seed;

use std::collections::BTreeSet;
use std::str::FromStr;

use anyhow::bail;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job::JobPosting;
use crate::models::result::MatchResult;
use crate::models::resume::CandidateResume;

pub use query::{JobFilter, ResultQuery, ResultRow, ResultSort, ResumeFilter};

/// What happens when a (resume, job) pair that already has a result is analyzed again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReanalysisPolicy {
    /// Keep every analysis; duplicates accumulate.
    #[default]
    Append,
    /// The new result takes the prior result's place in the collection.
    Replace,
}

impl FromStr for ReanalysisPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "append" => Ok(ReanalysisPolicy::Append),
            "replace" => Ok(ReanalysisPolicy::Replace),
            other => bail!("REANALYSIS_POLICY must be 'append' or 'replace', got '{other}'"),
        }
    }
}

/// Outcome of recording a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub result_id: Uuid,
    /// Ids of earlier results for the same pair that were dropped.
    pub replaced: Vec<Uuid>,
}

#[derive(Debug, Default)]
pub struct Store {
    jobs: RwLock<Vec<JobPosting>>,
    resumes: RwLock<Vec<CandidateResume>>,
    results: RwLock<Vec<MatchResult>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Jobs ────────────────────────────────────────────────────────────────

    pub fn insert_job(&self, job: JobPosting) -> JobPosting {
        self.jobs.write().push(job.clone());
        job
    }

    pub fn get_job(&self, id: Uuid) -> Option<JobPosting> {
        self.jobs.read().iter().find(|j| j.id == id).cloned()
    }

    pub fn list_jobs(&self, filter: &JobFilter) -> Vec<JobPosting> {
        self.jobs
            .read()
            .iter()
            .filter(|j| filter.matches(j))
            .cloned()
            .collect()
    }

    pub fn jobs(&self) -> Vec<JobPosting> {
        self.jobs.read().clone()
    }

    // ── Resumes ─────────────────────────────────────────────────────────────

    pub fn insert_resume(&self, resume: CandidateResume) -> CandidateResume {
        self.resumes.write().push(resume.clone());
        resume
    }

    pub fn get_resume(&self, id: Uuid) -> Option<CandidateResume> {
        self.resumes.read().iter().find(|r| r.id == id).cloned()
    }

    pub fn list_resumes(&self, filter: &ResumeFilter) -> Vec<CandidateResume> {
        self.resumes
            .read()
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    pub fn resumes(&self) -> Vec<CandidateResume> {
        self.resumes.read().clone()
    }

    // ── Results ─────────────────────────────────────────────────────────────

    /// Records a result under the given policy. Always a single write-locked step.
    pub fn record_result(&self, result: MatchResult, policy: ReanalysisPolicy) -> Recorded {
        let result_id = result.id;
        let (resume_id, job_id) = (result.resume_id, result.job_id);
        let same_pair = |r: &MatchResult| r.resume_id == resume_id && r.job_id == job_id;

        let mut results = self.results.write();
        let replaced = match policy {
            ReanalysisPolicy::Append => {
                results.push(result);
                Vec::new()
            }
            ReanalysisPolicy::Replace => {
                let replaced: Vec<Uuid> =
                    results.iter().filter(|&r| same_pair(r)).map(|r| r.id).collect();
                match results.iter().position(|r| same_pair(r)) {
                    Some(idx) => {
                        results[idx] = result;
                        results.retain(|r| r.id == result_id || !same_pair(r));
                    }
                    None => results.push(result),
                }
                replaced
            }
        };

        Recorded {
            result_id,
            replaced,
        }
    }

    pub fn get_result(&self, id: Uuid) -> Option<MatchResult> {
        self.results.read().iter().find(|r| r.id == id).cloned()
    }

    pub fn results(&self) -> Vec<MatchResult> {
        self.results.read().clone()
    }

    /// Results joined with their resume and job, filtered and sorted.
    pub fn list_results(&self, query: &ResultQuery) -> Vec<ResultRow> {
        let jobs = self.jobs.read();
        let resumes = self.resumes.read();
        let results = self.results.read();

        let mut rows: Vec<ResultRow> = results
            .iter()
            .map(|result| ResultRow {
                student_name: resumes
                    .iter()
                    .find(|r| r.id == result.resume_id)
                    .map(|r| r.student_name.clone()),
                job_title: jobs
                    .iter()
                    .find(|j| j.id == result.job_id)
                    .map(|j| j.title.clone()),
                result: result.clone(),
            })
            .filter(|row| query.matches(row))
            .collect();

        query.sort.apply(&mut rows);
        rows
    }

    /// Distinct locations across jobs and resumes, for filter dropdowns.
    pub fn locations(&self) -> Vec<String> {
        let jobs = self.jobs.read();
        let resumes = self.resumes.read();
        jobs.iter()
            .map(|j| j.location.as_str())
            .chain(resumes.iter().map(|r| r.location.as_str()))
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
