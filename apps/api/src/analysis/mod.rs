// Analysis: resolves a resume and job(s), runs the relevance scorer, records the result.

pub mod handlers;
pub mod stats;

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobStatus};
use crate::models::result::MatchResult;
use crate::models::resume::CandidateResume;
use crate::scoring::{score_match, SemanticScorer};
use crate::store::{ReanalysisPolicy, Store};

fn resolve_resume(store: &Store, resume_id: Uuid) -> Result<CandidateResume, AppError> {
    store
        .get_resume(resume_id)
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))
}

fn resolve_job(store: &Store, job_id: Uuid) -> Result<JobPosting, AppError> {
    store
        .get_job(job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

async fn score_pair(
    semantic: &dyn SemanticScorer,
    resume: &CandidateResume,
    job: &JobPosting,
) -> Result<MatchResult, AppError> {
    let semantic_score = semantic.score(resume, job).await?;
    let breakdown = score_match(
        &resume.skills,
        &job.must_have_skills,
        &job.good_to_have_skills,
        semantic_score,
    )
    .map_err(|e| match AppError::from(e) {
        AppError::InvalidJobSpec(msg) => AppError::InvalidJobSpec(format!("Job {}: {msg}", job.id)),
        other => other,
    })?;

    debug!(
        resume_id = %resume.id,
        job_id = %job.id,
        backend = semantic.backend(),
        hard = breakdown.hard_match_score,
        semantic = breakdown.semantic_match_score,
        "Scored pair"
    );

    Ok(breakdown.into_result(resume.id, job.id))
}

/// Scores one resume against one job and records the result.
/// Nothing is recorded when either id is unknown or the job cannot be scored.
pub async fn analyze(
    store: &Store,
    semantic: &dyn SemanticScorer,
    policy: ReanalysisPolicy,
    resume_id: Uuid,
    job_id: Uuid,
) -> Result<MatchResult, AppError> {
    let resume = resolve_resume(store, resume_id)?;
    let job = resolve_job(store, job_id)?;

    let result = score_pair(semantic, &resume, &job).await?;
    let recorded = store.record_result(result.clone(), policy);

    info!(
        result_id = %recorded.result_id,
        relevance = result.relevance_score,
        verdict = %result.verdict,
        replaced = recorded.replaced.len(),
        "Recorded analysis of resume {resume_id} against job {job_id}"
    );
    Ok(result)
}

/// Scores one resume against several jobs, in the order given.
///
/// An empty `job_ids` means every active job. All jobs are resolved and scored
/// before anything is recorded, so a bad id leaves the store untouched.
pub async fn analyze_batch(
    store: &Store,
    semantic: &dyn SemanticScorer,
    policy: ReanalysisPolicy,
    resume_id: Uuid,
    job_ids: &[Uuid],
) -> Result<Vec<MatchResult>, AppError> {
    let resume = resolve_resume(store, resume_id)?;

    let jobs: Vec<JobPosting> = if job_ids.is_empty() {
        store
            .jobs()
            .into_iter()
            .filter(|j| j.status == JobStatus::Active)
            .collect()
    } else {
        job_ids
            .iter()
            .map(|id| resolve_job(store, *id))
            .collect::<Result<_, _>>()?
    };

    let mut results = Vec::with_capacity(jobs.len());
    for job in &jobs {
        results.push(score_pair(semantic, &resume, job).await?);
    }

    for result in &results {
        store.record_result(result.clone(), policy);
    }

    info!(
        "Recorded {} analyses for resume {resume_id}",
        results.len()
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{job_with, sample_job, sample_resume};
    use crate::models::result::Verdict;
    use crate::scoring::{FixedSemanticScorer, RandomSemanticScorer};

    fn seeded() -> (Store, CandidateResume, JobPosting) {
        let store = Store::new();
        let resume = store.insert_resume(sample_resume());
        let job = store.insert_job(sample_job());
        (store, resume, job)
    }

    #[tokio::test]
    async fn test_analyze_records_scored_result() {
        let (store, resume, job) = seeded();
        let result = analyze(
            &store,
            &FixedSemanticScorer(75.0),
            ReanalysisPolicy::Append,
            resume.id,
            job.id,
        )
        .await
        .unwrap();

        assert_eq!(result.hard_match_score, 48);
        assert_eq!(result.semantic_match_score, 75);
        assert_eq!(result.relevance_score, 59);
        assert_eq!(result.verdict, Verdict::Low);
        assert_eq!(result.matched_skills, vec!["Python", "SQL"]);
        assert_eq!(
            result.missing_skills,
            vec!["Machine Learning", "Statistics", "Pandas"]
        );
        assert_eq!(store.results().len(), 1);
        assert_eq!(store.get_result(result.id).unwrap().resume_id, resume.id);
    }

    #[tokio::test]
    async fn test_unknown_resume_records_nothing() {
        let (store, _, job) = seeded();
        let err = analyze(
            &store,
            &FixedSemanticScorer(75.0),
            ReanalysisPolicy::Append,
            Uuid::new_v4(),
            job.id,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg.starts_with("Resume")));
        assert!(store.results().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_job_records_nothing() {
        let (store, resume, _) = seeded();
        let err = analyze(
            &store,
            &FixedSemanticScorer(75.0),
            ReanalysisPolicy::Append,
            resume.id,
            Uuid::new_v4(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg.starts_with("Job")));
        assert!(store.results().is_empty());
    }

    #[tokio::test]
    async fn test_job_without_must_have_is_invalid_spec() {
        let (store, resume, _) = seeded();
        let empty = store.insert_job(job_with("Intern", "Pune", &[], &["Python"]));
        let err = analyze(
            &store,
            &FixedSemanticScorer(75.0),
            ReanalysisPolicy::Append,
            resume.id,
            empty.id,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidJobSpec(msg) if msg.contains(&empty.id.to_string())));
        assert!(store.results().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_analysis_is_not_idempotent() {
        let (store, resume, job) = seeded();
        let mut results = Vec::new();
        for _ in 0..64 {
            results.push(
                analyze(
                    &store,
                    &RandomSemanticScorer,
                    ReanalysisPolicy::Append,
                    resume.id,
                    job.id,
                )
                .await
                .unwrap(),
            );
        }

        let first = &results[0];
        for other in &results[1..] {
            assert_ne!(other.id, first.id);
            assert_eq!(other.hard_match_score, first.hard_match_score);
            assert_eq!(other.matched_skills, first.matched_skills);
            assert_eq!(other.missing_skills, first.missing_skills);
            assert!((60..=90).contains(&other.semantic_match_score));
        }
        assert!(
            results
                .iter()
                .any(|r| r.semantic_match_score != first.semantic_match_score),
            "semantic score never varied across 64 analyses"
        );
        assert_eq!(store.results().len(), 64);
    }

    #[tokio::test]
    async fn test_replace_policy_keeps_single_result_per_pair() {
        let (store, resume, job) = seeded();
        for score in [65.0, 70.0, 88.0] {
            analyze(
                &store,
                &FixedSemanticScorer(score),
                ReanalysisPolicy::Replace,
                resume.id,
                job.id,
            )
            .await
            .unwrap();
        }
        let results = store.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].semantic_match_score, 88);
    }

    #[tokio::test]
    async fn test_batch_defaults_to_active_jobs() {
        let (store, resume, _) = seeded();
        let mut closed = job_with("Closed Role", "Delhi NCR", &["Go"], &[]);
        closed.status = JobStatus::Closed;
        store.insert_job(closed);
        store.insert_job(job_with("Analyst", "Pune", &["SQL"], &[]));

        let results = analyze_batch(
            &store,
            &FixedSemanticScorer(70.0),
            ReanalysisPolicy::Append,
            resume.id,
            &[],
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(store.results().len(), 2);
    }

    #[tokio::test]
    async fn test_batch_with_bad_id_records_nothing() {
        let (store, resume, job) = seeded();
        let err = analyze_batch(
            &store,
            &FixedSemanticScorer(70.0),
            ReanalysisPolicy::Append,
            resume.id,
            &[job.id, Uuid::new_v4()],
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(store.results().is_empty());
    }

    #[tokio::test]
    async fn test_batch_with_unscorable_job_records_nothing() {
        let (store, resume, job) = seeded();
        let empty = store.insert_job(job_with("Intern", "Pune", &[], &[]));
        let err = analyze_batch(
            &store,
            &FixedSemanticScorer(70.0),
            ReanalysisPolicy::Append,
            resume.id,
            &[job.id, empty.id],
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidJobSpec(_)));
        assert!(store.results().is_empty());
    }
}
