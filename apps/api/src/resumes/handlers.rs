use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyze_batch;
use crate::analysis::stats::{results_summary, summarize_resumes, ResumeSummary};
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath, ApiQuery, JsonOrDefault};
use crate::models::job::JobStatus;
use crate::models::result::MatchResult;
use crate::models::resume::{CandidateResume, NewResume};
use crate::resumes::build_resume;
use crate::state::AppState;
use crate::store::{ResultQuery, ResultRow, ResumeFilter};

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeSummary>,
    pub total_resumes: usize,
    pub active_jobs: usize,
    pub total_analyses: usize,
    /// Mean relevance over every recorded result, rounded.
    pub average_score: u32,
}

#[derive(Debug, Serialize)]
pub struct ResumeDetailResponse {
    pub resume: CandidateResume,
    pub results: Vec<ResultRow>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeResumeRequest {
    /// Empty means every active job.
    #[serde(default)]
    pub job_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub results: Vec<MatchResult>,
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ResumeFilter>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state.store.list_resumes(&filter);
    let results = state.store.results();
    let summaries = summarize_resumes(resumes, &results);
    let overall = results_summary(&results);
    let total_resumes = state.store.resumes().len();
    let active_jobs = state
        .store
        .jobs()
        .iter()
        .filter(|j| j.status == JobStatus::Active)
        .count();

    Ok(Json(ResumeListResponse {
        resumes: summaries,
        total_resumes,
        active_jobs,
        total_analyses: overall.total_analyses,
        average_score: overall.average_score,
    }))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NewResume>,
) -> Result<(StatusCode, Json<CandidateResume>), AppError> {
    let resume = state.store.insert_resume(build_resume(request)?);
    info!(
        "Created resume {} for {} ({} skills)",
        resume.id,
        resume.student_name,
        resume.skills.len()
    );
    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    ApiPath(resume_id): ApiPath<Uuid>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let resume = state
        .store
        .get_resume(resume_id)
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;
    let results = state.store.list_results(&ResultQuery {
        resume_id: Some(resume_id),
        ..Default::default()
    });
    Ok(Json(ResumeDetailResponse { resume, results }))
}

/// POST /api/v1/resumes/:id/analyze
///
/// Analyzes the resume against the selected jobs. A missing body or an empty
/// `job_ids` list means every active job.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    ApiPath(resume_id): ApiPath<Uuid>,
    JsonOrDefault(request): JsonOrDefault<AnalyzeResumeRequest>,
) -> Result<(StatusCode, Json<AnalyzeResumeResponse>), AppError> {
    let results = analyze_batch(
        &state.store,
        state.semantic.as_ref(),
        state.policy(),
        resume_id,
        &request.job_ids,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(AnalyzeResumeResponse { results })))
}
