//! Axum route handlers for analyses, results and the dashboard.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::analyze;
use crate::analysis::stats::{dashboard_stats, results_summary, DashboardStats, ResultsSummary};
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::job::JobPosting;
use crate::models::result::MatchResult;
use crate::models::resume::CandidateResume;
use crate::state::AppState;
use crate::store::{ResultQuery, ResultRow, ResultSort};

const RECENT_RESULTS: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_id: Uuid,
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ResultListResponse {
    pub results: Vec<ResultRow>,
    pub summary: ResultsSummary,
}

#[derive(Debug, Serialize)]
pub struct ResultDetailResponse {
    pub result: MatchResult,
    pub resume: Option<CandidateResume>,
    pub job: Option<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub recent_results: Vec<ResultRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/results
///
/// Analyzes one resume against one job and records the result.
pub async fn handle_analyze(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<(StatusCode, Json<MatchResult>), AppError> {
    let result = analyze(
        &state.store,
        state.semantic.as_ref(),
        state.policy(),
        request.resume_id,
        request.job_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(result)))
}

/// GET /api/v1/results
///
/// Filtered, sorted results plus summary cards computed over all results.
pub async fn handle_list_results(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ResultQuery>,
) -> Result<Json<ResultListResponse>, AppError> {
    let results = state.store.list_results(&query);
    let summary = results_summary(&state.store.results());
    Ok(Json(ResultListResponse { results, summary }))
}

/// GET /api/v1/results/:id
pub async fn handle_get_result(
    State(state): State<AppState>,
    ApiPath(result_id): ApiPath<Uuid>,
) -> Result<Json<ResultDetailResponse>, AppError> {
    let result = state
        .store
        .get_result(result_id)
        .ok_or_else(|| AppError::NotFound(format!("Result {result_id} not found")))?;

    Ok(Json(ResultDetailResponse {
        resume: state.store.get_resume(result.resume_id),
        job: state.store.get_job(result.job_id),
        result,
    }))
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let stats = dashboard_stats(
        &state.store.jobs(),
        &state.store.resumes(),
        &state.store.results(),
    );
    let mut recent_results = state.store.list_results(&ResultQuery {
        sort: ResultSort::Date,
        ..Default::default()
    });
    recent_results.truncate(RECENT_RESULTS);

    Ok(Json(DashboardResponse {
        stats,
        recent_results,
    }))
}
