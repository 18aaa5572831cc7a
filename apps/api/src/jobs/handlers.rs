use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::jobs::build_job;
use crate::models::job::{JobPosting, NewJobPosting};
use crate::state::AppState;
use crate::store::{JobFilter, ResultQuery, ResultRow};

#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    pub job: JobPosting,
    pub results: Vec<ResultRow>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<JobFilter>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(state.store.list_jobs(&filter)))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NewJobPosting>,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    let job = state.store.insert_job(build_job(request, &state.operator)?);
    info!("Created job {} ({} at {})", job.id, job.title, job.company);
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs/:id
///
/// The posting plus every result recorded against it, best first.
pub async fn handle_get_job(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<Uuid>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let job = state
        .store
        .get_job(job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    let results = state.store.list_results(&ResultQuery {
        job_id: Some(job_id),
        ..Default::default()
    });
    Ok(Json(JobDetailResponse { job, results }))
}
