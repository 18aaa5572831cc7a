pub mod health;
pub mod meta;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::jobs::handlers as jobs;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/session", get(meta::handle_session))
        .route("/api/v1/locations", get(meta::handle_locations))
        .route("/api/v1/dashboard", get(analysis::handle_dashboard))
        // Jobs
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Resumes
        .route(
            "/api/v1/resumes",
            get(resumes::handle_list_resumes).post(resumes::handle_create_resume),
        )
        .route("/api/v1/resumes/:id", get(resumes::handle_get_resume))
        .route(
            "/api/v1/resumes/:id/analyze",
            post(resumes::handle_analyze_resume),
        )
        // Results
        .route(
            "/api/v1/results",
            get(analysis::handle_list_results).post(analysis::handle_analyze),
        )
        .route("/api/v1/results/:id", get(analysis::handle_get_result))
        .with_state(state)
}
