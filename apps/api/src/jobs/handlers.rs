//! Axum route handlers for the marketplace API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::companies::{CompanyCard, CompanyId, JobSummary};
use crate::errors::AppError;
use crate::jobs::models::{ErrorKind, JobPreview, JobRequest, JobResult, JobStatus};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanyCard>,
}

#[derive(Debug, Serialize)]
pub struct CompanyJobsResponse {
    pub company_id: CompanyId,
    pub jobs: Vec<JobSummary>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub brief: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MarketplaceHealthResponse {
    pub status: &'static str,
    pub companies: Vec<CompanyId>,
    pub total_job_types: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /marketplace/companies
pub async fn handle_list_companies(State(state): State<AppState>) -> Json<CompanyListResponse> {
    Json(CompanyListResponse {
        companies: state.registry().list_companies(),
    })
}

/// GET /marketplace/companies/:company_id
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<Json<CompanyCard>, AppError> {
    let company = state.registry().get_company(&company_id)?;
    Ok(Json(company.card()))
}

/// GET /marketplace/companies/:company_id/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<Json<CompanyJobsResponse>, AppError> {
    let company = state.registry().get_company(&company_id)?;
    Ok(Json(CompanyJobsResponse {
        company_id: company.id,
        jobs: company.card().jobs,
    }))
}

/// POST /marketplace/submit
///
/// Runs the job synchronously and always answers with the result envelope.
/// The transport status mirrors the envelope's outcome.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(request): Json<JobRequest>,
) -> (StatusCode, Json<JobResult>) {
    let result = state.runner.submit(request).await;
    (status_for(&result), Json(result))
}

fn status_for(result: &JobResult) -> StatusCode {
    match (result.status, result.error_kind) {
        (JobStatus::Done, _) => StatusCode::OK,
        (_, Some(ErrorKind::NotFound)) => StatusCode::NOT_FOUND,
        (_, Some(ErrorKind::InvalidJobType | ErrorKind::MissingField)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET /marketplace/demo/:company_id/:job_type
///
/// Shows what a job would do without calling the provider.
/// Useful for testing a frontend connection before spending credits.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path((company_id, job_type)): Path<(String, String)>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<JobPreview>, AppError> {
    let preview = state
        .runner
        .dispatcher()
        .preview(&company_id, &job_type, query.brief.as_deref())?;
    Ok(Json(preview))
}

/// GET /marketplace/health
pub async fn handle_marketplace_health(
    State(state): State<AppState>,
) -> Json<MarketplaceHealthResponse> {
    Json(MarketplaceHealthResponse {
        status: "ok",
        companies: state.registry().companies().map(|c| c.id).collect(),
        total_job_types: state.registry().total_job_types(),
    })
}
