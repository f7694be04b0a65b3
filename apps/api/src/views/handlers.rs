//! Axum route handlers for the catalog and comparison pages.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::views::catalog::{catalog_view, job_detail, CatalogView, JobDetail};
use crate::views::compare::{compare_view, CompareRequest, CompareView};
use crate::views::session::SessionState;

#[derive(Debug, Deserialize)]
pub struct SelectJobRequest {
    #[serde(default)]
    pub session: SessionState,
    pub job_name: String,
}

#[derive(Debug, Serialize)]
pub struct SelectJobResponse {
    pub session: SessionState,
    pub detail: JobDetail,
}

/// GET /api/v1/jobs
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<CatalogView> {
    Json(catalog_view(&state.catalog, &SessionState::default()))
}

/// POST /api/v1/jobs/select
///
/// Stores the selection in the caller's session and returns the job's detail panel.
pub async fn handle_select_job(
    State(state): State<AppState>,
    Json(request): Json<SelectJobRequest>,
) -> Result<Json<SelectJobResponse>, AppError> {
    let mut session = request.session;
    let job = session.select_job(&state.catalog, &request.job_name)?;
    let detail = job_detail(&state.catalog, job);
    Ok(Json(SelectJobResponse { session, detail }))
}

/// POST /api/v1/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareView>, AppError> {
    Ok(Json(compare_view(&state.catalog, &request)?))
}
