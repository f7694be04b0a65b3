pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers as recommendation;
use crate::state::AppState;
use crate::views::handlers as views;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog and comparison pages
        .route("/api/v1/jobs", get(views::handle_get_catalog))
        .route("/api/v1/jobs/select", post(views::handle_select_job))
        .route("/api/v1/compare", post(views::handle_compare))
        // Survey recommender
        .route("/api/v1/survey", get(recommendation::handle_get_survey))
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_recommend),
        )
        .with_state(state)
}
