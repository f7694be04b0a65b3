use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::llm_client::ChatCompletion;
use crate::recommendation::heuristic::HeuristicRecommender;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<JobCatalog>,
    pub heuristic: Arc<HeuristicRecommender>,
    /// `None` when no API key is configured: recommendations use the heuristic only.
    pub llm: Option<Arc<dyn ChatCompletion>>,
}
