//! Axum route handlers for the survey and recommendation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::recommendation::orchestrator::{recommend, RecommendationSource, EMPTY_RESULT_NOTICE};
use crate::recommendation::survey::{Question, SurveyAnswers, QUESTIONS};
use crate::state::AppState;
use crate::views::catalog::{job_card, JobDetail};

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub answers: SurveyAnswers,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub source: RecommendationSource,
    pub advice: Option<String>,
    pub notices: Vec<String>,
    pub warning: Option<String>,
    pub jobs: Vec<JobDetail>,
}

/// GET /api/v1/survey
pub async fn handle_get_survey() -> Json<&'static [Question]> {
    Json(&QUESTIONS[..])
}

/// POST /api/v1/recommendations
///
/// Requires all five answers, each one of its question's options. LLM failures never fail the request; they come back
/// as `warning` with a heuristic result.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let answers = request.answers;

    let unknown = answers.unknown_questions();
    if !unknown.is_empty() {
        return Err(AppError::Validation(format!(
            "Unknown survey questions: {unknown:?}"
        )));
    }

    if !answers.is_complete() {
        let numbers: Vec<String> = answers
            .missing()
            .iter()
            .map(|i| (i + 1).to_string())
            .collect();
        return Err(AppError::Validation(format!(
            "Please answer every question. Unanswered: {}",
            numbers.join(", ")
        )));
    }

    let off_list = answers.off_list_answers();
    if !off_list.is_empty() {
        let numbers: Vec<String> = off_list.iter().map(|i| (i + 1).to_string()).collect();
        return Err(AppError::Validation(format!(
            "Answers must be one of the listed options. Invalid: {}",
            numbers.join(", ")
        )));
    }

    let recommendation = recommend(
        &answers,
        &state.catalog,
        &state.heuristic,
        state.llm.as_deref(),
    )
    .await;

    let jobs: Vec<JobDetail> = recommendation
        .resolve(&state.catalog)
        .into_iter()
        .map(|job| job_card(&state.catalog, job))
        .collect();

    let mut notices = recommendation.notices;
    if jobs.is_empty() {
        notices.push(EMPTY_RESULT_NOTICE.to_string());
    }

    Ok(Json(RecommendResponse {
        source: recommendation.source,
        advice: recommendation.advice,
        notices,
        warning: recommendation.warning,
        jobs,
    }))
}
