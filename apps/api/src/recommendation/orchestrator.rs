//! Recommendation orchestration: chooses between the LLM and the heuristic scorer.
//!
//! Flow (linear, no retries):
//! 1. No LLM configured → heuristic, plus a notice explaining how to enable the LLM.
//! 2. Otherwise build the prompt and make one chat-completion call.
//! 3. Success → parse job names out of the text. Zero names is returned as-is
//!    (no heuristic fallback on this branch).
//! 4. Any LLM failure → heuristic, with the failure reason as a non-fatal warning.

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::JobCatalog;
use crate::llm_client::ChatCompletion;
use crate::models::job::JobRecord;
use crate::recommendation::heuristic::HeuristicRecommender;
use crate::recommendation::parser::parse_recommendations;
use crate::recommendation::prompts::{build_recommendation_prompt, ADVISOR_SYSTEM};
use crate::recommendation::survey::SurveyAnswers;

pub const MISSING_KEY_NOTICE: &str =
    "OPENAI_API_KEY is not configured, so the basic recommender was used.";
pub const CONFIGURE_KEY_NOTICE: &str = "For AI-assisted recommendations, set OPENAI_API_KEY \
    in the secrets file (see secrets.toml.example) or in the environment.";
pub const FALLBACK_NOTICE: &str = "Falling back to the basic recommender.";
pub const EMPTY_RESULT_NOTICE: &str = "No suitable job could be found. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Heuristic,
    Llm,
}

/// Ranked job names plus everything the caller needs to explain how they were produced.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Best first, at most three.
    pub job_names: Vec<String>,
    pub source: RecommendationSource,
    /// Full LLM answer, shown alongside the ranked jobs.
    pub advice: Option<String>,
    /// Informational messages for display.
    pub notices: Vec<String>,
    /// Non-fatal LLM failure reason, if the heuristic had to step in.
    pub warning: Option<String>,
}

impl Recommendation {
    /// Resolves names to catalog records, silently dropping unknown names.
    pub fn resolve<'a>(&self, catalog: &'a JobCatalog) -> Vec<&'a JobRecord> {
        self.job_names
            .iter()
            .filter_map(|name| catalog.find(name))
            .collect()
    }
}

pub async fn recommend(
    answers: &SurveyAnswers,
    catalog: &JobCatalog,
    heuristic: &HeuristicRecommender,
    llm: Option<&dyn ChatCompletion>,
) -> Recommendation {
    let jobs = catalog.jobs();

    let Some(llm) = llm else {
        info!("No LLM configured; using heuristic recommender");
        return Recommendation {
            job_names: heuristic.recommend(answers, jobs),
            source: RecommendationSource::Heuristic,
            advice: None,
            notices: vec![
                MISSING_KEY_NOTICE.to_string(),
                CONFIGURE_KEY_NOTICE.to_string(),
            ],
            warning: None,
        };
    };

    let prompt = build_recommendation_prompt(answers, jobs);

    match llm.complete(ADVISOR_SYSTEM, &prompt).await {
        Ok(text) => {
            let job_names = parse_recommendations(&text, jobs);
            info!(
                "LLM ({}) recommended {} known jobs",
                llm.model(),
                job_names.len()
            );
            Recommendation {
                job_names,
                source: RecommendationSource::Llm,
                advice: Some(text),
                notices: Vec::new(),
                warning: None,
            }
        }
        Err(e) => {
            warn!("LLM recommendation failed, using heuristic: {e}");
            Recommendation {
                job_names: heuristic.recommend(answers, jobs),
                source: RecommendationSource::Heuristic,
                advice: None,
                notices: vec![FALLBACK_NOTICE.to_string()],
                warning: Some(format!("The AI recommendation call failed: {e}")),
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fakes::{FailingLlm, ScriptedLlm};
    use super::*;
    use crate::catalog::fixtures::sample_catalog;

    fn answers() -> SurveyAnswers {
        SurveyAnswers::new()
            .with(0, "Working alone with deep focus")
            .with(1, "Room for growth and challenge")
            .with(2, "Fast-moving environment full of change")
            .with(3, "Data/AI/ML")
            .with(4, "Continuous growth and learning")
    }

    #[tokio::test]
    async fn test_without_llm_returns_heuristic_output_unchanged() {
        let catalog = sample_catalog();
        let heuristic = HeuristicRecommender::default();

        let result = recommend(&answers(), &catalog, &heuristic, None).await;

        assert_eq!(result.source, RecommendationSource::Heuristic);
        assert_eq!(result.job_names, heuristic.recommend(&answers(), catalog.jobs()));
        assert!(result.warning.is_none());
        assert!(result.advice.is_none());
        assert_eq!(result.notices[0], MISSING_KEY_NOTICE);
    }

    #[tokio::test]
    async fn test_failing_llm_falls_back_with_warning() {
        let catalog = sample_catalog();
        let heuristic = HeuristicRecommender::default();

        let result = recommend(&answers(), &catalog, &heuristic, Some(&FailingLlm)).await;

        assert_eq!(result.source, RecommendationSource::Heuristic);
        assert_eq!(result.job_names, heuristic.recommend(&answers(), catalog.jobs()));
        let warning = result.warning.unwrap();
        assert!(warning.contains("connection reset by peer"), "{warning}");
        assert_eq!(result.notices, vec![FALLBACK_NOTICE.to_string()]);
    }

    #[tokio::test]
    async fn test_llm_reply_parsed_in_catalog_order() {
        let catalog = sample_catalog();
        let reply = "1. AI/ML Engineer - you like working alone.\n\
                     2. DevOps Engineer - fast change.\n\
                     3. Data Scientist - data interest.";
        let llm = ScriptedLlm::new(reply);

        let heuristic = HeuristicRecommender::default();

        let result = recommend(&answers(), &catalog, &heuristic, Some(&llm)).await;

        assert_eq!(result.source, RecommendationSource::Llm);
        assert_eq!(
            result.job_names,
            vec!["Data Scientist", "AI/ML Engineer", "DevOps Engineer"]
        );
        assert_eq!(result.advice.as_deref(), Some(reply));
        assert!(result.warning.is_none());
    }

    #[tokio::test]
    async fn test_llm_receives_advisor_system_and_built_prompt() {
        let catalog = sample_catalog();
        let llm = ScriptedLlm::new("Web Developer");

        let heuristic = HeuristicRecommender::default();

        recommend(&answers(), &catalog, &heuristic, Some(&llm)).await;

        let prompts = llm.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].0, ADVISOR_SYSTEM);
        assert_eq!(prompts[0].1, build_recommendation_prompt(&answers(), catalog.jobs()));
    }

    #[tokio::test]
    async fn test_llm_reply_without_known_names_does_not_fall_back() {
        let catalog = sample_catalog();
        let llm = ScriptedLlm::new("Have you considered becoming a chef?");

        let heuristic = HeuristicRecommender::default();

        let result = recommend(&answers(), &catalog, &heuristic, Some(&llm)).await;

        assert_eq!(result.source, RecommendationSource::Llm);
        assert!(result.job_names.is_empty());
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_resolve_drops_unknown_names() {
        let catalog = sample_catalog();
        let recommendation = Recommendation {
            job_names: vec![
                "Data Scientist".to_string(),
                "Astronaut".to_string(),
                "Web Developer".to_string(),
            ],
            source: RecommendationSource::Llm,
            advice: None,
            notices: Vec::new(),
            warning: None,
        };

        let names: Vec<&str> = recommendation
            .resolve(&catalog)
            .iter()
            .map(|j| j.name.as_str())
            .collect();
        assert_eq!(names, vec!["Data Scientist", "Web Developer"]);
    }
}
