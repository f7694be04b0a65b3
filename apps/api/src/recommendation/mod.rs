// Survey-driven job recommendation.
// Heuristic scoring is pure; the LLM path goes through llm_client only.

pub mod handlers;
pub mod heuristic;
pub mod orchestrator;
pub mod parser;
pub mod prompts;
pub mod survey;

/// Upper bound on recommended jobs, whichever path produced them.
pub const MAX_RECOMMENDATIONS: usize = 3;
