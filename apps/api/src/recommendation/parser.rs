//! Extracts recommended job names from free-text LLM output.

use crate::models::job::JobRecord;
use crate::recommendation::MAX_RECOMMENDATIONS;

/// Returns catalog job names that occur verbatim in `text`.
///
/// Order follows the catalog, not the text. At most `MAX_RECOMMENDATIONS` names.
/// An empty result means the model named no known job.
pub fn parse_recommendations(text: &str, jobs: &[JobRecord]) -> Vec<String> {
    jobs.iter()
        .filter(|job| text.contains(job.name.as_str()))
        .take(MAX_RECOMMENDATIONS)
        .map(|job| job.name.clone())
        .collect()
}
