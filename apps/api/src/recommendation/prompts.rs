// LLM prompt constants for the recommendation module.

use crate::models::job::JobRecord;
use crate::recommendation::survey::SurveyAnswers;

/// System instruction for the career-advice call.
pub const ADVISOR_SYSTEM: &str = "You are an expert IT career advisor. \
    Recommend the IT jobs that best fit the user based on their survey answers.";

/// Recommendation prompt template. Replace `{answers}` and `{jobs}` before sending.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Here are the user's survey answers:

{answers}

Here is the list of available IT jobs:

{jobs}

Based on the user's answers, recommend exactly 3 jobs from the list above and explain for each one why it fits, referring to the survey answers.
Use each job name EXACTLY as it is written in the list above. Do not rename, translate or abbreviate job names."#;

/// Builds the user prompt: one line per answered question (index order),
/// one line per job, then the fixed instruction block.
pub fn build_recommendation_prompt(answers: &SurveyAnswers, jobs: &[JobRecord]) -> String {
    let answers_text = answers
        .answered()
        .map(|(i, answer)| format!("Question {}: {}", i + 1, answer))
        .collect::<Vec<_>>()
        .join("\n");

    let jobs_text = jobs
        .iter()
        .map(|job| format!("- {}: {}", job.name, job.description))
        .collect::<Vec<_>>()
        .join("\n");

    fill_template(
        RECOMMENDATION_PROMPT_TEMPLATE,
        &[("{answers}", &answers_text), ("{jobs}", &jobs_text)],
    )
}

/// Substitutes placeholders in one left-to-right pass. Inserted values are never
/// rescanned, so a placeholder inside an answer stays literal.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
