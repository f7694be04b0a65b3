//! Heuristic recommender: rule-based, deterministic, no I/O.
//!
//! Algorithm:
//! 1. Every job starts at 0.
//! 2. For each rule block (one per survey question), the first rule with any keyword
//!    occurring as a literal substring of the answer fires; the rest of the block is skipped.
//! 3. A fired rule adds either fixed points to a named set of jobs, or an attribute
//!    value (optionally divided) to every job.
//! 4. Jobs are ranked by score descending; ties keep catalog order.
//!
//! The rule table is data, not code: `RuleTable::default()` is the built-in table,
//! and a JSON file can replace it at startup. A loaded table must have at most one
//! block per survey question and only finite, positive divisors.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::job::{Attribute, JobRecord};
use crate::recommendation::survey::{SurveyAnswers, QUESTION_COUNT};
use crate::recommendation::MAX_RECOMMENDATIONS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Bonus {
    /// Flat points for the listed job names only.
    Fixed { points: f64, jobs: Vec<String> },
    /// `job.<attribute> / divisor` for every job.
    Attribute {
        attribute: Attribute,
        #[serde(default = "default_divisor")]
        divisor: f64,
    },
}

fn default_divisor() -> f64 {
    1.0
}

impl Bonus {
    fn fixed(points: f64, jobs: &[&str]) -> Self {
        Bonus::Fixed {
            points,
            jobs: jobs.iter().map(|j| j.to_string()).collect(),
        }
    }

    fn attribute(attribute: Attribute) -> Self {
        Bonus::Attribute {
            attribute,
            divisor: 1.0,
        }
    }

    fn apply(&self, job: &JobRecord) -> f64 {
        match self {
            Bonus::Fixed { points, jobs } => {
                if jobs.iter().any(|name| *name == job.name) {
                    *points
                } else {
                    0.0
                }
            }
            Bonus::Attribute {
                attribute,
                divisor,
            } => job.attribute(*attribute) / divisor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub keywords: Vec<String>,
    pub bonus: Bonus,
}

impl Rule {
    fn new(keywords: &[&str], bonus: Bonus) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            bonus,
        }
    }

    /// Case-sensitive literal substring match on any keyword.
    fn matches(&self, answer: &str) -> bool {
        self.keywords.iter().any(|k| answer.contains(k.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBlock {
    pub question: usize,
    /// Evaluated in order; first match wins.
    pub rules: Vec<Rule>,
}

impl RuleBlock {
    fn select<'a>(&'a self, answers: &SurveyAnswers) -> Option<&'a Rule> {
        let answer = answers.get(self.question)?;
        self.rules.iter().find(|rule| rule.matches(answer))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub blocks: Vec<RuleBlock>,
}

impl Default for RuleTable {
    fn default() -> Self {
        use Attribute::*;

        Self {
            blocks: vec![
                // Work style
                RuleBlock {
                    question: 0,
                    rules: vec![
                        Rule::new(
                            &["collaboration"],
                            Bonus::fixed(2.0, &["Project Manager", "Data Scientist"]),
                        ),
                        Rule::new(
                            &["alone"],
                            Bonus::fixed(2.0, &["Software Developer", "AI/ML Engineer"]),
                        ),
                    ],
                },
                // Priority
                RuleBlock {
                    question: 1,
                    rules: vec![
                        Rule::new(
                            &["salary"],
                            Bonus::Attribute {
                                attribute: Salary,
                                divisor: 1000.0,
                            },
                        ),
                        Rule::new(&["balance"], Bonus::attribute(WorkLifeBalance)),
                        Rule::new(&["growth"], Bonus::attribute(GrowthPotential)),
                    ],
                },
                // Environment
                RuleBlock {
                    question: 2,
                    rules: vec![
                        Rule::new(&["stability"], Bonus::attribute(Stability)),
                        Rule::new(&["change"], Bonus::attribute(GrowthPotential)),
                        Rule::new(&["creativity"], Bonus::attribute(Creativity)),
                    ],
                },
                // Tech interest
                RuleBlock {
                    question: 3,
                    rules: vec![
                        Rule::new(
                            &["frontend", "UI"],
                            Bonus::fixed(3.0, &["Web Developer", "UI/UX Designer"]),
                        ),
                        Rule::new(
                            &["backend", "system"],
                            Bonus::fixed(
                                3.0,
                                &["Software Developer", "System Engineer", "DevOps Engineer"],
                            ),
                        ),
                        Rule::new(
                            &["data", "AI"],
                            Bonus::fixed(3.0, &["Data Scientist", "AI/ML Engineer"]),
                        ),
                    ],
                },
                // Values
                RuleBlock {
                    question: 4,
                    rules: vec![
                        Rule::new(&["stability"], Bonus::attribute(Stability)),
                        Rule::new(&["innovation", "creativity"], Bonus::attribute(Creativity)),
                        Rule::new(&["growth", "learning"], Bonus::attribute(GrowthPotential)),
                    ],
                },
            ],
        }
    }
}

impl RuleTable {
    /// Loads a replacement rule table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule table {}", path.display()))?;
        let table: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Rule table {} is not valid JSON", path.display()))?;
        table
            .validate()
            .with_context(|| format!("Rule table {} is invalid", path.display()))?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for block in &self.blocks {
            if block.question >= QUESTION_COUNT {
                bail!(
                    "rule block for question {} is out of range (the survey has {QUESTION_COUNT})",
                    block.question
                );
            }
            if !seen.insert(block.question) {
                bail!("question {} has more than one rule block", block.question);
            }
            for rule in &block.rules {
                match &rule.bonus {
                    Bonus::Attribute {
                        attribute,
                        divisor,
                    } if !(divisor.is_finite() && *divisor > 0.0) => {
                        bail!(
                            "question {}: divisor for {attribute} must be finite and positive, got {divisor}",
                            block.question
                        );
                    }
                    Bonus::Fixed { points, .. } if !points.is_finite() => {
                        bail!("question {}: fixed points must be finite", block.question);
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

/// A job name with its accumulated heuristic score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredJob {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct HeuristicRecommender {
    rules: RuleTable,
}

impl HeuristicRecommender {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Scores every job, returned in catalog order.
    pub fn score_all(&self, answers: &SurveyAnswers, jobs: &[JobRecord]) -> Vec<ScoredJob> {
        let fired: Vec<&Rule> = self
            .rules
            .blocks
            .iter()
            .filter_map(|block| block.select(answers))
            .collect();

        jobs.iter()
            .map(|job| ScoredJob {
                name: job.name.clone(),
                score: fired.iter().map(|rule| rule.bonus.apply(job)).sum(),
            })
            .collect()
    }

    /// Top job names, best first. Ties keep catalog order.
    pub fn recommend(&self, answers: &SurveyAnswers, jobs: &[JobRecord]) -> Vec<String> {
        let mut scored = self.score_all(answers, jobs);
        // sort_by is stable
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|s| s.name)
            .collect()
    }
}
