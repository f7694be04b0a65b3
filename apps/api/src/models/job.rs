use std::fmt;

use serde::{Deserialize, Serialize};

/// Quantitative attributes a job can be compared or scored on.
///
/// `Salary` is on a currency scale; every other attribute is a 0–10 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Salary,
    GrowthPotential,
    WorkEnvironment,
    WorkLifeBalance,
    Creativity,
    Stability,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Salary,
        Attribute::GrowthPotential,
        Attribute::WorkEnvironment,
        Attribute::WorkLifeBalance,
        Attribute::Creativity,
        Attribute::Stability,
    ];

    /// The key used for this attribute in the dataset file and the category map.
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Salary => "salary",
            Attribute::GrowthPotential => "growth_potential",
            Attribute::WorkEnvironment => "work_environment",
            Attribute::WorkLifeBalance => "work_life_balance",
            Attribute::Creativity => "creativity",
            Attribute::Stability => "stability",
        }
    }

    pub fn from_key(key: &str) -> Option<Attribute> {
        Attribute::ALL.into_iter().find(|a| a.key() == key)
    }

    /// Fallback display label when the category map has no entry.
    pub fn default_label(&self) -> &'static str {
        match self {
            Attribute::Salary => "Salary",
            Attribute::GrowthPotential => "Growth potential",
            Attribute::WorkEnvironment => "Work environment",
            Attribute::WorkLifeBalance => "Work-life balance",
            Attribute::Creativity => "Creativity",
            Attribute::Stability => "Stability",
        }
    }

    pub fn is_rating(&self) -> bool {
        !matches!(self, Attribute::Salary)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single job in the catalog. `name` is the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub name: String,
    pub description: String,
    pub salary: f64,
    pub growth_potential: f64,
    pub work_environment: f64,
    pub work_life_balance: f64,
    pub creativity: f64,
    pub stability: f64,
}

impl JobRecord {
    pub fn attribute(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Salary => self.salary,
            Attribute::GrowthPotential => self.growth_potential,
            Attribute::WorkEnvironment => self.work_environment,
            Attribute::WorkLifeBalance => self.work_life_balance,
            Attribute::Creativity => self.creativity,
            Attribute::Stability => self.stability,
        }
    }
}
