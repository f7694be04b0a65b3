//! Job catalog: the static dataset of job records and category labels.
//!
//! Loaded once at startup and shared read-only through `AppState`.
//! Any load failure is fatal: the service refuses to start without a valid catalog.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::job::{Attribute, JobRecord};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read job data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("job data file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("job '{0}' appears more than once in the catalog")]
    DuplicateJob(String),

    #[error("category '{0}' is not a known job attribute")]
    UnknownCategory(String),
}

/// On-disk shape: `{"jobs": [...], "categories": {key: label}}`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    jobs: Vec<JobRecord>,
    categories: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<JobRecord>,
    /// Ordered by `Attribute` declaration order.
    categories: Vec<(Attribute, String)>,
}

impl JobCatalog {
    /// Reads and validates the dataset file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "Loaded {} jobs and {} categories from {}",
            catalog.jobs.len(),
            catalog.categories.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.jobs, file.categories)
    }

    pub fn new(
        jobs: Vec<JobRecord>,
        categories: BTreeMap<String, String>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for job in &jobs {
            if !seen.insert(job.name.as_str()) {
                return Err(CatalogError::DuplicateJob(job.name.clone()));
            }
        }

        let mut resolved = Vec::with_capacity(categories.len());
        for (key, label) in categories {
            let attribute = Attribute::from_key(&key)
                .ok_or_else(|| CatalogError::UnknownCategory(key.clone()))?;
            resolved.push((attribute, label));
        }
        resolved.sort_by_key(|(attribute, _)| *attribute);

        Ok(Self {
            jobs,
            categories: resolved,
        })
    }

    /// All jobs, in catalog order.
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn categories(&self) -> &[(Attribute, String)] {
        &self.categories
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&JobRecord> {
        self.jobs.iter().find(|job| job.name == name)
    }

    /// The category label for `attribute`, if the category map lists it.
    pub fn category_label(&self, attribute: Attribute) -> Option<&str> {
        self.categories
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, label)| label.as_str())
    }

    /// Label used when rendering an attribute, falling back to a built-in name.
    pub fn display_label(&self, attribute: Attribute) -> &str {
        self.category_label(attribute)
            .unwrap_or_else(|| attribute.default_label())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn job(
        name: &str,
        salary: f64,
        growth: f64,
        balance: f64,
        creativity: f64,
        stability: f64,
    ) -> JobRecord {
        JobRecord {
            name: name.to_string(),
            description: format!("{name} description"),
            salary,
            growth_potential: growth,
            work_environment: 7.0,
            work_life_balance: balance,
            creativity,
            stability,
        }
    }

    /// The eight-job catalog used across module tests.
    pub fn sample_catalog() -> JobCatalog {
        let jobs = vec![
            job("Software Developer", 5500.0, 8.0, 6.0, 7.0, 7.0),
            job("Web Developer", 4800.0, 7.0, 6.0, 8.0, 6.0),
            job("Data Scientist", 6200.0, 9.0, 7.0, 8.0, 7.0),
            job("AI/ML Engineer", 7000.0, 10.0, 6.0, 9.0, 6.0),
            job("Project Manager", 6000.0, 7.0, 5.0, 6.0, 8.0),
            job("UI/UX Designer", 4500.0, 7.0, 7.0, 10.0, 6.0),
            job("System Engineer", 5200.0, 6.0, 6.0, 5.0, 9.0),
            job("DevOps Engineer", 6500.0, 9.0, 5.0, 7.0, 7.0),
        ];
        let categories = Attribute::ALL
            .into_iter()
            .map(|a| (a.key().to_string(), a.default_label().to_string()))
            .collect();
        JobCatalog::new(jobs, categories).unwrap()
    }
}
