//! Catalog page: job grid plus the detail panel for the selected job.

use serde::Serialize;

use crate::catalog::JobCatalog;
use crate::models::job::{Attribute, JobRecord};
use crate::views::session::SessionState;
use crate::views::{Metric, GRID_COLUMNS};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub key: Attribute,
    pub label: String,
}

/// A job with its description and a set of formatted attributes.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetail {
    pub name: String,
    pub description: String,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    /// Job names in catalog order, `GRID_COLUMNS` per row.
    pub rows: Vec<Vec<String>>,
    pub categories: Vec<CategoryOption>,
    pub selected: Option<JobDetail>,
}

const CARD_ATTRIBUTES: [Attribute; 3] = [
    Attribute::Salary,
    Attribute::GrowthPotential,
    Attribute::WorkEnvironment,
];

/// Detail panel: every attribute.
pub fn job_detail(catalog: &JobCatalog, job: &JobRecord) -> JobDetail {
    JobDetail {
        name: job.name.clone(),
        description: job.description.clone(),
        metrics: metrics(catalog, job, &Attribute::ALL),
    }
}

/// Compact card for the recommendation page: salary, growth, environment.
pub fn job_card(catalog: &JobCatalog, job: &JobRecord) -> JobDetail {
    JobDetail {
        name: job.name.clone(),
        description: job.description.clone(),
        metrics: metrics(catalog, job, &CARD_ATTRIBUTES),
    }
}

fn metrics(catalog: &JobCatalog, job: &JobRecord, attributes: &[Attribute]) -> Vec<Metric> {
    attributes
        .iter()
        .map(|a| Metric::new(job, *a, catalog.display_label(*a)))
        .collect()
}

pub fn catalog_view(catalog: &JobCatalog, session: &SessionState) -> CatalogView {
    let rows = catalog
        .jobs()
        .chunks(GRID_COLUMNS)
        .map(|row| row.iter().map(|job| job.name.clone()).collect())
        .collect();

    let categories = catalog
        .categories()
        .iter()
        .map(|(key, label)| CategoryOption {
            key: *key,
            label: label.clone(),
        })
        .collect();

    CatalogView {
        rows,
        categories,
        selected: session.selected(catalog).map(|job| job_detail(catalog, job)),
    }
}
