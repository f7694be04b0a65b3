//! Comparison page: one attribute across two or more jobs, as a bar chart and a table.

use serde::{Deserialize, Serialize};

use crate::catalog::JobCatalog;
use crate::errors::AppError;
use crate::models::job::{Attribute, JobRecord};
use crate::views::format_attribute;

pub const NO_CATEGORY_WARNING: &str = "Please choose a category to compare.";
pub const NO_JOBS_WARNING: &str = "Please select at least two jobs to compare.";
pub const ONE_JOB_WARNING: &str = "Comparison needs at least two selected jobs.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub jobs: Vec<String>,
    /// Category key, e.g. `"salary"`. Blank means no category chosen.
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub job: String,
    pub value: f64,
    /// Text drawn above the bar.
    pub text: String,
}

/// Grouped bar chart, one bar per job, no legend.
#[derive(Debug, Clone, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable {
    pub columns: [String; 2],
    pub rows: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareView {
    pub can_compare: bool,
    pub warning: Option<String>,
    pub chart: Option<BarChart>,
    pub table: Option<ComparisonTable>,
}

impl CompareView {
    fn blocked(warning: &str) -> Self {
        Self {
            can_compare: false,
            warning: Some(warning.to_string()),
            chart: None,
            table: None,
        }
    }
}

/// Builds the comparison. Selected jobs are shown in catalog order, duplicates collapsed.
///
/// Unknown job names are `NotFound`; an unknown or unlisted category is a validation error.
/// Unmet preconditions are not errors: they produce a blocked view with a warning,
/// checked in order: no category, no jobs, one job.
pub fn compare_view(
    catalog: &JobCatalog,
    request: &CompareRequest,
) -> Result<CompareView, AppError> {
    if let Some(unknown) = request.jobs.iter().find(|name| catalog.find(name).is_none()) {
        return Err(AppError::NotFound(format!("Job '{unknown}' not found")));
    }

    let attribute = request
        .category
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| resolve_category(catalog, key))
        .transpose()?;

    let selected: Vec<&JobRecord> = catalog
        .jobs()
        .iter()
        .filter(|job| request.jobs.contains(&job.name))
        .collect();

    let Some(attribute) = attribute else {
        return Ok(CompareView::blocked(NO_CATEGORY_WARNING));
    };
    match selected.len() {
        0 => return Ok(CompareView::blocked(NO_JOBS_WARNING)),
        1 => return Ok(CompareView::blocked(ONE_JOB_WARNING)),
        _ => {}
    }

    let label = catalog.display_label(attribute).to_string();

    let bars = selected
        .iter()
        .map(|job| {
            let value = job.attribute(attribute);
            Bar {
                job: job.name.clone(),
                value,
                text: format_attribute(attribute, value),
            }
        })
        .collect();

    let rows = selected
        .iter()
        .map(|job| (job.name.clone(), job.attribute(attribute)))
        .collect();

    Ok(CompareView {
        can_compare: true,
        warning: None,
        chart: Some(BarChart {
            title: format!("{label} by job"),
            x_label: "Job".to_string(),
            y_label: label.clone(),
            bars,
        }),
        table: Some(ComparisonTable {
            columns: ["Job".to_string(), label],
            rows,
        }),
    })
}

fn resolve_category(catalog: &JobCatalog, key: &str) -> Result<Attribute, AppError> {
    Attribute::from_key(key)
        .filter(|a| catalog.category_label(*a).is_some())
        .ok_or_else(|| AppError::Validation(format!("Unknown comparison category '{key}'")))
}
