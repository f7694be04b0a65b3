// Page-level view models for the three pages: job catalog, comparison, and
// recommendation results. Views are plain data; the HTTP layer serializes them.
// Session state is passed in explicitly and handed back, never held globally.

pub mod catalog;
pub mod compare;
pub mod handlers;
pub mod session;

use serde::Serialize;

use crate::models::job::{Attribute, JobRecord};

/// Jobs per row in the catalog grid.
pub const GRID_COLUMNS: usize = 3;

/// A labelled attribute value, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub attribute: Attribute,
    pub label: String,
    pub value: f64,
    pub display: String,
}

impl Metric {
    pub fn new(job: &JobRecord, attribute: Attribute, label: &str) -> Self {
        let value = job.attribute(attribute);
        Self {
            attribute,
            label: label.to_string(),
            value,
            display: format_attribute(attribute, value),
        }
    }
}

/// Salary with thousands separators; ratings as `n/10`.
pub fn format_attribute(attribute: Attribute, value: f64) -> String {
    if attribute.is_rating() {
        format!("{}/10", format_number(value))
    } else {
        format_thousands(value)
    }
}

/// Integers without a decimal point, everything else to two places.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn format_thousands(value: f64) -> String {
    let formatted = format_number(value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
