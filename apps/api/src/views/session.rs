use serde::{Deserialize, Serialize};

use crate::catalog::JobCatalog;
use crate::errors::AppError;
use crate::models::job::JobRecord;

/// Per-session UI state. The client holds it and sends it back with each request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Job currently opened on the catalog page.
    #[serde(default)]
    pub selected_job: Option<String>,
}

impl SessionState {
    /// Marks `name` as the selected job. Unknown names leave the session untouched.
    pub fn select_job<'a>(
        &mut self,
        catalog: &'a JobCatalog,
        name: &str,
    ) -> Result<&'a JobRecord, AppError> {
        let job = catalog
            .find(name)
            .ok_or_else(|| AppError::NotFound(format!("Job '{name}' not found")))?;
        self.selected_job = Some(job.name.clone());
        Ok(job)
    }

    /// The selected job, if it still exists in the catalog.
    pub fn selected<'a>(&self, catalog: &'a JobCatalog) -> Option<&'a JobRecord> {
        self.selected_job
            .as_deref()
            .and_then(|name| catalog.find(name))
    }
}
