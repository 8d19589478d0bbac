use std::path::PathBuf;

use crate::errors::AppError;
use crate::models::assignment::AssignmentMap;
use crate::store::{read_json_or_default, write_json_atomic};

/// The persisted trainee → slot mapping.
#[derive(Debug, Clone)]
pub struct AssignmentStore {
    path: PathBuf,
}

impl AssignmentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<AssignmentMap, AppError> {
        read_json_or_default(&self.path).await
    }

    pub async fn save(&self, assignments: &AssignmentMap) -> Result<(), AppError> {
        write_json_atomic(&self.path, assignments).await
    }
}
