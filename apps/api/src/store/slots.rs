use std::path::PathBuf;

use crate::errors::AppError;
use crate::models::slot::Slot;
use crate::store::{read_json_or_default, write_json_atomic};

/// The persisted slot list.
#[derive(Debug, Clone)]
pub struct SlotStore {
    path: PathBuf,
}

impl SlotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<Vec<Slot>, AppError> {
        read_json_or_default(&self.path).await
    }

    pub async fn save(&self, slots: &[Slot]) -> Result<(), AppError> {
        write_json_atomic(&self.path, slots).await
    }
}
