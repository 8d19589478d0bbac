//! Roster access: the trainee spreadsheet, read fresh on every request.
//!
//! Reading happens in two steps. `RosterTable` is the raw header + rows
//! grid from the file; `Roster` resolves it against the configured column
//! headers once, validating the columns an entry point needs up front.

pub mod phone;
pub mod schema;
pub mod table;

use tracing::warn;

use crate::errors::AppError;
use crate::models::trainee::TraineeRecord;
use crate::roster::schema::{Column, RosterColumns};
use crate::roster::table::RosterTable;

/// Typed view over the roster rows.
#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<TraineeRecord>,
}

impl Roster {
    /// Resolves `table` against `columns`. Fails with a single
    /// `SchemaError` naming every header in `required` that is absent.
    /// Optional columns that are absent resolve to empty strings.
    pub fn from_table(
        table: &RosterTable,
        columns: &RosterColumns,
        required: &[Column],
    ) -> Result<Self, AppError> {
        let missing: Vec<&str> = required
            .iter()
            .map(|c| columns.header(*c))
            .filter(|h| table.column_index(h).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::SchemaError(format!(
                "roster is missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let index_of = |c: Column| table.column_index(columns.header(c));
        let trainee_id = index_of(Column::TraineeId);
        let phone = index_of(Column::Phone);
        let name = index_of(Column::Name);
        let course_ref = index_of(Column::CourseRef);
        let course = index_of(Column::Course);
        let supervisor = index_of(Column::Supervisor);
        let entity = index_of(Column::TrainingEntity);

        let records = (0..table.row_count())
            .map(|row| TraineeRecord {
                trainee_id: table.cell(row, trainee_id).to_string(),
                phone: table.cell(row, phone).to_string(),
                name: table.cell(row, name).to_string(),
                course_ref: table.cell(row, course_ref).to_string(),
                course: table.cell(row, course).to_string(),
                supervisor: table.cell(row, supervisor).to_string(),
                training_entity: table.cell(row, entity).to_string(),
            })
            .collect();

        Ok(Self { records })
    }

    /// Reads the roster file and resolves it in one go.
    pub fn load(
        path: &std::path::Path,
        columns: &RosterColumns,
        required: &[Column],
    ) -> Result<Self, AppError> {
        let table = RosterTable::read(path)?;
        Self::from_table(&table, columns, required)
    }

    /// First row whose trimmed identifier equals the trimmed `trainee_id`.
    /// Later duplicates are ignored, with a warning.
    pub fn find(&self, trainee_id: &str) -> Option<&TraineeRecord> {
        let trainee_id = trainee_id.trim();
        let mut matches = self.records.iter().filter(|r| r.trainee_id == trainee_id);
        let first = matches.next()?;
        let duplicates = matches.count();
        if duplicates > 0 {
            warn!(
                trainee_id,
                duplicates, "Roster has several rows for this trainee; using the first"
            );
        }
        Some(first)
    }
}
