use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::info;

use crate::errors::AppError;
use crate::letter::template::DocxTemplate;
use crate::models::trainee::TraineeRecord;
use crate::roster::phone::matches_for_letter;
use crate::roster::schema::{RosterColumns, LETTER_COLUMNS};
use crate::roster::Roster;

pub const LETTER_EXTENSION: &str = "docx";

/// A filled letter ready to send as an attachment.
#[derive(Debug, Clone)]
pub struct GeneratedLetter {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Produces reference letters from the roster and the DOCX template.
/// Reads both files on every call and writes nothing.
#[derive(Debug, Clone)]
pub struct LetterGenerator {
    roster_path: PathBuf,
    template_path: PathBuf,
    columns: RosterColumns,
}

impl LetterGenerator {
    pub fn new(
        roster_path: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
        columns: RosterColumns,
    ) -> Self {
        Self {
            roster_path: roster_path.into(),
            template_path: template_path.into(),
            columns,
        }
    }

    /// Generates the letter for `trainee_id` after checking `phone_last4`.
    ///
    /// Failure order: blank input, missing template, missing or malformed
    /// roster, unknown trainee, phone mismatch. The phone check compares the
    /// submitted text verbatim (trimmed only) against the roster number's
    /// last four digits.
    pub fn generate(
        &self,
        trainee_id: &str,
        phone_last4: &str,
    ) -> Result<GeneratedLetter, AppError> {
        let trainee_id = trainee_id.trim();
        let phone_last4 = phone_last4.trim();
        if trainee_id.is_empty() || phone_last4.is_empty() {
            return Err(AppError::InvalidInput(
                "trainee_id and phone_last4 are required".to_string(),
            ));
        }

        let template = DocxTemplate::load(&self.template_path)?;
        let roster = Roster::load(&self.roster_path, &self.columns, LETTER_COLUMNS)?;

        let record = roster
            .find(trainee_id)
            .ok_or_else(|| AppError::NotFound(format!("Trainee {trainee_id} not found")))?;

        if !matches_for_letter(&record.phone, phone_last4) {
            return Err(AppError::PhoneMismatch);
        }

        let bytes = template.render(&letter_fields(record))?;
        let filename = format!("letter_{trainee_id}.{LETTER_EXTENSION}");

        info!(trainee_id, size = bytes.len(), "Letter generated");
        Ok(GeneratedLetter { filename, bytes })
    }
}

/// Placeholder name → value for one trainee.
pub fn letter_fields(record: &TraineeRecord) -> BTreeMap<&'static str, String> {
    BTreeMap::from([
        ("phone", record.phone.clone()),
        ("trainee_name", record.name.clone()),
        ("trainee_id", record.trainee_id.clone()),
        ("course_ref", record.course_ref.clone()),
        ("college_supervisor", record.supervisor.clone()),
        ("training_entity", record.training_entity.clone()),
    ])
}
