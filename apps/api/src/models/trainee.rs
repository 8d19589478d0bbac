use serde::Serialize;

/// One roster row, resolved against the configured column headers.
/// Every field is the trimmed cell text; absent or blank cells are `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraineeRecord {
    pub trainee_id: String,
    pub phone: String,
    pub name: String,
    pub course_ref: String,
    pub course: String,
    pub supervisor: String,
    pub training_entity: String,
}
