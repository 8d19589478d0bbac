/// Roster attributes this service knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    TraineeId,
    Phone,
    Name,
    CourseRef,
    Course,
    Supervisor,
    TrainingEntity,
}

/// Columns letter generation cannot work without.
pub const LETTER_COLUMNS: &[Column] = &[Column::TraineeId, Column::Phone, Column::Name];

/// Columns the identity lookup cannot work without.
pub const LOOKUP_COLUMNS: &[Column] = &[Column::TraineeId, Column::Phone];

/// Header names (matched after trimming) for each roster attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterColumns {
    pub trainee_id: String,
    pub phone: String,
    pub name: String,
    pub course_ref: String,
    pub course: String,
    pub supervisor: String,
    pub training_entity: String,
}

impl RosterColumns {
    pub fn header(&self, column: Column) -> &str {
        match column {
            Column::TraineeId => &self.trainee_id,
            Column::Phone => &self.phone,
            Column::Name => &self.name,
            Column::CourseRef => &self.course_ref,
            Column::Course => &self.course,
            Column::Supervisor => &self.supervisor,
            Column::TrainingEntity => &self.training_entity,
        }
    }
}

impl Default for RosterColumns {
    /// The headers of the cooperative-training roster sheet.
    fn default() -> Self {
        Self {
            trainee_id: "رقم المتدرب".to_string(),
            phone: "رقم الجوال".to_string(),
            name: "إسم المتدرب".to_string(),
            course_ref: "الرقم المرجعي".to_string(),
            course: "التخصص".to_string(),
            supervisor: "المدرب".to_string(),
            training_entity: "جهة التدريب".to_string(),
        }
    }
}
