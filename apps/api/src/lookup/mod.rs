//! Identity lookup page: find a trainee by id and last-4 phone digits.

pub mod handlers;
pub mod page;

use crate::errors::AppError;
use crate::models::trainee::TraineeRecord;
use crate::roster::phone::matches_for_lookup;
use crate::roster::Roster;

/// Finds `trainee_id` in `roster` and verifies `last4` with both sides
/// normalized to digits.
pub fn lookup_trainee<'a>(
    roster: &'a Roster,
    trainee_id: &str,
    last4: &str,
) -> Result<&'a TraineeRecord, AppError> {
    let trainee_id = trainee_id.trim();
    if trainee_id.is_empty() || last4.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Enter your trainee number and the last 4 digits of your phone.".to_string(),
        ));
    }

    let record = roster
        .find(trainee_id)
        .ok_or_else(|| AppError::NotFound("Trainee number not found in the roster.".to_string()))?;

    if !matches_for_lookup(&record.phone, last4) {
        return Err(AppError::PhoneMismatch);
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::schema::{RosterColumns, LOOKUP_COLUMNS};
    use crate::roster::table::RosterTable;

    fn roster() -> Roster {
        let columns = RosterColumns {
            trainee_id: "id".into(),
            phone: "phone".into(),
            ..RosterColumns::default()
        };
        let table =
            RosterTable::from_csv_reader("id,phone\nT1,055-123-4567\nT2,12\n".as_bytes()).unwrap();
        Roster::from_table(&table, &columns, LOOKUP_COLUMNS).unwrap()
    }

    #[test]
    fn test_formatted_submission_is_normalized() {
        let r = roster();
        assert_eq!(lookup_trainee(&r, "T1", "45-67").unwrap().trainee_id, "T1");
        assert_eq!(lookup_trainee(&r, " T1 ", "4567").unwrap().trainee_id, "T1");
    }

    #[test]
    fn test_wrong_phone() {
        let r = roster();
        assert!(matches!(
            lookup_trainee(&r, "T1", "1111"),
            Err(AppError::PhoneMismatch)
        ));
    }

    #[test]
    fn test_short_roster_phone_never_matches() {
        let r = roster();
        assert!(matches!(
            lookup_trainee(&r, "T2", "12"),
            Err(AppError::PhoneMismatch)
        ));
    }

    #[test]
    fn test_not_found_and_blank() {
        let r = roster();
        assert!(matches!(
            lookup_trainee(&r, "T9", "4567"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            lookup_trainee(&r, "", "4567"),
            Err(AppError::InvalidInput(_))
        ));
    }
}
