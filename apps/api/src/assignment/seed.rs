use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::models::slot::Slot;
use crate::roster::table::RosterTable;

/// Builds one slot per distinct value of `column`, with capacity equal to
/// the number of trainees carrying that value. Blank cells and the literal
/// `nan` are skipped. Slots come out sorted by id.
pub fn seed_slots(table: &RosterTable, column: &str) -> Result<Vec<Slot>, AppError> {
    let values = table.column_values(column).ok_or_else(|| {
        AppError::SchemaError(format!("roster is missing seed column: {}", column.trim()))
    })?;

    let mut counts: BTreeMap<&str, i64> = BTreeMap::new();
    for value in values.filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("nan")) {
        *counts.entry(value).or_default() += 1;
    }

    Ok(counts
        .into_iter()
        .map(|(id, count)| Slot::new(id, count))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_and_counts() {
        let t = RosterTable::from_csv_reader(
            "id,course\nT1,Networks\nT2,Accounting\nT3,Networks\nT4,\nT5,nan\n".as_bytes(),
        )
        .unwrap();
        let slots = seed_slots(&t, "course").unwrap();
        assert_eq!(slots.len(), 2);
        assert!(slots[0].has_id("Accounting"));
        assert_eq!(slots[0].remaining, 1);
        assert!(slots[1].has_id("Networks"));
        assert_eq!(slots[1].remaining, 2);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let t = RosterTable::from_csv_reader("id\nT1\n".as_bytes()).unwrap();
        assert!(matches!(
            seed_slots(&t, "course"),
            Err(AppError::SchemaError(_))
        ));
    }
}
