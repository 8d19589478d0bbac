use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::errors::AppError;

/// Raw roster grid: trimmed header names plus trimmed cell text per row.
/// Fully blank rows are dropped.
#[derive(Debug, Clone, Default)]
pub struct RosterTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RosterTable {
    /// Reads the first worksheet of a spreadsheet, or a CSV file when the
    /// extension is `.csv`.
    pub fn read(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::StoreMissing(path.display().to_string()));
        }

        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

        let table = if is_csv {
            Self::from_csv_reader(std::fs::File::open(path)?)?
        } else {
            Self::from_workbook(path)?
        };

        debug!(
            path = %path.display(),
            rows = table.rows.len(),
            "Roster loaded"
        );
        Ok(table)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.trim().to_string()).collect());
        }

        Ok(Self::from_parts(headers, rows))
    }

    fn from_workbook(path: &Path) -> Result<Self, AppError> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::Storage(format!("{} has no worksheets", path.display())))??;

        let mut grid = range.rows();
        let headers = grid
            .next()
            .map(|row| row.iter().map(cell_text).collect())
            .unwrap_or_default();
        let rows = grid.map(|row| row.iter().map(cell_text).collect()).collect();

        Ok(Self::from_parts(headers, rows))
    }

    fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .filter(|row: &Vec<String>| row.iter().any(|c| !c.is_empty()))
            .collect();
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of the first header equal to `name` after trimming.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text, or `""` for an absent column or a short row.
    pub fn cell(&self, row: usize, column: Option<usize>) -> &str {
        column
            .and_then(|c| self.rows.get(row)?.get(c))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All cells of the named column, in row order.
    pub fn column_values<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let index = self.column_index(name)?;
        Some((0..self.rows.len()).map(move |row| self.cell(row, Some(index))))
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}
