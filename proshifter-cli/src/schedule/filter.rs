//! Eligible-staff extraction.

use super::types::{Grid, Person};

/// The eligibility flag lives in the last populated of the first 4 columns.
const FLAG_COLS: usize = 4;
/// The staff name lives in the last populated of the first 7 columns.
const NAME_COLS: usize = 7;

/// Collect the rows that represent eligible staff, in grid order.
///
/// A row qualifies when its name field is non-blank and its eligibility
/// flag reads `"Y"` after trimming, case-insensitively. Everything else is
/// a header, spacer, or opted-out row and is skipped without comment: this
/// is a filter, not validation.
pub fn eligible_people(grid: &Grid) -> Vec<Person> {
    let mut people = Vec::new();

    for row_idx in 0..grid.row_count() {
        let Some(row) = grid.row(row_idx) else {
            continue;
        };

        let name = last_of(row, NAME_COLS);
        let flag = last_of(row, FLAG_COLS);

        if name.trim().is_empty() {
            continue;
        }
        if flag.trim().to_uppercase() != "Y" {
            log::trace!("row {}: '{}' not flagged eligible", row_idx, name.trim());
            continue;
        }

        people.push(Person {
            name: name.to_string(),
            row: row_idx,
        });
    }

    log::debug!("found {} eligible staff row(s)", people.len());
    people
}

/// Last cell within the first `cols` columns, or `""` for an empty row.
fn last_of(row: &[String], cols: usize) -> &str {
    row.iter().take(cols).last().map(|s| s.as_str()).unwrap_or("")
}
