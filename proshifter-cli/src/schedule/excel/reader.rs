//! Schedule workbook reading.

use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::schedule::types::Grid;

/// Sheet the schedule grid must live on.
const SCHEDULE_SHEET: &str = "Schedule";

/// Read the schedule workbook into a text grid.
///
/// Every cell becomes text. Whole floats lose their fractional part so the
/// day-number header compares as `"1"`, not `"1.0"`.
pub fn read_schedule<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open schedule file: {}", path.display()))?;

    if !workbook.sheet_names().iter().any(|name| name == SCHEDULE_SHEET) {
        bail!("'{}' sheet not found in {}", SCHEDULE_SHEET, path.display());
    }

    let range = workbook
        .worksheet_range(SCHEDULE_SHEET)
        .with_context(|| format!("Failed to read sheet: {}", SCHEDULE_SHEET))?;

    // The used range starts at the first populated cell, but row/column
    // indices in the grid are absolute. Pad the top and left so the
    // metadata columns keep their positions.
    let (row_off, col_off) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); row_off];
    rows.extend(range.rows().map(|row| {
        let mut cells = vec![String::new(); col_off];
        cells.extend(row.iter().map(cell_to_text));
        cells
    }));

    log::debug!("read {} row(s) from '{}'", rows.len(), SCHEDULE_SHEET);
    Ok(Grid::new(rows))
}

/// Convert an Excel cell to plain text
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}
