//! Immutable text grid read from the schedule workbook.

use anyhow::{Result, bail};

/// Row indices with fixed semantic roles in the schedule sheet.
const MONTH_NAME_ROW: usize = 0;
const DAY_NAME_ROW: usize = 1;
const DAY_NUMBER_ROW: usize = 2;

/// The raw schedule as rows of text cells. Built once per run and read-only
/// afterwards. Rows may be ragged (trailing cells missing), so consumers go
/// through [`Grid::cell`], which bounds-checks.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, idx: usize) -> Option<&[String]> {
        self.rows.get(idx).map(|r| r.as_slice())
    }

    /// Cell text at (row, col), or `""` when the row is absent or short.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn month_name_row(&self) -> Result<&[String]> {
        self.header_row(MONTH_NAME_ROW, "month-name")
    }

    pub fn day_name_row(&self) -> Result<&[String]> {
        self.header_row(DAY_NAME_ROW, "day-name")
    }

    pub fn day_number_row(&self) -> Result<&[String]> {
        self.header_row(DAY_NUMBER_ROW, "day-number")
    }

    fn header_row(&self, idx: usize, what: &str) -> Result<&[String]> {
        match self.rows.get(idx) {
            Some(row) => Ok(row),
            None => bail!(
                "schedule grid has {} row(s), missing the {} header (row {})",
                self.rows.len(),
                what,
                idx + 1
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_is_blank_outside_the_grid() {
        let grid = Grid::new(vec![vec!["a".to_string(), "b".to_string()]]);
        assert_eq!(grid.cell(0, 1), "b");
        assert_eq!(grid.cell(0, 5), "");
        assert_eq!(grid.cell(3, 0), "");
    }

    #[test]
    fn header_accessors_require_three_rows() {
        let grid = Grid::new(vec![vec!["Jan".to_string()], vec!["M".to_string()]]);
        assert!(grid.month_name_row().is_ok());
        assert!(grid.day_name_row().is_ok());
        assert!(grid.day_number_row().is_err());
    }
}
