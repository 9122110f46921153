//! Report layout: month blocks across, canonical codes repeated per block.

use super::codes::ShiftCodes;
use super::count::count_shifts;
use super::types::{Grid, Month, Person};

/// One output cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportCell {
    Empty,
    Text(String),
    Number(u32),
}

/// Merge hint for one month block in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpan {
    /// First output column of the block.
    pub start_col: usize,
    /// Number of output columns the block covers.
    pub width: usize,
}

/// Assembled report, ready for rendering. `rows[0]` is the month header,
/// `rows[1]` the shift-type header, the rest one row per person.
#[derive(Debug, Clone, Default)]
pub struct ReportGrid {
    pub rows: Vec<Vec<ReportCell>>,
    /// Per month, in month order. The renderer merges each month-name cell
    /// across its span.
    pub month_spans: Vec<MonthSpan>,
}

/// Lay out the tally report.
///
/// Each month occupies exactly one output column per canonical code, with
/// the month name at the block's first column, so the shift-type header row
/// and every data row line up positionally under the month header.
pub fn assemble(
    grid: &Grid,
    months: &[Month],
    people: &[Person],
    codes: &ShiftCodes,
) -> ReportGrid {
    let mut month_row = vec![ReportCell::Empty];
    let mut shift_row = vec![ReportCell::Text("Name".to_string())];
    let mut month_spans = Vec::with_capacity(months.len());

    for month in months {
        month_spans.push(MonthSpan {
            start_col: month_row.len(),
            width: codes.len(),
        });

        month_row.push(ReportCell::Text(month.name.clone()));
        month_row.extend(std::iter::repeat_n(
            ReportCell::Empty,
            codes.len().saturating_sub(1),
        ));

        shift_row.extend(codes.iter().map(|code| ReportCell::Text(code.to_string())));
    }

    let mut rows = vec![month_row, shift_row];

    for person in people {
        let mut row = Vec::with_capacity(1 + months.len() * codes.len());
        row.push(ReportCell::Text(person.name.clone()));

        let mut worked = 0;
        for month in months {
            let tally = count_shifts(grid, person, month, codes);
            worked += tally.worked_total();
            row.extend(tally.in_order(codes).map(ReportCell::Number));
        }
        log::debug!(
            "{}: {} recognized shift(s) across {} month(s)",
            person.name.trim(),
            worked,
            months.len()
        );

        rows.push(row);
    }

    ReportGrid { rows, month_spans }
}
