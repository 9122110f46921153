//! Month segmentation over the schedule's header rows.

use anyhow::Result;

use super::types::{Grid, Month};

/// Partition the schedule's columns into contiguous month blocks.
///
/// The day-number header row drives the scan: a trimmed `"1"` starts a new
/// month, a blank cell ends the day data (blanks before the first month are
/// leading padding). A month is only emitted once a terminating `"1"` or
/// blank column is seen; a month still open when the row ends is dropped,
/// matching the behavior schedules downstream already rely on.
pub fn segment_months(grid: &Grid) -> Result<Vec<Month>> {
    let day_numbers = grid.day_number_row()?;
    let day_names = grid.day_name_row()?;
    let month_names = grid.month_name_row()?;

    let mut months = Vec::new();
    let mut current_start: Option<usize> = None;

    for (col, cell) in day_numbers.iter().enumerate() {
        let cell = cell.trim();
        if cell == "1" || cell.is_empty() {
            if let Some(start) = current_start {
                months.push(close_month(month_names, day_names, start, col));
            }
            current_start = if cell.is_empty() { None } else { Some(col) };
        }
    }

    log::debug!("segmented {} month block(s)", months.len());
    Ok(months)
}

fn close_month(month_names: &[String], day_names: &[String], start: usize, end: usize) -> Month {
    let days = day_names
        .iter()
        .skip(start)
        .take(end - start)
        .map(|day| day.trim().to_uppercase())
        .collect();

    Month {
        name: month_names.get(start).cloned().unwrap_or_default(),
        start_col: start,
        days,
    }
}
