//! Per-(person, month) shift tallying.

use std::collections::HashMap;

use super::codes::{CellCode, ShiftCodes, WEEKEND};
use super::types::{Grid, Month, Person, ShiftTally};

/// Day-type label marking weekend columns.
const WEEKEND_DAY: &str = "S";

/// Tally one person's shifts for one month block.
///
/// A pure fold over the block's column range: no half-built counter state
/// escapes this function. A row shorter than the block means no more
/// recorded data, so the fold stops there; cells that don't normalize to a
/// known code count toward nothing. Recognized codes worked on a weekend
/// day also bump the synthetic weekend counter.
pub fn count_shifts(grid: &Grid, person: &Person, month: &Month, codes: &ShiftCodes) -> ShiftTally {
    let zeroed: HashMap<&'static str, u32> = codes.iter().map(|code| (code, 0)).collect();
    let row_len = grid.row(person.row).map(|r| r.len()).unwrap_or(0);

    let counts = (month.start_col..month.start_col + month.span())
        .take_while(|col| *col < row_len)
        .fold(zeroed, |mut counts, col| {
            if let CellCode::Shift(code) = codes.classify(grid.cell(person.row, col)) {
                *counts.entry(code).or_insert(0) += 1;
                if month.days[col - month.start_col] == WEEKEND_DAY {
                    *counts.entry(WEEKEND).or_insert(0) += 1;
                }
            }
            counts
        });

    ShiftTally::from_counts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn month(start_col: usize, days: &[&str]) -> Month {
        Month {
            name: "Jan".to_string(),
            start_col,
            days: days.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn person(row: usize) -> Person {
        Person {
            name: "Alice".to_string(),
            row,
        }
    }

    #[test]
    fn tallies_codes_with_weekend_detection() {
        let grid = Grid::new(vec![
            row(&["Jan", "", ""]),
            row(&["M", "T", "S"]),
            row(&["1", "2", "3"]),
            row(&["D", "s2", "↓D"]),
        ]);
        let codes = ShiftCodes::default();
        let tally = count_shifts(&grid, &person(3), &month(0, &["M", "T", "S"]), &codes);

        assert_eq!(tally.count("D"), 2);
        assert_eq!(tally.count("S12"), 1);
        assert_eq!(tally.count(WEEKEND), 1);
        for code in codes.iter() {
            if code == "D" || code == "S12" || code == WEEKEND {
                continue;
            }
            assert_eq!(tally.count(code), 0, "{code}");
        }
    }

    #[test]
    fn weekend_requires_a_recognized_code() {
        let grid = Grid::new(vec![
            row(&[]),
            row(&[]),
            row(&[]),
            row(&["OFF", "holiday", ""]),
        ]);
        let codes = ShiftCodes::default();
        let tally = count_shifts(&grid, &person(3), &month(0, &["S", "S", "S"]), &codes);

        assert_eq!(tally.count(WEEKEND), 0);
        assert_eq!(tally.worked_total(), 0);
    }

    #[test]
    fn short_row_stops_the_tally() {
        let grid = Grid::new(vec![row(&[]), row(&[]), row(&[]), row(&["D", "D"])]);
        let codes = ShiftCodes::default();
        // Month spans 5 columns but the row holds only 2 cells.
        let tally = count_shifts(&grid, &person(3), &month(0, &["M", "T", "W", "T", "F"]), &codes);

        assert_eq!(tally.count("D"), 2);
        assert_eq!(tally.worked_total(), 2);
    }

    #[test]
    fn totals_never_exceed_cells_present_in_the_span() {
        let grid = Grid::new(vec![
            row(&[]),
            row(&[]),
            row(&[]),
            row(&["D", "OFF", "M10", "", "EV", "D12"]),
        ]);
        let codes = ShiftCodes::default();
        let m = month(1, &["M", "T", "S", "W"]);
        let tally = count_shifts(&grid, &person(3), &m, &codes);

        // Span columns 1..=4 hold "OFF", "M10", "", "EV".
        assert!(tally.worked_total() <= m.span() as u32);
        assert_eq!(tally.count("M10"), 1);
        assert_eq!(tally.count("EV"), 1);
        assert_eq!(tally.count("D"), 0);
        assert_eq!(tally.count("D12"), 0);
    }

    #[test]
    fn weekend_count_is_bounded_by_recognized_weekend_cells() {
        let grid = Grid::new(vec![
            row(&[]),
            row(&[]),
            row(&[]),
            row(&["D", "D", "D"]),
        ]);
        let codes = ShiftCodes::default();
        let tally = count_shifts(&grid, &person(3), &month(0, &["S", "M", "S"]), &codes);

        assert_eq!(tally.count("D"), 3);
        assert_eq!(tally.count(WEEKEND), 2);
        assert!(tally.count(WEEKEND) <= tally.worked_total());
    }

    #[test]
    fn missing_person_row_tallies_nothing() {
        let grid = Grid::new(vec![row(&[]), row(&[]), row(&[])]);
        let codes = ShiftCodes::default();
        let tally = count_shifts(&grid, &person(9), &month(0, &["M"]), &codes);

        assert_eq!(tally.worked_total(), 0);
    }
}
