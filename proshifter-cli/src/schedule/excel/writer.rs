//! Report rendering to a styled workbook.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};

use crate::schedule::report::{ReportCell, ReportGrid};

/// Name of the single output sheet.
const OUTPUT_SHEET: &str = "Shift Counts";

/// Render the assembled report to an xlsx file.
///
/// Month-name header cells are merged across their block's span; the
/// shift-type header row is bold.
pub fn write_report<P: AsRef<Path>>(report: &ReportGrid, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(OUTPUT_SHEET)?;

    let month_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White);
    let header_format = Format::new().set_bold();

    write_month_header(sheet, report, &month_format)?;

    for (row_idx, row) in report.rows.iter().enumerate().skip(1) {
        let format = (row_idx == 1).then_some(&header_format);
        for (col_idx, cell) in row.iter().enumerate() {
            write_cell(sheet, row_idx as u32, col_idx as u16, cell, format)?;
        }
    }

    sheet.autofit();

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Shift report written to {}", path.display());
    Ok(())
}

/// One merged, styled cell per month block.
fn write_month_header(sheet: &mut Worksheet, report: &ReportGrid, format: &Format) -> Result<()> {
    for span in &report.month_spans {
        let name = match report.rows.first().and_then(|row| row.get(span.start_col)) {
            Some(ReportCell::Text(name)) => name.as_str(),
            _ => "",
        };

        let first_col = span.start_col as u16;
        let last_col = (span.start_col + span.width - 1) as u16;
        if span.width > 1 {
            sheet.merge_range(0, first_col, 0, last_col, name, format)?;
        } else {
            sheet.write_string_with_format(0, first_col, name, format)?;
        }
    }
    Ok(())
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &ReportCell,
    format: Option<&Format>,
) -> Result<()> {
    match (cell, format) {
        (ReportCell::Empty, _) => {}
        (ReportCell::Text(s), Some(f)) => {
            sheet.write_string_with_format(row, col, s, f)?;
        }
        (ReportCell::Text(s), None) => {
            sheet.write_string(row, col, s)?;
        }
        (ReportCell::Number(n), Some(f)) => {
            sheet.write_number_with_format(row, col, *n as f64, f)?;
        }
        (ReportCell::Number(n), None) => {
            sheet.write_number(row, col, *n as f64)?;
        }
    }
    Ok(())
}
