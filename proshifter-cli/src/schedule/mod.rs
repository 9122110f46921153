//! Schedule interpretation: month segmentation, staff filtering, shift
//! tallying, and report layout.

pub mod codes;
pub mod count;
pub mod excel;
pub mod filter;
pub mod report;
pub mod segment;
pub mod types;

pub use codes::{CellCode, ShiftCodes, WEEKEND};
pub use count::count_shifts;
pub use filter::eligible_people;
pub use report::{MonthSpan, ReportCell, ReportGrid, assemble};
pub use segment::segment_months;
pub use types::*;
