//! Excel I/O for the schedule grid and the tally report

pub mod reader;
pub mod writer;

pub use reader::read_schedule;
pub use writer::write_report;
