//! Shift-schedule tally engine.
//!
//! Reads a hand-maintained staff schedule workbook (one row per staff
//! member, one column per calendar day, grouped into month blocks) and
//! produces per-person, per-month counts of shift-type codes worked,
//! including a derived weekend-shift count.

pub mod schedule;
