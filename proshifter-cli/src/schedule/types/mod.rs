//! Core types for schedule interpretation

mod grid;
mod month;
mod person;
mod tally;

pub use grid::*;
pub use month::*;
pub use person::*;
pub use tally::*;
