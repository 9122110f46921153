use std::collections::HashMap;

use crate::schedule::codes::{ShiftCodes, WEEKEND};

/// Finished shift counts for one (person, month) pair.
///
/// Every canonical code is present once built, zero when never matched,
/// including the synthetic weekend counter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShiftTally {
    counts: HashMap<&'static str, u32>,
}

impl ShiftTally {
    pub(crate) fn from_counts(counts: HashMap<&'static str, u32>) -> Self {
        Self { counts }
    }

    pub fn count(&self, code: &str) -> u32 {
        self.counts.get(code).copied().unwrap_or(0)
    }

    /// Counts laid out in canonical-code order, for positional output.
    pub fn in_order<'a>(&'a self, codes: &'a ShiftCodes) -> impl Iterator<Item = u32> + 'a {
        codes.iter().map(|code| self.count(code))
    }

    /// Shifts actually worked, excluding the derived weekend counter.
    pub fn worked_total(&self) -> u32 {
        self.counts
            .iter()
            .filter(|(code, _)| **code != WEEKEND)
            .map(|(_, n)| *n)
            .sum()
    }
}
