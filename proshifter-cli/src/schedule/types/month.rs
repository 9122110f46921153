/// One calendar month's contiguous block of schedule columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month {
    /// Display name from the month-name header row.
    pub name: String,
    /// First grid column of the block.
    pub start_col: usize,
    /// Trimmed, upper-cased day-type label per column of the block.
    pub days: Vec<String>,
}

impl Month {
    /// Number of grid columns the block spans.
    pub fn span(&self) -> usize {
        self.days.len()
    }
}
