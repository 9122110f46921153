//! Canonical shift codes and raw-cell normalization.

/// Synthetic code counting shifts worked on weekend days.
pub const WEEKEND: &str = "Weekend";

/// Result of classifying one raw schedule cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCode {
    /// The cell holds a recognized shift code.
    Shift(&'static str),
    /// Blank, free text, or a typo. Counts toward nothing.
    Unrecognized,
}

/// Ordered set of canonical shift codes.
///
/// The order is load-bearing: the report header repeats the codes
/// positionally per month block, so tally columns and this list must stay
/// in lockstep. Both the tally calculator and the report assembler take the
/// set as an explicit argument for that reason.
#[derive(Debug, Clone)]
pub struct ShiftCodes {
    codes: Vec<&'static str>,
}

impl Default for ShiftCodes {
    fn default() -> Self {
        Self {
            codes: vec![
                WEEKEND, "D", "D10", "D12", "S", "S10", "S12", "M", "M10", "M12", "FF", "EV",
                "FPC",
            ],
        }
    }
}

impl ShiftCodes {
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Normalize a raw cell and decide whether it names a shift.
    ///
    /// Matching is exact against the canonical forms. The normalized text is
    /// upper-cased, so a literal "Weekend" cell can never claim the
    /// synthetic counter.
    pub fn classify(&self, raw: &str) -> CellCode {
        let normalized = normalize(raw);
        match self.codes.iter().copied().find(|code| *code == normalized) {
            Some(code) => CellCode::Shift(code),
            None => CellCode::Unrecognized,
        }
    }
}

/// Shift-trade arrows sometimes annotate a cell; they mark that a trade
/// happened, not what was worked, so they are stripped before matching.
const SWAP_GLYPHS: [char; 2] = ['↓', '↑'];

/// Substring substitutions folding the split-coverage marker into the full
/// shift-type code. Applied in this order, after glyph stripping.
const CODE_MERGES: [(&str, &str); 3] = [("D2", "D12"), ("S2", "S12"), ("M2", "M12")];

fn normalize(raw: &str) -> String {
    let mut value = raw.trim().to_uppercase();
    value.retain(|c| !SWAP_GLYPHS.contains(&c));
    for (from, to) in CODE_MERGES {
        value = value.replace(from, to);
    }
    value
}
