use crate::entities::Sheet;
use serde::{Deserialize, Serialize};

/// Outcome of a nesting run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestingResult {
    /// Sheets in the order in which they were opened
    pub sheets: Vec<Sheet>,
    /// `Σ used_area / Σ usable_area` over all sheets, 0 if no sheet was opened
    pub total_efficiency: f64,
    /// `Σ (usable_area - used_area)` over all sheets
    pub total_wasted_area: f64,
    /// Ids of the parts of which at least one piece could not be placed on an empty sheet, in order of first failure
    pub unplaceable: Vec<String>,
    /// Number of pieces that were not placed
    pub unplaced_piece_count: usize,
}

impl NestingResult {
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.placements.len()).sum()
    }

    pub fn used_area(&self) -> f64 {
        self.sheets.iter().map(|s| s.used_area).sum()
    }

    /// Whether every piece found a place
    pub fn is_complete(&self) -> bool {
        self.unplaceable.is_empty()
    }
}
