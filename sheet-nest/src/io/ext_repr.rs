use crate::config::{SheetConfig, SortStrategy};
use crate::entities::{PartSpec, Placement};
use crate::normalize::InvalidPart;
use serde::{Deserialize, Serialize};

/// A part list to be nested on a single sheet type
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtNestInstance {
    /// The name of the instance
    pub name: String,
    /// Sheet material and nesting rules
    pub sheet: SheetConfig,
    /// Parts to be produced
    pub parts: Vec<PartSpec>,
}

/// Nesting solution of an [`ExtNestInstance`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtNestSolution {
    /// Order in which pieces were placed
    pub sort_strategy: SortStrategy,
    /// Number of sheets that have to be cut
    pub sheet_count: usize,
    /// Sum of the area of the placed pieces divided by the sum of the usable sheet area
    pub total_efficiency: f64,
    /// Usable sheet area not covered by pieces, the margin border excluded
    pub total_wasted_area: f64,
    pub placed_count: usize,
    pub unplaced_piece_count: usize,
    /// Sheets which compose the solution
    pub sheets: Vec<ExtSheet>,
    /// Ids of parts of which pieces do not fit on an empty sheet
    pub unplaceable: Vec<String>,
    /// Parts that were excluded before nesting
    pub invalid: Vec<InvalidPart>,
}

/// One nested sheet
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheet {
    pub index: usize,
    pub efficiency: f64,
    pub used_area: f64,
    pub usable_area: f64,
    pub wasted_area: f64,
    pub placements: Vec<Placement>,
}
