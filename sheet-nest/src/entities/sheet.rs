use crate::entities::Placement;
use serde::{Deserialize, Serialize};

/// One opened sheet of material and everything nested on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Position of the sheet in the order in which sheets were opened
    pub index: usize,
    /// Placements in the order in which they were made
    pub placements: Vec<Placement>,
    /// Sum of the footprint areas of all placements
    pub used_area: f64,
    /// Area inside the margin border
    pub usable_area: f64,
}

impl Sheet {
    /// Fraction of the usable area covered by placements.
    pub fn efficiency(&self) -> f64 {
        match self.usable_area > 0.0 {
            true => self.used_area / self.usable_area,
            false => 0.0,
        }
    }

    /// Usable area not covered by placements. The margin border is not counted.
    pub fn wasted_area(&self) -> f64 {
        (self.usable_area - self.used_area).max(0.0)
    }
}
