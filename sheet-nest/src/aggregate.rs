use crate::entities::{NestingResult, Sheet};
use itertools::Itertools;

/// Area totals over a set of sheets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub used_area: f64,
    pub usable_area: f64,
}

impl Totals {
    pub fn of(sheets: &[Sheet]) -> Self {
        sheets.iter().fold(Totals::default(), |acc, s| Totals {
            used_area: acc.used_area + s.used_area,
            usable_area: acc.usable_area + s.usable_area,
        })
    }

    /// `used_area / usable_area`, 0 when no area is available
    pub fn efficiency(&self) -> f64 {
        match self.usable_area > 0.0 {
            true => self.used_area / self.usable_area,
            false => 0.0,
        }
    }

    /// Usable area that is not covered. The margin border is not counted as waste.
    pub fn wasted_area(&self) -> f64 {
        (self.usable_area - self.used_area).max(0.0)
    }
}

/// Folds the per-sheet statistics into a [`NestingResult`].
///
/// `unplaced` contains the source id of every piece that could not be placed, duplicates included.
pub fn aggregate(sheets: Vec<Sheet>, unplaced: Vec<String>) -> NestingResult {
    let totals = Totals::of(&sheets);
    let unplaced_piece_count = unplaced.len();
    NestingResult {
        sheets,
        total_efficiency: totals.efficiency(),
        total_wasted_area: totals.wasted_area(),
        unplaceable: unplaced.into_iter().unique().collect_vec(),
        unplaced_piece_count,
    }
}
