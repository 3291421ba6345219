use crate::config::SortStrategy;
use crate::io::ext_repr::{ExtNestSolution, ExtSheet};
use crate::nest::PartsNesting;

/// Exports a nesting out of the library
pub fn export(nesting: &PartsNesting, sort_strategy: SortStrategy) -> ExtNestSolution {
    let result = &nesting.result;
    ExtNestSolution {
        sort_strategy,
        sheet_count: result.sheet_count(),
        total_efficiency: result.total_efficiency,
        total_wasted_area: result.total_wasted_area,
        placed_count: result.placed_count(),
        unplaced_piece_count: result.unplaced_piece_count,
        sheets: result
            .sheets
            .iter()
            .map(|s| ExtSheet {
                index: s.index,
                efficiency: s.efficiency(),
                used_area: s.used_area,
                usable_area: s.usable_area,
                wasted_area: s.wasted_area(),
                placements: s.placements.clone(),
            })
            .collect(),
        unplaceable: result.unplaceable.clone(),
        invalid: nesting.invalid.clone(),
    }
}
