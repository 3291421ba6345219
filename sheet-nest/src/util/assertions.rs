//Various checks to verify the correctness of nesting results
//Used in debug_assert!() blocks and tests

use crate::aggregate::Totals;
use crate::config::SheetConfig;
use crate::entities::{NestingResult, Sheet};
use crate::geometry::Rect;
use crate::util::FPA;
use itertools::Itertools;
use log::error;

/// Checks every invariant of a [`NestingResult`] produced with `config`.
pub fn result_is_valid(result: &NestingResult, config: &SheetConfig) -> bool {
    result.sheets.iter().enumerate().all(|(i, sheet)| {
        sheet.index == i
            && !sheet.placements.is_empty()
            && placements_within_margin(sheet, config)
            && placements_disjoint(sheet)
            && placements_spaced(sheet, config.spacing)
            && areas_consistent(sheet, config)
    }) && totals_consistent(result)
}

/// Every placement lies within `[margin, width - margin] x [margin, height - margin]`.
pub fn placements_within_margin(sheet: &Sheet, config: &SheetConfig) -> bool {
    let inner = Rect {
        x_min: config.margin,
        y_min: config.margin,
        x_max: config.sheet_width - config.margin,
        y_max: config.sheet_height - config.margin,
    };
    sheet.placements.iter().all(|p| {
        let inside = inner.almost_contains(&p.rect());
        if !inside {
            error!(
                "placement of {:?} at {:?} exceeds usable area {:?} on sheet {}",
                p.piece_source_id,
                p.rect(),
                inner,
                sheet.index
            );
        }
        inside
    })
}

/// No two placements on the sheet overlap.
pub fn placements_disjoint(sheet: &Sheet) -> bool {
    sheet
        .placements
        .iter()
        .tuple_combinations()
        .all(|(a, b)| {
            let overlap = a.rect().overlaps(&b.rect());
            if overlap {
                error!(
                    "placements {:?} and {:?} overlap on sheet {}",
                    a.rect(),
                    b.rect(),
                    sheet.index
                );
            }
            !overlap
        })
}

/// Every two placements on the sheet are at least `spacing` apart along at least one axis.
pub fn placements_spaced(sheet: &Sheet, spacing: f64) -> bool {
    sheet
        .placements
        .iter()
        .tuple_combinations()
        .all(|(a, b)| {
            let (dx, dy) = a.rect().gap_to(&b.rect());
            let spaced = FPA(dx) >= FPA(spacing) || FPA(dy) >= FPA(spacing);
            if !spaced {
                error!(
                    "placements {:?} and {:?} are closer than {spacing} on sheet {}",
                    a.rect(),
                    b.rect(),
                    sheet.index
                );
            }
            spaced
        })
}

/// The area bookkeeping of the sheet matches its placements and the configuration.
pub fn areas_consistent(sheet: &Sheet, config: &SheetConfig) -> bool {
    let used: f64 = sheet.placements.iter().map(|p| p.area()).sum();
    float_cmp::approx_eq!(f64, used, sheet.used_area, ulps = 8)
        && float_cmp::approx_eq!(f64, config.usable_area(), sheet.usable_area, ulps = 8)
        && FPA(sheet.used_area) <= FPA(sheet.usable_area)
}

/// The totals of the result match the sum over its sheets and the efficiency lies within [0, 1].
pub fn totals_consistent(result: &NestingResult) -> bool {
    let totals = Totals::of(&result.sheets);
    float_cmp::approx_eq!(f64, totals.efficiency(), result.total_efficiency, ulps = 8)
        && float_cmp::approx_eq!(f64, totals.wasted_area(), result.total_wasted_area, ulps = 8)
        && result.total_efficiency >= 0.0
        && FPA(result.total_efficiency) <= FPA(1.0)
        && result.total_wasted_area >= 0.0
        && result.unplaceable.iter().all_unique()
        && result.unplaceable.len() <= result.unplaced_piece_count
}
