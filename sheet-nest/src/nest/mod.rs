mod explore;
mod order;
mod sheet_bin;

pub use explore::{explore_strategies, nest_best};
pub use order::placement_order;
pub use sheet_bin::{Candidate, RegionKey, SheetBin, guillotine_split};

use crate::aggregate::aggregate;
use crate::config::SheetConfig;
use crate::entities::{NestingResult, PartSpec, PlaceablePiece};
use crate::normalize::{self, InvalidPart};
use crate::util::assertions;
use crate::NestError;
use itertools::Itertools;
use log::{debug, warn};

/// Nests `pieces` onto as few sheets as the guillotine best-fit heuristic manages.
///
/// Pieces are placed one at a time, in the order of [`SheetConfig::sort_strategy`]. Each piece goes to the
/// free region, over all open sheets and allowed orientations, that it fills most tightly. A new sheet
/// is only opened when no open sheet can take the piece; pieces that do not fit on an empty sheet, or
/// whose width or height is not a positive finite number, are reported in [`NestingResult::unplaceable`]
/// and never cause a sheet to be opened.
///
/// The result only depends on the arguments: identical input always yields identical output.
///
/// # Errors
/// [`NestError::InvalidConfig`] if the sheet configuration leaves no usable area.
pub fn nest(pieces: &[PlaceablePiece], config: &SheetConfig) -> Result<NestingResult, NestError> {
    let usable = config.usable_rect()?;

    let mut bins: Vec<SheetBin> = vec![];
    let mut unplaced: Vec<String> = vec![];

    for i in placement_order(pieces, config.sort_strategy) {
        let piece = &pieces[i];
        if !piece.has_valid_dimensions() {
            warn!(
                "[NEST] piece of {:?} has invalid dimensions {} x {}",
                piece.source_id, piece.width, piece.height
            );
            unplaced.push(piece.source_id.clone());
            continue;
        }
        let best = bins
            .iter()
            .filter_map(|bin| bin.best_candidate(piece, config))
            .min_by(Candidate::cmp_fit);

        match best {
            Some(candidate) => bins[candidate.sheet_index].place(piece, candidate, config),
            None => {
                let mut bin = SheetBin::new(bins.len(), usable);
                match bin.best_candidate(piece, config) {
                    Some(candidate) => {
                        debug!("[NEST] opening sheet {}", bin.index);
                        bin.place(piece, candidate, config);
                        bins.push(bin);
                    }
                    None => {
                        warn!(
                            "[NEST] piece of {:?} ({} x {}) does not fit on an empty sheet",
                            piece.source_id, piece.width, piece.height
                        );
                        unplaced.push(piece.source_id.clone());
                    }
                }
            }
        }
    }

    let sheets = bins
        .into_iter()
        .map(|bin| bin.into_sheet(config))
        .collect_vec();
    let result = aggregate(sheets, unplaced);

    debug_assert!(assertions::result_is_valid(&result, config));

    Ok(result)
}

/// Nesting outcome for a list of parts: the rejected parts next to the result for the valid ones.
#[derive(Debug, Clone, PartialEq)]
pub struct PartsNesting {
    pub invalid: Vec<InvalidPart>,
    pub result: NestingResult,
}

/// Expands `parts` with [`normalize::expand`] and nests the resulting pieces.
pub fn nest_parts(parts: &[PartSpec], config: &SheetConfig) -> Result<PartsNesting, NestError> {
    let normalized = normalize::expand(parts);
    let result = nest(&normalized.pieces, config)?;
    Ok(PartsNesting {
        invalid: normalized.invalid,
        result,
    })
}
