use crate::NestError;
use crate::config::{SheetConfig, SortStrategy};
use crate::entities::{NestingResult, PlaceablePiece};
use crate::nest::nest;
use log::debug;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Nests `pieces` once for every [`SortStrategy`], in parallel.
///
/// The `sort_strategy` of `config` is ignored, the results are returned in the order of [`SortStrategy::ALL`].
pub fn explore_strategies(
    pieces: &[PlaceablePiece],
    config: &SheetConfig,
) -> Result<Vec<(SortStrategy, NestingResult)>, NestError> {
    config.validate()?;
    SortStrategy::ALL
        .par_iter()
        .map(|&strategy| {
            let config = config.with_sort_strategy(strategy);
            let result = nest(pieces, &config)?;
            debug!(
                "[EXPL] {strategy}: {} sheets, efficiency {:.3}, {} unplaced",
                result.sheet_count(),
                result.total_efficiency,
                result.unplaced_piece_count
            );
            Ok((strategy, result))
        })
        .collect()
}

/// Runs [`explore_strategies`] and keeps the best result: fewest unplaced pieces, then fewest sheets,
/// then the highest total efficiency. Remaining ties go to the strategy listed first in [`SortStrategy::ALL`].
pub fn nest_best(
    pieces: &[PlaceablePiece],
    config: &SheetConfig,
) -> Result<(SortStrategy, NestingResult), NestError> {
    explore_strategies(pieces, config)?
        .into_iter()
        .min_by_key(|(_, r)| {
            (
                r.unplaced_piece_count,
                r.sheet_count(),
                Reverse(OrderedFloat(r.total_efficiency)),
            )
        })
        .ok_or_else(|| NestError::InvalidConfig("no sort strategies to explore".to_string()))
}
