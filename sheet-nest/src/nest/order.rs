use crate::config::SortStrategy;
use crate::entities::PlaceablePiece;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Indices of `pieces` in the order in which they are placed: descending by the key of `strategy`.
/// The sort is stable, pieces with equal keys keep their input order.
pub fn placement_order(pieces: &[PlaceablePiece], strategy: SortStrategy) -> Vec<usize> {
    match strategy {
        SortStrategy::None => (0..pieces.len()).collect_vec(),
        _ => (0..pieces.len())
            .sorted_by_cached_key(|&i| {
                let p = &pieces[i];
                Reverse(OrderedFloat(strategy.key(p.width, p.height).unwrap_or(0.0)))
            })
            .collect_vec(),
    }
}
