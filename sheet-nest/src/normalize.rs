use crate::entities::{PartSpec, PlaceablePiece};
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Why a [`PartSpec`] was excluded from nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// Quantity of zero or less
    NonPositiveQuantity,
    /// A width, height or diameter that is zero, negative or not finite, or a circle
    /// whose width and height differ
    InvalidDimension,
}

impl Display for InvalidReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::NonPositiveQuantity => f.write_str("quantity must be at least 1"),
            InvalidReason::InvalidDimension => f.write_str("dimensions must be positive"),
        }
    }
}

/// A part that was excluded from nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidPart {
    pub id: String,
    pub reason: InvalidReason,
}

/// Output of [`expand`]: the pieces to nest and the parts that were rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    /// One piece per physical unit, grouped per part in input order
    pub pieces: Vec<PlaceablePiece>,
    /// Rejected parts in input order
    pub invalid: Vec<InvalidPart>,
}

impl Normalized {
    pub fn invalid_ids(&self) -> Vec<&str> {
        self.invalid.iter().map(|ip| ip.id.as_str()).collect()
    }
}

/// Expands every valid part into `quantity` pieces carrying the bounding box of its shape.
/// Parts with a non-positive quantity or dimension are recorded in [`Normalized::invalid`] instead.
pub fn expand(parts: &[PartSpec]) -> Normalized {
    let mut normalized = Normalized::default();

    for id in parts.iter().map(|p| p.id.as_str()).duplicates() {
        warn!("[NORM] part id {id:?} is used by more than one part");
    }

    for part in parts {
        match validate(part) {
            Err(reason) => {
                warn!("[NORM] excluding part {:?}: {reason}", part.id);
                normalized.invalid.push(InvalidPart {
                    id: part.id.clone(),
                    reason,
                });
            }
            Ok(quantity) => {
                let (width, height) = part.shape.bbox();
                let kind = part.shape.kind();
                normalized
                    .pieces
                    .extend((0..quantity).map(|_| PlaceablePiece {
                        source_id: part.id.clone(),
                        width,
                        height,
                        kind,
                    }));
            }
        }
    }
    normalized
}

fn validate(part: &PartSpec) -> Result<u64, InvalidReason> {
    let (width, height) = part.shape.bbox();
    let valid_dim = |d: f64| d.is_finite() && d > 0.0;
    if !valid_dim(width) || !valid_dim(height) || !part.shape.is_consistent() {
        return Err(InvalidReason::InvalidDimension);
    }
    u64::try_from(part.quantity)
        .ok()
        .filter(|q| *q > 0)
        .ok_or(InvalidReason::NonPositiveQuantity)
}
