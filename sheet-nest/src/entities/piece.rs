use crate::entities::ShapeKind;
use serde::{Deserialize, Serialize};

/// One physical unit of a [`PartSpec`](crate::PartSpec), reduced to its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceablePiece {
    /// Id of the part this piece was expanded from
    pub source_id: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub kind: ShapeKind,
}

impl PlaceablePiece {
    pub fn new(source_id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            source_id: source_id.into(),
            width,
            height,
            kind: ShapeKind::Rectangle,
        }
    }

    /// Whether both width and height are positive and finite.
    pub fn has_valid_dimensions(&self) -> bool {
        [self.width, self.height]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Width and height of the piece, swapped if `rotated`.
    pub fn oriented(&self, rotated: bool) -> (f64, f64) {
        match rotated {
            false => (self.width, self.height),
            true => (self.height, self.width),
        }
    }
}
