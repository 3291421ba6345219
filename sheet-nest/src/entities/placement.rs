use crate::entities::ShapeKind;
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Final position of a piece on a sheet.
///
/// Coordinates are in the sheet's coordinate system, the usable area starts at `(margin, margin)`.
/// `width` and `height` are those of the footprint after rotation, spacing is not included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub piece_source_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Whether the piece was turned by 90 degrees
    pub rotated: bool,
    pub kind: ShapeKind,
}

impl Placement {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The footprint of the placement as a rectangle
    pub fn rect(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.height,
        }
    }
}
