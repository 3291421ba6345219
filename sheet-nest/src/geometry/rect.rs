use crate::util::FPA;
use serde::{Deserialize, Serialize};

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Creates a rectangle from its two extreme corners.
    /// Returns `None` if the rectangle would have no area.
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Option<Self> {
        match x_min < x_max && y_min < y_max {
            true => Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            }),
            false => None,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Whether a `width` x `height` rectangle placed at the origin of `self` stays inside it.
    /// Compared exactly, a footprint may not overhang the region by any amount.
    pub fn can_contain(&self, width: f64, height: f64) -> bool {
        self.x_min + width <= self.x_max && self.y_min + height <= self.y_max
    }

    /// Whether `other` lies entirely within `self`, touching edges included.
    pub fn almost_contains(&self, other: &Rect) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
    }

    /// Whether the interiors of `self` and `other` overlap.
    /// Rectangles that only share (part of) an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        FPA(f64::max(self.x_min, other.x_min)) < FPA(f64::min(self.x_max, other.x_max))
            && FPA(f64::max(self.y_min, other.y_min)) < FPA(f64::min(self.y_max, other.y_max))
    }

    /// Returns the free distance between `self` and `other` along the x- and y-axis.
    /// A value of 0 on an axis means the projections of both rectangles on that axis touch or overlap.
    pub fn gap_to(&self, other: &Rect) -> (f64, f64) {
        let dx = f64::max(other.x_min - self.x_max, self.x_min - other.x_max);
        let dy = f64::max(other.y_min - self.y_max, self.y_min - other.y_max);
        (dx.max(0.0), dy.max(0.0))
    }
}
