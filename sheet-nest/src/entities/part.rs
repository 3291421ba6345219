use serde::{Deserialize, Serialize};

/// Outline of a part as entered by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum PartShape {
    Rectangle { width: f64, height: f64 },
    /// Nested as its enclosing square
    Circle {
        #[serde(alias = "width")]
        diameter: f64,
        /// Only set when the circle was entered as `width` and `height`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
    },
}

impl PartShape {
    /// Width and height of the axis-aligned bounding box of the shape.
    pub fn bbox(&self) -> (f64, f64) {
        match *self {
            PartShape::Rectangle { width, height } => (width, height),
            PartShape::Circle { diameter, .. } => (diameter, diameter),
        }
    }

    /// False for a circle whose `height` differs from its diameter.
    pub fn is_consistent(&self) -> bool {
        match *self {
            PartShape::Rectangle { .. } => true,
            PartShape::Circle { diameter, height } => height.is_none_or(|h| h == diameter),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            PartShape::Rectangle { .. } => ShapeKind::Rectangle,
            PartShape::Circle { .. } => ShapeKind::Circle,
        }
    }
}

/// Shape of a part without its dimensions. Only used to draw placements, never to pack them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
}

/// A line of the order: a shape and how many times it has to be produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    /// Unique per user-added entry
    pub id: String,
    #[serde(flatten)]
    pub shape: PartShape,
    /// Signed, so that nonsensical input is reported instead of failing to parse
    pub quantity: i64,
}

impl PartSpec {
    pub fn rectangle(id: impl Into<String>, width: f64, height: f64, quantity: i64) -> Self {
        Self {
            id: id.into(),
            shape: PartShape::Rectangle { width, height },
            quantity,
        }
    }

    pub fn circle(id: impl Into<String>, diameter: f64, quantity: i64) -> Self {
        Self {
            id: id.into(),
            shape: PartShape::Circle {
                diameter,
                height: None,
            },
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_bbox_is_square_of_diameter() {
        let circle = PartShape::Circle {
            diameter: 120.0,
            height: None,
        };
        assert_eq!(circle.bbox(), (120.0, 120.0));
        assert_eq!(
            PartShape::Rectangle {
                width: 30.0,
                height: 40.0
            }
            .bbox(),
            (30.0, 40.0)
        );
    }

    #[test]
    fn part_spec_json_is_tagged_by_shape() {
        let json = r#"[
            {"id": "a", "shape": "rectangle", "width": 400, "height": 200, "quantity": 2},
            {"id": "b", "shape": "circle", "diameter": 150, "quantity": 1},
            {"id": "c", "shape": "circle", "width": 90, "quantity": -1}
        ]"#;
        let parts: Vec<PartSpec> = serde_json::from_str(json).unwrap();
        assert_eq!(parts[0], PartSpec::rectangle("a", 400.0, 200.0, 2));
        assert_eq!(parts[1], PartSpec::circle("b", 150.0, 1));
        assert_eq!(parts[2], PartSpec::circle("c", 90.0, -1));
    }

    #[test]
    fn circle_given_as_width_and_height() {
        let json = r#"[
            {"id": "round", "shape": "circle", "width": 90, "height": 90, "quantity": 1},
            {"id": "oval", "shape": "circle", "width": 90, "height": 60, "quantity": 1}
        ]"#;
        let parts: Vec<PartSpec> = serde_json::from_str(json).unwrap();
        assert!(parts[0].shape.is_consistent());
        assert_eq!(parts[0].shape.bbox(), (90.0, 90.0));
        assert!(!parts[1].shape.is_consistent());
        assert!(PartSpec::circle("c", 50.0, 1).shape.is_consistent());

        let json = serde_json::to_string(&PartSpec::circle("c", 50.0, 1)).unwrap();
        assert!(!json.contains("height"));
    }
}
