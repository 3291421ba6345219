use crate::NestError;
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Key by which pieces are ordered (descending) before they are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// `width * height`
    #[default]
    Area,
    Width,
    Height,
    /// `2 * (width + height)`
    Perimeter,
    /// Keep the input order
    None,
}

impl SortStrategy {
    /// All strategies, in the order in which [`explore_strategies`](crate::explore_strategies) reports them.
    pub const ALL: [SortStrategy; 5] = [
        SortStrategy::Area,
        SortStrategy::Width,
        SortStrategy::Height,
        SortStrategy::Perimeter,
        SortStrategy::None,
    ];

    /// The value a piece of `width` x `height` is sorted on, or `None` if the input order is kept.
    pub fn key(&self, width: f64, height: f64) -> Option<f64> {
        match self {
            SortStrategy::Area => Some(width * height),
            SortStrategy::Width => Some(width),
            SortStrategy::Height => Some(height),
            SortStrategy::Perimeter => Some(2.0 * (width + height)),
            SortStrategy::None => None,
        }
    }
}

impl Display for SortStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortStrategy::Area => "area",
            SortStrategy::Width => "width",
            SortStrategy::Height => "height",
            SortStrategy::Perimeter => "perimeter",
            SortStrategy::None => "none",
        };
        f.write_str(name)
    }
}

/// Dimensions of the material sheet and the rules pieces are nested by. All lengths in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    pub sheet_width: f64,
    pub sheet_height: f64,
    /// Border along every edge of the sheet in which nothing is placed
    #[serde(default)]
    pub margin: f64,
    /// Minimum distance between two pieces on the same sheet
    #[serde(default)]
    pub spacing: f64,
    /// Whether pieces may be turned by 90 degrees
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
    #[serde(default)]
    pub sort_strategy: SortStrategy,
}

fn default_allow_rotation() -> bool {
    true
}

impl SheetConfig {
    pub fn new(sheet_width: f64, sheet_height: f64) -> Self {
        Self {
            sheet_width,
            sheet_height,
            margin: 0.0,
            spacing: 0.0,
            allow_rotation: true,
            sort_strategy: SortStrategy::Area,
        }
    }

    pub fn with_margin(self, margin: f64) -> Self {
        Self { margin, ..self }
    }

    pub fn with_spacing(self, spacing: f64) -> Self {
        Self { spacing, ..self }
    }

    pub fn with_rotation(self, allow_rotation: bool) -> Self {
        Self {
            allow_rotation,
            ..self
        }
    }

    pub fn with_sort_strategy(self, sort_strategy: SortStrategy) -> Self {
        Self {
            sort_strategy,
            ..self
        }
    }

    pub fn usable_width(&self) -> f64 {
        self.sheet_width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f64 {
        self.sheet_height - 2.0 * self.margin
    }

    pub fn usable_area(&self) -> f64 {
        self.usable_width() * self.usable_height()
    }

    /// The usable area of a sheet, in coordinates relative to the inner margin corner.
    pub fn usable_rect(&self) -> Result<Rect, NestError> {
        self.validate()?;
        Rect::try_new(0.0, 0.0, self.usable_width(), self.usable_height()).ok_or_else(|| {
            NestError::InvalidConfig(format!(
                "usable area {} x {} is empty",
                self.usable_width(),
                self.usable_height()
            ))
        })
    }

    /// Checks whether a sheet with this configuration can hold anything at all.
    pub fn validate(&self) -> Result<(), NestError> {
        let values = [
            ("sheet_width", self.sheet_width),
            ("sheet_height", self.sheet_height),
            ("margin", self.margin),
            ("spacing", self.spacing),
        ];
        if let Some((name, v)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(NestError::InvalidConfig(format!("{name} is not finite: {v}")));
        }
        if self.margin < 0.0 {
            return Err(NestError::InvalidConfig(format!(
                "margin is negative: {}",
                self.margin
            )));
        }
        if self.spacing < 0.0 {
            return Err(NestError::InvalidConfig(format!(
                "spacing is negative: {}",
                self.spacing
            )));
        }
        if self.usable_width() <= 0.0 || self.usable_height() <= 0.0 {
            return Err(NestError::InvalidConfig(format!(
                "margin {} leaves no usable area on a {} x {} sheet",
                self.margin, self.sheet_width, self.sheet_height
            )));
        }
        Ok(())
    }
}
