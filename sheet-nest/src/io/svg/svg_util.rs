use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgSheetTheme,
    ///Draw the border of the usable area inside the margin
    #[serde(default = "enabled")]
    pub margin: bool,
    ///Draw the spacing that is kept around every placement
    #[serde(default)]
    pub spacing: bool,
    ///Draw the bounding box around circular parts
    #[serde(default)]
    pub bounding_boxes: bool,
    ///Print the part id in the center of every placement
    #[serde(default = "enabled")]
    pub labels: bool,
}

fn enabled() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgSheetTheme::default(),
            margin: true,
            spacing: false,
            bounding_boxes: false,
            labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgSheetTheme {
    pub stroke_width_multiplier: f64,
    pub sheet_fill: Color,
    pub piece_fill: Color,
    pub rotated_piece_fill: Color,
    pub guide_stroke: Color,
}

impl Default for SvgSheetTheme {
    fn default() -> Self {
        SvgSheetTheme::EARTH_TONES
    }
}

impl SvgSheetTheme {
    pub const EARTH_TONES: SvgSheetTheme = SvgSheetTheme {
        stroke_width_multiplier: 2.0,
        sheet_fill: Color(0xCC, 0x82, 0x4A),
        piece_fill: Color(0xFF, 0xC8, 0x79),
        rotated_piece_fill: Color(0xF5, 0xB0, 0x5C),
        guide_stroke: Color(0x2D, 0x2D, 0x2D),
    };
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid color: {s:?}, expected #RRGGBB"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("invalid color {s:?}: {e}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}
