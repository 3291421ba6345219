use serde::{Deserialize, Serialize};
use sheet_nest::io::svg::SvgDrawOptions;

/// Configuration of the command line driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct NestCliConfig {
    /// Nest with every sort strategy and keep the best result, instead of only the strategy of the instance
    #[serde(default)]
    pub explore_strategies: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
