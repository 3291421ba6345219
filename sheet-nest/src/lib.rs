#![doc = document_features::document_features!()]
//! Nesting engine for sheet material orders.
//!
//! Parts (rectangles and circles) are expanded into one piece per physical unit by the
//! [`normalize`] step, after which [`nest()`] assigns them to as few sheets as it can using a
//! guillotine best-fit heuristic. The returned [`NestingResult`] carries exact coordinates for every
//! placement together with the utilization figures the pricing layer needs.
//!
//! Circles are nested as their bounding square, true circular nesting is not supported.

/// Summation of per-sheet statistics into result totals
pub mod aggregate;

/// Sheet and ordering configuration
pub mod config;

/// Entities describing parts, pieces, placements and nested sheets
pub mod entities;

/// Axis-aligned rectangle primitive used throughout the engine
pub mod geometry;

/// Importing part lists into and exporting results out of this library
pub mod io;

/// The nesting engine
pub mod nest;

/// Expansion of part specifications into placeable pieces
pub mod normalize;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use config::{SheetConfig, SortStrategy};
#[doc(inline)]
pub use entities::{NestingResult, PartShape, PartSpec, PlaceablePiece, Placement, Sheet};
#[doc(inline)]
pub use error::NestError;
#[doc(inline)]
pub use nest::{PartsNesting, explore_strategies, nest, nest_best, nest_parts};
