mod export;

/// External (serializable) representations of nesting instances and solutions.
pub mod ext_repr;

/// Rendering nested sheets as SVG documents
#[cfg(feature = "svg")]
pub mod svg;

#[doc(inline)]
pub use export::export;
