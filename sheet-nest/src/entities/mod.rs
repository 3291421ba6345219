mod part;
mod piece;
mod placement;
mod result;
mod sheet;

#[doc(inline)]
pub use part::PartShape;
#[doc(inline)]
pub use part::PartSpec;
#[doc(inline)]
pub use part::ShapeKind;
#[doc(inline)]
pub use piece::PlaceablePiece;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use result::NestingResult;
#[doc(inline)]
pub use sheet::Sheet;
