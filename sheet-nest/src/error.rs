use thiserror::Error;

/// Errors that abort a nesting run.
///
/// Invalid or oversized parts are not errors, they are reported inside the result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NestError {
    /// The sheet configuration leaves no room to place anything.
    #[error("invalid sheet configuration: {0}")]
    InvalidConfig(String),
}
