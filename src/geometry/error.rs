//! Box construction errors

use super::Star;

/// Error type for bounding box construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoxError {
    /// Top-left corner lies below or right of the bottom-right corner
    #[error("invalid box bounds: top-left {top_left} is not above and left of bottom-right {bottom_right}")]
    InvalidBounds { top_left: Star, bottom_right: Star },
}
