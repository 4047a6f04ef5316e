//! Grid geometry: star coordinates and the boxes that enclose them.
//!
//! # Structure
//!
//! - [`star`] - A single marker coordinate
//! - [`bounding_box`] - Axis-aligned box over star coordinates, area and overlap test
//! - [`error`] - Box construction errors

mod bounding_box;
mod error;
mod star;

pub use bounding_box::BoundingBox;
pub use error::BoxError;
pub use star::Star;
