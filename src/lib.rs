//! star-boxes library crate.
//!
//! Finds clusters of orthogonally adjacent marker characters in a text grid,
//! boxes each cluster, drops every box that overlaps another, and keeps the
//! boxes tied for the largest area.
//!
//! ```
//! use star_boxes::pipeline::find_boxes;
//!
//! let boxes = find_boxes(["**-", "**-", "--*"], '*');
//! assert_eq!(boxes.len(), 1);
//! assert_eq!(boxes[0].to_string(), "(1,1)(2,2)");
//! ```

pub mod cli;
pub mod config;
pub mod extract;
pub mod geometry;
pub mod input;
pub mod largest;
pub mod logging;
pub mod markers;
pub mod output;
pub mod overlap;
pub mod pipeline;

pub use geometry::{BoundingBox, BoxError, Star};
pub use pipeline::{find_boxes, Pipeline, Report};
