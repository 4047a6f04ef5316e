//! Connected-component extraction.
//!
//! Partitions a [`MarkerSet`] into groups of orthogonally adjacent stars and
//! produces one [`BoundingBox`] per group. Traversal uses an explicit stack,
//! so large regions do not grow the call depth.

use crate::geometry::{BoundingBox, Star};
use crate::markers::MarkerSet;

/// Find the bounding box of every connected component.
///
/// The marker set is consumed; each star is removed exactly once. Boxes are
/// returned in discovery order, which is the row-major order of each
/// component's first star.
pub fn find_bounding_boxes(mut markers: MarkerSet) -> Vec<BoundingBox> {
    let mut boxes = Vec::new();
    let mut stack = Vec::new();

    while let Some(seed) = markers.pop_first() {
        let bbox = trace_component(seed, &mut markers, &mut stack);
        log::trace!("component at {} -> {}", seed, bbox);
        boxes.push(bbox);
    }

    boxes
}

/// Visit every star reachable from `seed`, removing each from `markers` and
/// widening the box around it. `seed` must already be removed.
fn trace_component(seed: Star, markers: &mut MarkerSet, stack: &mut Vec<Star>) -> BoundingBox {
    let mut bbox = BoundingBox::from_star(seed);
    stack.clear();
    stack.push(seed);

    while let Some(star) = stack.pop() {
        bbox.expand_to_include(star);
        for neighbor in star.neighbors() {
            // Absent covers background, already visited and off-grid.
            if markers.remove(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    bbox
}
