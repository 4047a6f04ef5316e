//! Largest-box selection.

use crate::geometry::BoundingBox;

/// Return every box tied for the largest area.
///
/// Empty and single-element collections are returned as-is. Tied boxes keep
/// their relative order from the input.
pub fn find_largest_boxes(mut boxes: Vec<BoundingBox>) -> Vec<BoundingBox> {
    // Stable sort, so ties stay in discovery order.
    boxes.sort_by_key(|b| std::cmp::Reverse(b.area()));

    if boxes.len() <= 1 {
        return boxes;
    }

    let max_area = boxes[0].area();
    boxes.retain(|b| b.area() == max_area);
    boxes
}
