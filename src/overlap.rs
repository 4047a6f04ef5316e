//! Overlap elimination.
//!
//! Boxes that overlap are dropped, never merged. Every box that overlaps the
//! current head is removed together with the head, and the scan restarts from
//! the front of the shortened collection.

use crate::geometry::BoundingBox;

/// Remove every box that overlaps another box.
///
/// Walks the collection as a queue: the head is compared against every box
/// after it. If any of them overlap the head, all of those and the head
/// itself are removed and scanning restarts at the first remaining box.
/// Otherwise the head stays and the next box becomes the head.
///
/// Relative order of surviving boxes is preserved.
pub fn remove_overlaps(mut boxes: Vec<BoundingBox>) -> Vec<BoundingBox> {
    let mut head = 0;

    while head + 1 < boxes.len() {
        let current = boxes[head];
        let overlapping: Vec<usize> = (head + 1..boxes.len())
            .filter(|&i| boxes[i].overlaps(&current))
            .collect();

        if overlapping.is_empty() {
            head += 1;
            continue;
        }

        log::trace!(
            "dropping {} and {} overlapping box(es)",
            current,
            overlapping.len()
        );

        let mut index = 0;
        boxes.retain(|_| {
            let keep = index != head && !overlapping.contains(&index);
            index += 1;
            keep
        });
        head = 0;
    }

    boxes
}
