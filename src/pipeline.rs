//! End-to-end box finding.
//!
//! Runs the stages in order, each taking the previous stage's output by value:
//!
//! 1. **Marker set** - grid lines to star coordinates
//! 2. **Extraction** - one bounding box per connected component
//! 3. **Overlap elimination** - drop every box that overlaps another
//! 4. **Selection** - keep the boxes tied for the largest area

use crate::extract::find_bounding_boxes;
use crate::geometry::BoundingBox;
use crate::largest::find_largest_boxes;
use crate::markers::{MarkerSet, DEFAULT_MARKER};
use crate::overlap::remove_overlaps;

/// Result of a pipeline run with per-stage counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Largest surviving boxes, in output order
    pub boxes: Vec<BoundingBox>,
    /// Stars read from input
    pub stars: usize,
    /// Connected components found
    pub components: usize,
    /// Boxes left after overlap elimination
    pub survivors: usize,
}

/// Box-finding pipeline configured with a marker glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline {
    marker: char,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl Pipeline {
    pub fn new(marker: char) -> Self {
        Self { marker }
    }

    /// Run every stage over the given grid lines.
    pub fn run<I, S>(&self, lines: I) -> Report
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers = MarkerSet::from_lines(lines, self.marker);
        let stars = markers.len();
        log::debug!("read {} star(s) using marker {:?}", stars, self.marker);

        let boxes = find_bounding_boxes(markers);
        let components = boxes.len();
        log::debug!("found {} component(s)", components);

        let boxes = remove_overlaps(boxes);
        let survivors = boxes.len();
        log::debug!(
            "{} box(es) survived overlap elimination, {} dropped",
            survivors,
            components - survivors
        );

        let boxes = find_largest_boxes(boxes);
        log::debug!("selected {} largest box(es)", boxes.len());

        Report {
            boxes,
            stars,
            components,
            survivors,
        }
    }
}

/// Find the largest non-overlapping boxes in a grid.
pub fn find_boxes<I, S>(lines: I, marker: char) -> Vec<BoundingBox>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Pipeline::new(marker).run(lines).boxes
}
