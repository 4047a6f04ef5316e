//! Axis-aligned bounding boxes over star coordinates.

use super::{BoxError, Star};
use std::fmt;

/// Smallest axis-aligned rectangle enclosing a group of stars.
///
/// Bounds are inclusive on both axes. `top_left` is never below or right of
/// `bottom_right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    top_left: Star,
    bottom_right: Star,
}

impl BoundingBox {
    /// Create a box from explicit corners.
    ///
    /// # Errors
    /// Returns [`BoxError::InvalidBounds`] if `top_left` lies below or to the
    /// right of `bottom_right` on either axis.
    pub fn new(top_left: Star, bottom_right: Star) -> Result<Self, BoxError> {
        if top_left.line > bottom_right.line || top_left.col > bottom_right.col {
            return Err(BoxError::InvalidBounds {
                top_left,
                bottom_right,
            });
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A 1×1 box covering a single star.
    pub fn from_star(star: Star) -> Self {
        Self {
            top_left: star,
            bottom_right: star,
        }
    }

    pub fn top_left(&self) -> Star {
        self.top_left
    }

    pub fn bottom_right(&self) -> Star {
        self.bottom_right
    }

    /// Number of grid cells covered by the box.
    pub fn area(&self) -> i64 {
        (1 + self.bottom_right.col - self.top_left.col)
            * (1 + self.bottom_right.line - self.top_left.line)
    }

    /// Whether the star lies inside the box (bounds inclusive).
    pub fn contains(&self, star: Star) -> bool {
        (self.top_left.line..=self.bottom_right.line).contains(&star.line)
            && (self.top_left.col..=self.bottom_right.col).contains(&star.col)
    }

    /// Widen the box to the smallest box containing both the current bounds
    /// and `star`. A star already inside leaves the box unchanged.
    ///
    /// Only the component extractor widens boxes; once a box is in the box
    /// collection it is never modified.
    pub(crate) fn expand_to_include(&mut self, star: Star) {
        self.top_left = Star::new(
            self.top_left.line.min(star.line),
            self.top_left.col.min(star.col),
        );
        self.bottom_right = Star::new(
            self.bottom_right.line.max(star.line),
            self.bottom_right.col.max(star.col),
        );
    }

    /// Whether two boxes share area.
    ///
    /// Both the line ranges and the column ranges must overlap. Boxes whose
    /// ranges only touch on a single shared value are not overlapping unless
    /// one range strictly contains the other.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        ranges_overlap(
            (self.top_left.line, self.bottom_right.line),
            (other.top_left.line, other.bottom_right.line),
        ) && ranges_overlap(
            (self.top_left.col, self.bottom_right.col),
            (other.top_left.col, other.bottom_right.col),
        )
    }
}

fn ranges_overlap((min1, max1): (i64, i64), (min2, max2): (i64, i64)) -> bool {
    let intersect = max1 > min2 && max2 > min1;
    let first_contains_second = min1 < min2 && max1 > max2;
    let second_contains_first = min1 > min2 && max1 < max2;
    intersect || first_contains_second || second_contains_first
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.top_left, self.bottom_right)
    }
}
