//! Marker set construction from grid lines.

use crate::geometry::Star;
use std::collections::BTreeSet;

/// Default marker glyph.
pub const DEFAULT_MARKER: char = '*';

/// The set of star coordinates found in the input grid.
///
/// Iterates in row-major order. The component extractor drains it front to
/// back, so box discovery order follows the grid top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    stars: BTreeSet<Star>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a marker set from grid lines, numbering lines from 1.
    pub fn from_lines<I, S>(lines: I, marker: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for (i, line) in lines.into_iter().enumerate() {
            set.insert_line(i as i64 + 1, line.as_ref(), marker);
        }
        set
    }

    /// Add a star for every `marker` character in `line`.
    ///
    /// Columns are counted in characters, starting at 1. Anything other than
    /// the marker is background.
    pub fn insert_line(&mut self, line_number: i64, line: &str, marker: char) {
        for (i, ch) in line.chars().enumerate() {
            if ch == marker {
                self.stars.insert(Star::new(line_number, i as i64 + 1));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn contains(&self, star: &Star) -> bool {
        self.stars.contains(star)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    /// Take the first remaining star in row-major order.
    pub(crate) fn pop_first(&mut self) -> Option<Star> {
        self.stars.pop_first()
    }

    pub(crate) fn remove(&mut self, star: &Star) -> bool {
        self.stars.remove(star)
    }
}
