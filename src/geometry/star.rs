//! Star coordinates.

use serde::Serialize;
use std::fmt;

/// A single marker position in the input grid.
///
/// Both coordinates are 1-based. Ordering is row-major (line first, then
/// column), which matches the order stars are read from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Star {
    pub line: i64,
    pub col: i64,
}

impl Star {
    pub fn new(line: i64, col: i64) -> Self {
        Self { line, col }
    }

    /// The four orthogonal neighbours: right, below, left, above.
    ///
    /// Coordinates may fall outside the grid (line or column 0); callers
    /// filter by membership in the marker set, not by range.
    pub fn neighbors(&self) -> [Star; 4] {
        [
            Star::new(self.line, self.col + 1),
            Star::new(self.line + 1, self.col),
            Star::new(self.line, self.col - 1),
            Star::new(self.line - 1, self.col),
        ]
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.col)
    }
}
