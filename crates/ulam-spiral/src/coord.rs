//! Origin-centered square-grid coordinates.
//!
//! The spiral's origin (index 0) sits at `(0, 0)`. `+x` points right and
//! `+y` points down, matching the row-major layout of a rendered grid, so
//! the cell at absolute `(row, col)` has relative coordinate
//! `(col - origin.col, row - origin.row)`.

use std::ops::{Add, Sub};

use crate::shell::MAX_SHELL;

/// Largest `|x|` or `|y|` whose spiral index fits in a `u64`.
pub const MAX_COORD: i64 = MAX_SHELL as i64;

/// A position relative to the spiral origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    /// Horizontal offset, positive to the right
    pub x: i64,
    /// Vertical offset, positive downwards
    pub y: i64,
}

impl Coord {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance between two coordinates: `max(|dx|, |dy|)`.
    pub fn chebyshev_distance(&self, other: &Self) -> u64 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Shell number in the spiral (0 = origin, 1 = first ring, etc.)
    pub fn shell(&self) -> u64 {
        self.x.unsigned_abs().max(self.y.unsigned_abs())
    }

    /// The four axis-aligned unit steps: right, down, left, up.
    pub const AXIS_DIRECTIONS: [Self; 4] = [
        Self { x: 1, y: 0 },
        Self { x: 0, y: 1 },
        Self { x: -1, y: 0 },
        Self { x: 0, y: -1 },
    ];

    /// Whether this coordinate's spiral index fits in a `u64`, i.e. both
    /// components lie within `±MAX_COORD`.
    pub fn is_addressable(&self) -> bool {
        self.shell() <= MAX_SHELL
    }
}

impl Add for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Coord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
