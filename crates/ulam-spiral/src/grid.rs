//! The materialized spiral grid and its two coordinate systems.
//!
//! Cells are stored row-major. A cell can be addressed either absolutely,
//! by `(row, col)` from the top-left corner, or relative to the origin at
//! the center, by [`Coord`]. The two are related by
//! `(row, col) = (origin.row + y, origin.col + x)`.
//!
//! Cells whose index exceeds the grid's `spiral_to` target hold `None`
//! (EMPTY), so a grid asked for a target smaller than its natural capacity
//! still renders with blank trailing cells.

use crate::error::{Error, Result};
use crate::shell::isqrt;
use crate::Coord;

/// An absolute cell address, `(0, 0)` being the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Side length of the smallest grid that holds indices `0..=target`.
///
/// `floor(sqrt(target)) + 1`, bumped to the next odd number so the grid has
/// a center cell.
pub fn size_for(target: u64) -> usize {
    let width = isqrt(target) as usize + 1;
    if width % 2 == 0 {
        width + 1
    } else {
        width
    }
}

/// Apply the EMPTY rule: indices beyond `target` are blanked.
#[inline]
pub fn truncate(index: u64, target: u64) -> Option<u64> {
    (index <= target).then_some(index)
}

/// Absolute position of an origin-relative coordinate.
///
/// Returns `None` if the result would fall above or left of the grid.
pub fn to_absolute(coord: Coord, origin: Position) -> Option<Position> {
    let row = usize::try_from(origin.row as i64 + coord.y).ok()?;
    let col = usize::try_from(origin.col as i64 + coord.x).ok()?;
    Some(Position { row, col })
}

/// Origin-relative coordinate of an absolute position.
pub fn to_relative(position: Position, origin: Position) -> Coord {
    Coord::new(
        position.col as i64 - origin.col as i64,
        position.row as i64 - origin.row as i64,
    )
}

/// A square spiral grid, read-only once handed out by a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    size: usize,
    spiral_to: u64,
    cells: Vec<Option<u64>>,
}

impl Grid {
    /// An all-EMPTY grid sized for `spiral_to`.
    pub(crate) fn blank(spiral_to: u64) -> Self {
        let size = size_for(spiral_to);
        Self {
            size,
            spiral_to,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from pre-filled rows.
    ///
    /// The rows must form a non-empty, odd-sized square. Values above
    /// `spiral_to` are stored as EMPTY. Whether the size matches
    /// [`size_for`]`(spiral_to)` is left to the caller.
    pub fn from_rows(rows: Vec<Vec<Option<u64>>>, spiral_to: u64) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::EmptyGrid);
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(Error::NotSquare {
                row,
                len: cells.len(),
                size,
            });
        }
        if size % 2 == 0 {
            return Err(Error::EvenSize(size));
        }

        let cells = rows
            .into_iter()
            .flatten()
            .map(|cell| cell.and_then(|v| truncate(v, spiral_to)))
            .collect();

        Ok(Self {
            size,
            spiral_to,
            cells,
        })
    }

    /// Side length (always odd).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest index this grid displays.
    #[inline]
    pub fn spiral_to(&self) -> u64 {
        self.spiral_to
    }

    /// Absolute position of the center cell.
    #[inline]
    pub fn origin(&self) -> Position {
        Position::new(self.size / 2, self.size / 2)
    }

    /// Number of shells around the origin: `size / 2`.
    #[inline]
    pub fn radius(&self) -> u64 {
        (self.size / 2) as u64
    }

    /// Whether an origin-relative coordinate falls inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.shell() <= self.radius()
    }

    /// Cell at an absolute position: `None` if out of bounds, `Some(None)` if EMPTY.
    pub fn cell(&self, row: usize, col: usize) -> Option<Option<u64>> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Cell at an origin-relative coordinate.
    pub fn cell_relative(&self, coord: Coord) -> Option<Option<u64>> {
        let pos = to_absolute(coord, self.origin())?;
        self.cell(pos.row, pos.col)
    }

    /// Index at an absolute position, `None` if EMPTY or out of bounds.
    pub fn value(&self, row: usize, col: usize) -> Option<u64> {
        self.cell(row, col).flatten()
    }

    /// Index at an origin-relative coordinate, `None` if EMPTY or out of bounds.
    pub fn value_relative(&self, coord: Coord) -> Option<u64> {
        self.cell_relative(coord).flatten()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u64>]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Option<u64>>> {
        self.rows().map(<[_]>::to_vec).collect()
    }

    /// Write `index` at `coord`, blanking it if it exceeds the target.
    ///
    /// Coordinates outside the grid are ignored.
    pub(crate) fn set_relative(&mut self, coord: Coord, index: u64) {
        if let Some(pos) = to_absolute(coord, self.origin()) {
            if pos.row < self.size && pos.col < self.size {
                self.cells[pos.row * self.size + pos.col] = truncate(index, self.spiral_to);
            }
        }
    }
}
