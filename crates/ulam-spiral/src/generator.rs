//! Full-grid generation.
//!
//! [`SpiralGenerator`] and [`RandomAccess`] are the two capabilities the
//! renderers and the CLI depend on. [`ShellGenerator`] provides both from
//! the closed-form shell arithmetic: generation draws each shell side by
//! side, random access jumps straight to the enclosing shell.

use crate::grid::Grid;
use crate::locator;
use crate::shell::Shell;
use crate::Coord;

/// Produces a fully populated grid for a target index.
pub trait SpiralGenerator {
    /// Grid holding indices `0..=spiral_to`, everything else EMPTY.
    fn generate(&self, spiral_to: u64) -> Grid;
}

/// A generator that can also compute single cells directly.
pub trait RandomAccess: SpiralGenerator {
    /// Spiral index at `coord`, untruncated.
    ///
    /// Callers keep `coord` within `±MAX_COORD`; see [`Coord::is_addressable`].
    fn value_at(&self, coord: Coord) -> u64;
}

/// Closed-form generator: draws shells `1..=size/2` around a pre-set origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellGenerator;

impl ShellGenerator {
    pub const fn new() -> Self {
        Self
    }
}

impl SpiralGenerator for ShellGenerator {
    fn generate(&self, spiral_to: u64) -> Grid {
        let mut grid = Grid::blank(spiral_to);
        let radius = grid.radius();

        tracing::debug!(spiral_to, size = grid.size(), shells = radius, "generating spiral");

        grid.set_relative(Coord::ORIGIN, 0);
        for k in 1..=radius {
            let shell = Shell::new(k);
            tracing::trace!(
                shell = k,
                first = shell.first_value(),
                last = shell.last_value(),
                "drawing shell"
            );
            for (coord, value) in shell.cells() {
                grid.set_relative(coord, value);
            }
        }

        grid
    }
}

impl RandomAccess for ShellGenerator {
    fn value_at(&self, coord: Coord) -> u64 {
        locator::coord_to_spiral(coord).value()
    }
}

/// Generate the grid for `spiral_to` with the closed-form generator.
pub fn generate(spiral_to: u64) -> Grid {
    ShellGenerator.generate(spiral_to)
}
