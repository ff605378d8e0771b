//! Ulam Spiral
//!
//! Square integer spiral with closed-form shell arithmetic.
//!
//! # Layout
//!
//! Index 0 sits at the origin. Index 1 is one step right, and the walk then
//! winds clockwise (with `+y` pointing down the screen) around concentric
//! square shells:
//!
//! ```text
//! 20 21 22 23 24
//! 19  6  7  8  9
//! 18  5  0  1 10
//! 17  4  3  2 11
//! 16 15 14 13 12
//! ```
//!
//! Shell `k` is the ring at Chebyshev distance `k`. It holds `8k` cells,
//! indices `(2k-1)²` through `(2k+1)² - 1`.
//!
//! # Two directions
//!
//! - [`generate`] materializes a [`Grid`] holding `0..=spiral_to`, with all
//!   larger indices EMPTY.
//! - [`value_at`] / [`coord_to_spiral`] compute one cell's index in O(1)
//!   without a grid; [`spiral_to_coord`] is its inverse.
//!
//! Both go through the same [`Shell`] quantities and agree on every
//! coordinate.
//!
//! Indices are `u64`, so random access covers coordinates within
//! `±`[`MAX_COORD`]; [`try_value_at`] and [`checked_coord_to_spiral`] return
//! `None` beyond that.

mod coord;
mod error;
mod generator;
mod grid;
mod locator;
mod shell;
mod spiral;

pub use coord::{Coord, MAX_COORD};
pub use error::{Error, Result};
pub use generator::{generate, RandomAccess, ShellGenerator, SpiralGenerator};
pub use grid::{size_for, to_absolute, to_relative, truncate, Grid, Position};
pub use locator::{checked_coord_to_spiral, coord_to_spiral, try_value_at, value_at};
pub use shell::{
    bottom_start_value, cells_in_shell, left_start_value, right_start_value, top_start_value,
    total_cells_through, Shell, Side, MAX_SHELL,
};
pub use spiral::{spiral_to_coord, Spiral, SpiralIndex};
