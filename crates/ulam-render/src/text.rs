//! Plain-text renderer: right-aligned columns separated by one space.

use std::io::Write;

use ulam_spiral::Grid;

use crate::{Result, SpiralRenderer};

/// Renders each row on its own line, every cell padded to the width of
/// `spiral_to`. EMPTY cells become spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Column width: number of decimal digits in `spiral_to`.
    fn places(grid: &Grid) -> usize {
        grid.spiral_to().checked_ilog10().map_or(0, |d| d as usize) + 1
    }
}

impl SpiralRenderer for TextRenderer {
    fn render(&self, grid: &Grid, out: &mut dyn Write) -> Result<()> {
        let places = Self::places(grid);
        for row in grid.rows() {
            let line = row
                .iter()
                .map(|cell| match cell {
                    Some(value) => format!("{value:>places$}"),
                    None => format!("{:>places$}", ""),
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
