//! Renders a grid as a two-dimensional array literal for pasting into test code.

use std::io::Write;

use ulam_spiral::Grid;

use crate::{Result, SpiralRenderer};

/// Marker written for EMPTY cells.
const EMPTY_LITERAL: i64 = -1;

#[derive(Debug, Clone, Copy, Default)]
pub struct CodeRenderer;

impl SpiralRenderer for CodeRenderer {
    fn render(&self, grid: &Grid, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "new[,]")?;
        writeln!(out, "{{")?;
        let last = grid.size() - 1;
        for (i, row) in grid.rows().enumerate() {
            let cells = row
                .iter()
                .map(|cell| cell.map_or(EMPTY_LITERAL.to_string(), |v| v.to_string()))
                .collect::<Vec<_>>()
                .join(", ");
            let terminator = if i < last { "," } else { "" };
            writeln!(out, "{{{cells}}}{terminator}")?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}
