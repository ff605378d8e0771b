//! JSON renderer: one object per grid, EMPTY cells as `null`.

use std::io::Write;

use serde::Serialize;
use ulam_spiral::{Grid, Position};

use crate::{Result, SpiralRenderer};

#[derive(Serialize)]
struct JsonGrid<'a> {
    size: usize,
    spiral_to: u64,
    origin: Position,
    rows: Vec<&'a [Option<u64>]>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl SpiralRenderer for JsonRenderer {
    fn render(&self, grid: &Grid, out: &mut dyn Write) -> Result<()> {
        let doc = JsonGrid {
            size: grid.size(),
            spiral_to: grid.spiral_to(),
            origin: grid.origin(),
            rows: grid.rows().collect(),
        };
        serde_json::to_writer(&mut *out, &doc)?;
        writeln!(out)?;
        Ok(())
    }
}
