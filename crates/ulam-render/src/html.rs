//! HTML table-row renderer.

use std::io::Write;

use ulam_spiral::Grid;

use crate::{Result, SpiralRenderer};

/// Renders `<tr>` rows of `<td>` cells with no surrounding `<table>`, so
/// callers can style the table themselves. EMPTY cells become `&nbsp;`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl SpiralRenderer for HtmlRenderer {
    fn render(&self, grid: &Grid, out: &mut dyn Write) -> Result<()> {
        for row in grid.rows() {
            write!(out, "<tr>")?;
            for cell in row {
                match cell {
                    Some(value) => write!(out, "<td>{value}</td>")?,
                    None => write!(out, "<td>&nbsp;</td>")?,
                }
            }
            write!(out, "</tr>")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulam_spiral::generate;

    #[test]
    fn renders_table_rows() {
        let html = HtmlRenderer.render_to_string(&generate(2)).unwrap();
        assert_eq!(
            html,
            "<tr><td>&nbsp;</td><td>&nbsp;</td><td>&nbsp;</td></tr>\
             <tr><td>&nbsp;</td><td>0</td><td>1</td></tr>\
             <tr><td>&nbsp;</td><td>&nbsp;</td><td>2</td></tr>"
        );
    }
}
