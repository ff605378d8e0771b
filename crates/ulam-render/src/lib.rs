//! Renderers for ulam-spiral grids.
//!
//! Every renderer reads a finished [`Grid`] row by row and writes it to any
//! [`std::io::Write`]. EMPTY cells are rendered as blanks (or the format's
//! equivalent), never as numbers.

mod code;
mod error;
mod html;
mod json;
mod text;

use std::io::Write;
use std::str::FromStr;

use ulam_spiral::Grid;

pub use code::CodeRenderer;
pub use error::{Error, Result};
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

/// Writes a grid in some output format.
pub trait SpiralRenderer {
    fn render(&self, grid: &Grid, out: &mut dyn Write) -> Result<()>;

    /// Render into a `String`.
    fn render_to_string(&self, grid: &Grid) -> Result<String> {
        let mut buf = Vec::new();
        self.render(grid, &mut buf)?;
        // Renderers only emit UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<T: SpiralRenderer + ?Sized> SpiralRenderer for Box<T> {
    fn render(&self, grid: &Grid, out: &mut dyn Write) -> Result<()> {
        (**self).render(grid, out)
    }
}

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RendererKind {
    #[default]
    Text,
    Html,
    Code,
    Json,
}

impl RendererKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Code => "code",
            Self::Json => "json",
        }
    }

    /// Instantiate the renderer for this format.
    pub fn renderer(self) -> Box<dyn SpiralRenderer> {
        match self {
            Self::Text => Box::new(TextRenderer),
            Self::Html => Box::new(HtmlRenderer),
            Self::Code => Box::new(CodeRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

impl FromStr for RendererKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "code" => Ok(Self::Code),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownRenderer(s.to_string())),
        }
    }
}

impl std::fmt::Display for RendererKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
