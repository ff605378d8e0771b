//! Interactive front end for ulam-spiral.
//!
//! Reads target integers line by line, generates each spiral with a
//! [`SpiralGenerator`](ulam_spiral::SpiralGenerator) and writes it with a
//! [`SpiralRenderer`](ulam_render::SpiralRenderer).

pub mod config;
pub mod error;
pub mod session;

pub use config::{CliConfig, Command};
pub use error::{Error, Result};
pub use session::{locate, Session, BAD_INPUT, PROMPT};
