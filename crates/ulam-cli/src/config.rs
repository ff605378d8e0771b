//! CLI configuration: environment defaults, overridden by arguments.

use ulam_render::RendererKind;
use ulam_spiral::{Coord, MAX_COORD};

use crate::error::{Error, Result};

/// Environment variable selecting the renderer.
pub const RENDERER_ENV: &str = "ULAM_RENDERER";

/// Environment variable capping the largest accepted target.
pub const MAX_TARGET_ENV: &str = "ULAM_MAX_TARGET";

/// Default cap on interactive targets; keeps the grid around a thousand cells wide.
pub const DEFAULT_MAX_TARGET: u64 = 1_000_000;

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Read targets from stdin and render a spiral for each.
    #[default]
    Interactive,
    /// Print the index at one coordinate and exit.
    ValueAt(Coord),
    /// Print usage and exit.
    Help,
}

/// Configuration for a CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Output format for generated grids
    pub renderer: RendererKind,

    /// Largest target the interactive loop will generate
    pub max_target: u64,

    pub command: Command,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            renderer: RendererKind::default(),
            max_target: DEFAULT_MAX_TARGET,
            command: Command::default(),
        }
    }
}

impl CliConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(kind) = std::env::var(RENDERER_ENV) {
            config.renderer = kind.parse()?;
        }

        if let Ok(max) = std::env::var(MAX_TARGET_ENV) {
            config.max_target = max.trim().parse().map_err(|_| {
                Error::InvalidArgument(format!("{MAX_TARGET_ENV} must be a non-negative integer, got {max:?}"))
            })?;
        }

        Ok(config)
    }

    /// Apply command-line arguments (program name already stripped).
    pub fn with_args<I>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => self.command = Command::Help,
                "-r" | "--renderer" => {
                    let kind = args
                        .next()
                        .ok_or_else(|| Error::InvalidArgument(format!("{arg} requires a value")))?;
                    self.renderer = kind.parse()?;
                }
                "--at" => {
                    let x = next_coordinate(&mut args, "x")?;
                    let y = next_coordinate(&mut args, "y")?;
                    self.command = Command::ValueAt(Coord::new(x, y));
                }
                other => {
                    return Err(Error::InvalidArgument(format!("unrecognised argument {other:?}")));
                }
            }
        }

        Ok(self)
    }
}

fn next_coordinate(args: &mut impl Iterator<Item = String>, axis: &str) -> Result<i64> {
    let raw = args
        .next()
        .ok_or_else(|| Error::InvalidArgument(format!("--at requires an {axis} coordinate")))?;
    let value: i64 = raw
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("{axis} coordinate must be an integer, got {raw:?}")))?;
    if value.unsigned_abs() > MAX_COORD as u64 {
        return Err(Error::InvalidArgument(format!(
            "{axis} coordinate must lie within ±{MAX_COORD}, got {value}"
        )));
    }
    Ok(value)
}
