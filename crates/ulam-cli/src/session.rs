//! The interactive read loop.

use std::io::{BufRead, Write};

use ulam_render::SpiralRenderer;
use ulam_spiral::{Coord, RandomAccess, SpiralGenerator};

use crate::config::DEFAULT_MAX_TARGET;
use crate::error::Result;

/// Printed before every read.
pub const PROMPT: &str = "Spiral to integer (blank line to exit): ";

/// Printed when a line is not a non-negative integer.
pub const BAD_INPUT: &str = "Please enter a positive integer to spiral out to, or a blank line to exit.";

/// One interactive session: prompt, read a target, generate, render, repeat.
///
/// Ends on end of input or on a blank (whitespace-only) line.
pub struct Session<R, W, G, P> {
    input: R,
    output: W,
    generator: G,
    renderer: P,
    max_target: u64,
}

impl<R, W, G, P> Session<R, W, G, P>
where
    R: BufRead,
    W: Write,
    G: SpiralGenerator,
    P: SpiralRenderer,
{
    pub fn new(input: R, output: W, generator: G, renderer: P) -> Self {
        Self {
            input,
            output,
            generator,
            renderer,
            max_target: DEFAULT_MAX_TARGET,
        }
    }

    /// Refuse targets above `max_target`.
    pub fn with_max_target(mut self, max_target: u64) -> Self {
        self.max_target = max_target;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        while let Some(line) = self.prompt()? {
            self.process(&line)?;
        }
        tracing::debug!("session ended");
        Ok(())
    }

    /// Hand back the collaborators, e.g. to inspect an output buffer.
    pub fn into_parts(self) -> (R, W, G, P) {
        (self.input, self.output, self.generator, self.renderer)
    }

    fn prompt(&mut self) -> Result<Option<String>> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        // Undecodable bytes fall through to the bad-input reply.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        Ok(Some(line.to_string()))
    }

    fn process(&mut self, input: &str) -> Result<()> {
        match input.parse::<u64>() {
            Ok(spiral_to) if spiral_to <= self.max_target => {
                tracing::info!(spiral_to, "rendering spiral");
                let grid = self.generator.generate(spiral_to);
                self.renderer.render(&grid, &mut self.output)?;
            }
            Ok(spiral_to) => {
                tracing::warn!(spiral_to, max = self.max_target, "target above limit");
                writeln!(
                    self.output,
                    "Please enter an integer no larger than {}, or a blank line to exit.",
                    self.max_target
                )?;
            }
            Err(_) => {
                tracing::debug!(input, "rejected input");
                writeln!(self.output, "{BAD_INPUT}")?;
            }
        }
        Ok(())
    }
}

/// Print the spiral index at `coord`.
pub fn locate<G: RandomAccess>(generator: &G, coord: Coord, out: &mut impl Write) -> Result<()> {
    let value = generator.value_at(coord);
    tracing::debug!(%coord, value, "located");
    writeln!(out, "{value}")?;
    Ok(())
}
