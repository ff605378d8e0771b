//! Spiral indices and the index → coordinate direction of the bijection.
//!
//! The spiral starts at the origin with index 0, steps right to index 1,
//! then winds clockwise (on screen, with `+y` down) around ever larger
//! shells. Shell `k` holds indices `(2k-1)²` through `(2k+1)² - 1`.

use crate::shell::{isqrt, Shell, Side};
use crate::Coord;

/// A position in the spiral's linear enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralIndex(pub u64);

impl SpiralIndex {
    /// Origin slot.
    pub const ORIGIN: Self = Self(0);

    /// Create from raw index.
    #[inline]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Determine which shell this index falls in.
    ///
    /// Shell 0: index 0
    /// Shell 1: indices 1-8
    /// Shell 2: indices 9-24
    /// Shell k: indices from (2k-1)² to (2k+1)²-1
    pub fn shell(&self) -> u64 {
        // (2k-1)² <= i < (2k+1)² puts isqrt(i) at 2k-1 or 2k.
        (isqrt(self.0) + 1) / 2
    }

    /// Offset within the shell (0 to 8k-1 for shell k > 0).
    pub fn offset_in_shell(&self) -> u64 {
        match self.shell() {
            0 => 0,
            k => self.0 - Shell::new(k).first_value(),
        }
    }
}

impl From<u64> for SpiralIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SpiralIndex> for u64 {
    fn from(value: SpiralIndex) -> Self {
        value.0
    }
}

impl std::fmt::Display for SpiralIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a spiral index to its coordinate.
pub fn spiral_to_coord(index: SpiralIndex) -> Coord {
    match index.shell() {
        0 => Coord::ORIGIN,
        k => Shell::new(k).coord_at(index.offset_in_shell()),
    }
}

/// Iterator over spiral coordinates in emission order.
///
/// Walks each shell side by side from its start coordinate, so producing the
/// next coordinate is one step rather than a fresh index conversion.
#[derive(Debug, Clone)]
pub struct Spiral {
    /// Current shell; 0 while the origin is still pending.
    shell: u64,
    side: usize,
    step: u64,
    remaining: Option<u64>,
}

impl Spiral {
    /// Create an infinite spiral iterator starting from origin.
    pub fn new() -> Self {
        Self {
            shell: 0,
            side: 0,
            step: 0,
            remaining: None,
        }
    }

    /// Create a spiral iterator that yields `count` coordinates.
    pub fn take_slots(count: u64) -> Self {
        Self {
            remaining: Some(count),
            ..Self::new()
        }
    }

    /// Create a spiral iterator for a shell range (inclusive).
    ///
    /// Yields nothing when `start_shell > end_shell`.
    pub fn shells(start_shell: u64, end_shell: u64) -> Self {
        let first = match start_shell {
            0 => 0,
            k => Shell::new(k).first_value(),
        };
        let end = crate::total_cells_through(end_shell);

        Self {
            shell: start_shell,
            side: 0,
            step: 0,
            remaining: Some(end.saturating_sub(first)),
        }
    }

    fn advance(&mut self) -> Coord {
        if self.shell == 0 {
            self.shell = 1;
            return Coord::ORIGIN;
        }

        let shell = Shell::new(self.shell);
        let side = Side::ALL[self.side];
        let start = shell.start_coord(side);
        let dir = side.direction();
        let step = self.step as i64;
        let coord = Coord::new(start.x + dir.x * step, start.y + dir.y * step);

        self.step += 1;
        if self.step == shell.side_length() {
            self.step = 0;
            self.side += 1;
            if self.side == Side::ALL.len() {
                self.side = 0;
                self.shell += 1;
            }
        }
        coord
    }
}

impl Default for Spiral {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Spiral {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => {
                let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}
