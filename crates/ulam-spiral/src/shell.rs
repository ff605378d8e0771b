//! Shell arithmetic for the square spiral.
//!
//! A shell is the ring of cells at Chebyshev distance `k >= 1` from the
//! origin. Shell `k` is a square of side `2k + 1` whose border holds `8k`
//! cells, split into four sides of `2k` cells each:
//!
//! | side   | first value      | start        | runs        | ends on     |
//! |--------|------------------|--------------|-------------|-------------|
//! | right  | `(2k-1)²`        | `(k, 1-k)`   | down        | `(k, k)`    |
//! | bottom | right + `2k`     | `(k-1, k)`   | left        | `(-k, k)`   |
//! | left   | bottom + `2k`    | `(-k, k-1)`  | up          | `(-k, -k)`  |
//! | top    | left + `2k`      | `(1-k, -k)`  | right       | `(k, -k)`   |
//!
//! Each corner belongs to the side whose run ends on it. Both grid
//! generation and random access go through these same quantities, so the
//! corner assignment must be exact for the two to agree.

use crate::Coord;

/// Largest shell whose every value fits in a `u64`.
///
/// Its last value is `(2^32 - 1)² - 1`; shell `2^31` would end past `u64::MAX`.
pub const MAX_SHELL: u64 = (1 << 31) - 1;

/// Number of cells in shell `k`.
///
/// - Shell 0: 1 cell (origin)
/// - Shell k > 0: 8k cells
#[inline]
pub const fn cells_in_shell(k: u64) -> u64 {
    if k == 0 {
        1
    } else {
        8 * k
    }
}

/// Total cells through shell `k` (inclusive): `(2k+1)²`.
#[inline]
pub const fn total_cells_through(k: u64) -> u64 {
    (2 * k + 1) * (2 * k + 1)
}

/// First value on the right side of shell `k`, which is also the first value of the shell.
#[inline]
pub const fn right_start_value(k: u64) -> u64 {
    (2 * k - 1) * (2 * k - 1)
}

/// First value on the bottom side of shell `k`.
#[inline]
pub const fn bottom_start_value(k: u64) -> u64 {
    right_start_value(k) + 2 * k
}

/// First value on the left side of shell `k`.
#[inline]
pub const fn left_start_value(k: u64) -> u64 {
    bottom_start_value(k) + 2 * k
}

/// First value on the top side of shell `k`.
#[inline]
pub const fn top_start_value(k: u64) -> u64 {
    left_start_value(k) + 2 * k
}

/// Integer square root: the largest `r` with `r * r <= n`.
pub(crate) fn isqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    // The float estimate can be off by one near large perfect squares.
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

/// One of the four sides of a shell, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Right,
    Bottom,
    Left,
    Top,
}

impl Side {
    /// All sides in the order the spiral visits them.
    pub const ALL: [Self; 4] = [Self::Right, Self::Bottom, Self::Left, Self::Top];

    /// Position of this side within a shell's emission order.
    #[inline]
    pub const fn ordinal(self) -> u64 {
        match self {
            Self::Right => 0,
            Self::Bottom => 1,
            Self::Left => 2,
            Self::Top => 3,
        }
    }

    /// Unit step taken along this side.
    pub const fn direction(self) -> Coord {
        match self {
            Self::Right => Coord::new(0, 1),
            Self::Bottom => Coord::new(-1, 0),
            Self::Left => Coord::new(0, -1),
            Self::Top => Coord::new(1, 0),
        }
    }
}

/// A single ring of the spiral.
///
/// Shells are cheap value types; nothing about them is stored, every
/// quantity is derived from the index on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shell {
    index: u64,
}

impl Shell {
    /// Create shell `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k == 0`; the origin is a single cell, not a ring.
    pub fn new(k: u64) -> Self {
        assert!(k >= 1, "shell 0 is the origin, not a ring");
        Self { index: k }
    }

    /// The shell containing `coord`, or `None` for the origin.
    pub fn containing(coord: Coord) -> Option<Self> {
        match coord.shell() {
            0 => None,
            k => Some(Self { index: k }),
        }
    }

    #[inline]
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// Number of cells on each side: `2k`.
    #[inline]
    pub const fn side_length(&self) -> u64 {
        2 * self.index
    }

    #[inline]
    pub const fn cell_count(&self) -> u64 {
        cells_in_shell(self.index)
    }

    /// Value of the first cell, `(2k-1)²`.
    #[inline]
    pub const fn first_value(&self) -> u64 {
        right_start_value(self.index)
    }

    /// Value of the last cell, `(2k+1)² - 1`.
    #[inline]
    pub const fn last_value(&self) -> u64 {
        total_cells_through(self.index) - 1
    }

    /// Value written at the start coordinate of `side`.
    #[inline]
    pub const fn start_value(&self, side: Side) -> u64 {
        self.first_value() + side.ordinal() * self.side_length()
    }

    /// Coordinate where `side` begins.
    pub fn start_coord(&self, side: Side) -> Coord {
        let k = self.index as i64;
        match side {
            Side::Right => Coord::new(k, 1 - k),
            Side::Bottom => Coord::new(k - 1, k),
            Side::Left => Coord::new(-k, k - 1),
            Side::Top => Coord::new(1 - k, -k),
        }
    }

    /// Classify a coordinate on this shell onto exactly one side.
    ///
    /// Returns `None` when the coordinate is not on this shell at all.
    pub fn side_for(&self, coord: Coord) -> Option<Side> {
        let k = i64::try_from(self.index).ok()?;
        let Coord { x, y } = coord;
        let within = |v: i64| v.unsigned_abs() <= self.index;

        if x == k && y != -k && within(y) {
            Some(Side::Right)
        } else if y == k && x != k && within(x) {
            Some(Side::Bottom)
        } else if x == -k && y != k && within(y) {
            Some(Side::Left)
        } else if y == -k && x != -k && within(x) {
            Some(Side::Top)
        } else {
            None
        }
    }

    /// Spiral index of a coordinate on this shell.
    ///
    /// # Panics
    ///
    /// Panics if `coord` does not lie on this shell, or if the shell is
    /// beyond [`MAX_SHELL`].
    pub fn value_at(&self, coord: Coord) -> u64 {
        match self.try_value_at(coord) {
            Some(value) => value,
            None if self.index > MAX_SHELL => {
                panic!("shell {} is beyond the addressable range", self.index)
            }
            None => panic!("Coordinate {} is not on shell {}", coord, self.index),
        }
    }

    /// Spiral index of a coordinate on this shell, or `None` if it is off the
    /// shell or the shell is beyond [`MAX_SHELL`].
    pub fn try_value_at(&self, coord: Coord) -> Option<u64> {
        if self.index > MAX_SHELL {
            return None;
        }
        let side = self.side_for(coord)?;

        let start = self.start_coord(side);
        let dir = side.direction();
        let delta = coord - start;
        let offset = delta.x * dir.x + delta.y * dir.y;
        debug_assert!((0..self.side_length() as i64).contains(&offset));

        self.start_value(side).checked_add(offset as u64)
    }

    /// Coordinate of the cell `offset` steps into this shell's emission order.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= 8k`.
    pub fn coord_at(&self, offset: u64) -> Coord {
        assert!(
            offset < self.cell_count(),
            "offset {} out of range for shell {}",
            offset,
            self.index
        );

        let side = Side::ALL[(offset / self.side_length()) as usize];
        let pos = (offset % self.side_length()) as i64;
        let start = self.start_coord(side);
        let dir = side.direction();

        Coord::new(start.x + dir.x * pos, start.y + dir.y * pos)
    }

    /// Cells of this shell in emission order, paired with their values.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, u64)> + '_ {
        let shell = *self;
        Side::ALL.into_iter().flat_map(move |side| {
            let start = shell.start_coord(side);
            let dir = side.direction();
            let value = shell.start_value(side);
            (0..shell.side_length()).map(move |i| {
                let step = i as i64;
                (
                    Coord::new(start.x + dir.x * step, start.y + dir.y * step),
                    value + i,
                )
            })
        })
    }
}
