//! Random access: coordinate → spiral index without building a grid.

use crate::shell::Shell;
use crate::spiral::SpiralIndex;
use crate::Coord;

/// Convert a coordinate to its spiral index, or `None` when the index would
/// not fit in a `u64` (see [`MAX_COORD`](crate::MAX_COORD)).
///
/// The result is not truncated against any target. Inverse of
/// [`spiral_to_coord`](crate::spiral_to_coord).
pub fn checked_coord_to_spiral(coord: Coord) -> Option<SpiralIndex> {
    if !coord.is_addressable() {
        return None;
    }
    match Shell::containing(coord) {
        None => Some(SpiralIndex::ORIGIN),
        Some(shell) => shell.try_value_at(coord).map(SpiralIndex),
    }
}

/// Convert a coordinate to its spiral index.
///
/// # Panics
///
/// Panics if either component lies outside `±MAX_COORD`.
pub fn coord_to_spiral(coord: Coord) -> SpiralIndex {
    match checked_coord_to_spiral(coord) {
        Some(index) => index,
        None => panic!("Coordinate {} is outside the addressable range", coord),
    }
}

/// Spiral index at `(x, y)`, or `None` outside `±MAX_COORD`.
#[inline]
pub fn try_value_at(x: i64, y: i64) -> Option<u64> {
    checked_coord_to_spiral(Coord::new(x, y)).map(|index| index.value())
}

/// Spiral index at `(x, y)`.
///
/// # Panics
///
/// Panics if either component lies outside `±MAX_COORD`.
#[inline]
pub fn value_at(x: i64, y: i64) -> u64 {
    coord_to_spiral(Coord::new(x, y)).value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MAX_SHELL;
    use crate::{spiral_to_coord, MAX_COORD};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn origin_is_zero() {
        assert_eq!(value_at(0, 0), 0);
    }

    #[test]
    fn three_by_three() {
        assert_eq!(value_at(0, 0), 0);
        assert_eq!(value_at(1, 0), 1);
        assert_eq!(value_at(1, 1), 2);
        assert_eq!(value_at(0, 1), 3);
        assert_eq!(value_at(-1, 1), 4);
        assert_eq!(value_at(-1, 0), 5);
        assert_eq!(value_at(-1, -1), 6);
        assert_eq!(value_at(0, -1), 7);
        assert_eq!(value_at(1, -1), 8);
    }

    #[test]
    fn shell_two_right_side_starts_below_corner() {
        assert_eq!(value_at(2, -1), 9);
        assert_eq!(value_at(2, 2), 12);
        assert_eq!(value_at(2, -2), 24);
    }

    #[test]
    fn addressable_boundary() {
        let k = MAX_COORD;
        let last = Shell::new(MAX_SHELL).last_value();
        assert_eq!(try_value_at(k, -k), Some(last));
        assert_eq!(try_value_at(k, 1 - k), Some(Shell::new(MAX_SHELL).first_value()));
        assert_eq!(try_value_at(-k, 0), Some(value_at(-k, 0)));
        assert_eq!(spiral_to_coord(SpiralIndex(last)), Coord::new(k, -k));

        assert_eq!(try_value_at(k + 1, 0), None);
        assert_eq!(try_value_at(0, -k - 1), None);
        assert_eq!(try_value_at(3_000_000_000, 0), None);
        assert_eq!(try_value_at(i64::MIN, 0), None);
        assert_eq!(try_value_at(i64::MAX, i64::MIN), None);
    }

    #[test]
    #[should_panic(expected = "outside the addressable range")]
    fn value_at_past_the_boundary_panics() {
        value_at(i64::MIN, 0);
    }

    #[test]
    fn injective_through_shell_ten() {
        let mut seen = HashSet::new();
        for x in -10..=10 {
            for y in -10..=10 {
                assert!(seen.insert(value_at(x, y)), "duplicate at ({}, {})", x, y);
            }
        }
        assert_eq!(seen.len(), 21 * 21);
        assert_eq!(seen.iter().max(), Some(&(21 * 21 - 1)));
    }

    #[test]
    fn bijection_through_shell_five() {
        for i in 0..crate::total_cells_through(5) {
            let coord = spiral_to_coord(SpiralIndex(i));
            let back = coord_to_spiral(coord);
            assert_eq!(back.0, i, "Round-trip failed for index {}: coord {}", i, coord);
        }
    }

    proptest! {
        #[test]
        fn coord_round_trip(x in -1_000_000i64..1_000_000, y in -1_000_000i64..1_000_000) {
            let coord = Coord::new(x, y);
            prop_assert_eq!(spiral_to_coord(coord_to_spiral(coord)), coord);
        }

        #[test]
        fn index_round_trip(i in 0u64..4_000_000_000_000) {
            prop_assert_eq!(coord_to_spiral(spiral_to_coord(SpiralIndex(i))).0, i);
        }

        #[test]
        fn index_lies_in_its_shell(x in -5_000i64..5_000, y in -5_000i64..5_000) {
            let coord = Coord::new(x, y);
            let index = coord_to_spiral(coord);
            prop_assert_eq!(index.shell(), coord.shell());
        }

        #[test]
        fn checked_matches_unchecked(x in -MAX_COORD..=MAX_COORD, y in -MAX_COORD..=MAX_COORD) {
            prop_assert_eq!(try_value_at(x, y), Some(value_at(x, y)));
        }

        #[test]
        fn out_of_range_is_none(x in any::<i64>(), y in any::<i64>()) {
            let addressable = x.unsigned_abs() <= MAX_COORD as u64 && y.unsigned_abs() <= MAX_COORD as u64;
            prop_assert_eq!(try_value_at(x, y).is_some(), addressable);
        }
    }
}
