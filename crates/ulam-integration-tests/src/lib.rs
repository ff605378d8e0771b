//! Reference spiral generator for tests.
//!
//! Builds the spiral the slow, obvious way: a cursor starts at the origin
//! heading right and, at every step, turns if the cell on the turning side
//! is free and otherwise carries straight on. The closed-form generator in
//! `ulam-spiral` must reproduce this walk exactly.

use std::collections::HashSet;

use ulam_spiral::{size_for, truncate, Coord, Grid, SpiralGenerator};

/// Which way the cursor turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    Left,
    /// Clockwise on screen; matches the closed-form layout.
    #[default]
    Right,
}

/// One of the four axis headings, `+y` down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Right,
    Down,
    Left,
    Up,
}

/// Unit step `(dx, dy)` for a heading.
pub const fn step_vector(heading: Heading) -> (i64, i64) {
    match heading {
        Heading::Right => (1, 0),
        Heading::Down => (0, 1),
        Heading::Left => (-1, 0),
        Heading::Up => (0, -1),
    }
}

/// Heading after a quarter turn.
pub const fn turn(heading: Heading, rotation: Rotation) -> Heading {
    match (heading, rotation) {
        (Heading::Right, Rotation::Right) => Heading::Down,
        (Heading::Down, Rotation::Right) => Heading::Left,
        (Heading::Left, Rotation::Right) => Heading::Up,
        (Heading::Up, Rotation::Right) => Heading::Right,
        (Heading::Right, Rotation::Left) => Heading::Up,
        (Heading::Up, Rotation::Left) => Heading::Left,
        (Heading::Left, Rotation::Left) => Heading::Down,
        (Heading::Down, Rotation::Left) => Heading::Right,
    }
}

/// Walk state: where the cursor is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub position: Coord,
    pub heading: Heading,
}

impl Cursor {
    /// At the origin, heading right.
    pub const START: Self = Self {
        position: Coord::ORIGIN,
        heading: Heading::Right,
    };

    fn ahead(position: Coord, heading: Heading) -> Coord {
        let (dx, dy) = step_vector(heading);
        position + Coord::new(dx, dy)
    }

    /// Next state: turn toward `rotation` if that cell is free, else go straight.
    ///
    /// The origin always goes straight, since every neighbour is free there.
    pub fn step(self, rotation: Rotation, occupied: impl Fn(Coord) -> bool) -> Self {
        let straight = Self {
            position: Self::ahead(self.position, self.heading),
            heading: self.heading,
        };
        if self.position == Coord::ORIGIN {
            return straight;
        }

        let heading = turn(self.heading, rotation);
        let position = Self::ahead(self.position, heading);
        if occupied(position) {
            straight
        } else {
            Self { position, heading }
        }
    }
}

/// The first `count` cells visited by the walk, in order.
pub fn walk(count: u64, rotation: Rotation) -> Vec<Coord> {
    let mut visited = HashSet::with_capacity(count as usize);
    let mut order = Vec::with_capacity(count as usize);
    let mut cursor = Cursor::START;

    for _ in 0..count {
        visited.insert(cursor.position);
        order.push(cursor.position);
        cursor = cursor.step(rotation, |c| visited.contains(&c));
    }

    order
}

/// Grid for `spiral_to` built by walking every cell.
pub fn walk_generate(spiral_to: u64, rotation: Rotation) -> Grid {
    let size = size_for(spiral_to);
    let center = (size / 2) as i64;
    let mut rows = vec![vec![None; size]; size];

    for (index, coord) in walk((size * size) as u64, rotation).into_iter().enumerate() {
        let row = (center + coord.y) as usize;
        let col = (center + coord.x) as usize;
        rows[row][col] = truncate(index as u64, spiral_to);
    }

    Grid::from_rows(rows, spiral_to).expect("walk fills an odd-sized square")
}

/// [`SpiralGenerator`] backed by [`walk_generate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkGenerator {
    pub rotation: Rotation,
}

impl SpiralGenerator for WalkGenerator {
    fn generate(&self, spiral_to: u64) -> Grid {
        walk_generate(spiral_to, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_compose_to_identity() {
        for heading in [Heading::Right, Heading::Down, Heading::Left, Heading::Up] {
            let mut h = heading;
            for _ in 0..4 {
                h = turn(h, Rotation::Right);
            }
            assert_eq!(h, heading);
            assert_eq!(turn(turn(heading, Rotation::Right), Rotation::Left), heading);
        }
    }

    #[test]
    fn leaves_origin_heading_right() {
        let next = Cursor::START.step(Rotation::Right, |_| false);
        assert_eq!(next.position, Coord::new(1, 0));
        assert_eq!(next.heading, Heading::Right);
    }

    #[test]
    fn blocked_turn_goes_straight() {
        let cursor = Cursor {
            position: Coord::new(0, 1),
            heading: Heading::Left,
        };
        let next = cursor.step(Rotation::Right, |c| c == Coord::ORIGIN);
        assert_eq!(next.position, Coord::new(-1, 1));
        assert_eq!(next.heading, Heading::Left);
    }

    #[test]
    fn first_ten_cells() {
        let order = walk(10, Rotation::Right);
        let expected: Vec<Coord> = [
            (0, 0),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
            (2, -1),
        ]
        .into_iter()
        .map(Coord::from)
        .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn walk_grid_for_eight() {
        let grid = walk_generate(8, Rotation::Right);
        assert_eq!(
            grid.to_rows(),
            vec![
                vec![Some(6), Some(7), Some(8)],
                vec![Some(5), Some(0), Some(1)],
                vec![Some(4), Some(3), Some(2)],
            ]
        );
    }
}
