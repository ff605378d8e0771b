//! The closed-form generator, the walk oracle and random access must agree
//! on every cell.

use proptest::prelude::*;
use ulam_integration_tests::{walk_generate, Rotation, WalkGenerator};
use ulam_spiral::{value_at, Coord, Grid, RandomAccess, ShellGenerator, SpiralGenerator};

fn grid_from(rows: &[&[i64]], spiral_to: u64) -> Grid {
    let rows = rows
        .iter()
        .map(|row| row.iter().map(|&v| u64::try_from(v).ok()).collect())
        .collect();
    Grid::from_rows(rows, spiral_to).unwrap()
}

fn generators() -> Vec<(&'static str, Box<dyn SpiralGenerator>)> {
    vec![
        ("shell", Box::new(ShellGenerator)),
        ("walk", Box::new(WalkGenerator::default())),
    ]
}

#[test]
fn known_layouts() {
    let cases: Vec<(u64, Grid)> = vec![
        (0, grid_from(&[&[0]], 0)),
        (2, grid_from(&[&[-1, -1, -1], &[-1, 0, 1], &[-1, -1, 2]], 2)),
        (4, grid_from(&[&[-1, -1, -1], &[-1, 0, 1], &[4, 3, 2]], 4)),
        (6, grid_from(&[&[6, -1, -1], &[5, 0, 1], &[4, 3, 2]], 6)),
        (8, grid_from(&[&[6, 7, 8], &[5, 0, 1], &[4, 3, 2]], 8)),
        (
            14,
            grid_from(
                &[
                    &[-1, -1, -1, -1, -1],
                    &[-1, 6, 7, 8, 9],
                    &[-1, 5, 0, 1, 10],
                    &[-1, 4, 3, 2, 11],
                    &[-1, -1, 14, 13, 12],
                ],
                14,
            ),
        ),
        (
            22,
            grid_from(
                &[
                    &[20, 21, 22, -1, -1],
                    &[19, 6, 7, 8, 9],
                    &[18, 5, 0, 1, 10],
                    &[17, 4, 3, 2, 11],
                    &[16, 15, 14, 13, 12],
                ],
                22,
            ),
        ),
        (
            24,
            grid_from(
                &[
                    &[20, 21, 22, 23, 24],
                    &[19, 6, 7, 8, 9],
                    &[18, 5, 0, 1, 10],
                    &[17, 4, 3, 2, 11],
                    &[16, 15, 14, 13, 12],
                ],
                24,
            ),
        ),
        (
            118,
            grid_from(
                &[
                    &[110, 111, 112, 113, 114, 115, 116, 117, 118, -1, -1],
                    &[109, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81],
                    &[108, 71, 42, 43, 44, 45, 46, 47, 48, 49, 82],
                    &[107, 70, 41, 20, 21, 22, 23, 24, 25, 50, 83],
                    &[106, 69, 40, 19, 6, 7, 8, 9, 26, 51, 84],
                    &[105, 68, 39, 18, 5, 0, 1, 10, 27, 52, 85],
                    &[104, 67, 38, 17, 4, 3, 2, 11, 28, 53, 86],
                    &[103, 66, 37, 16, 15, 14, 13, 12, 29, 54, 87],
                    &[102, 65, 36, 35, 34, 33, 32, 31, 30, 55, 88],
                    &[101, 64, 63, 62, 61, 60, 59, 58, 57, 56, 89],
                    &[100, 99, 98, 97, 96, 95, 94, 93, 92, 91, 90],
                ],
                118,
            ),
        ),
    ];

    for (name, generator) in generators() {
        for (spiral_to, expected) in &cases {
            assert_eq!(
                &generator.generate(*spiral_to),
                expected,
                "generator {} failed for {}",
                name,
                spiral_to
            );
        }
    }
}

#[test]
fn shell_matches_walk_through_four_hundred() {
    for spiral_to in 0..=400 {
        assert_eq!(
            ShellGenerator.generate(spiral_to),
            walk_generate(spiral_to, Rotation::Right),
            "mismatch for {}",
            spiral_to
        );
    }
}

#[test]
fn random_access_matches_large_grid() {
    let spiral_to = 10_000;
    let grid = ShellGenerator.generate(spiral_to);
    let bounds = grid.radius() as i64;

    for x in -bounds..=bounds {
        for y in -bounds..=bounds {
            let actual = ShellGenerator.value_at(Coord::new(x, y));
            match grid.cell_relative(Coord::new(x, y)) {
                Some(Some(expected)) => assert_eq!(actual, expected, "at ({}, {})", x, y),
                Some(None) => assert!(actual > spiral_to, "at ({}, {})", x, y),
                None => panic!("({}, {}) should be inside the grid", x, y),
            }
        }
    }
}

#[test]
fn shell_two_right_side() {
    assert_eq!(value_at(1, -1), 8);
    assert_eq!(value_at(2, -1), 9);
    assert_eq!(ShellGenerator.value_at(Coord::new(2, -1)), 9);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shell_matches_walk(spiral_to in 0u64..20_000) {
        prop_assert_eq!(
            ShellGenerator.generate(spiral_to),
            walk_generate(spiral_to, Rotation::Right)
        );
    }

    #[test]
    fn grid_cells_are_value_at_or_empty(spiral_to in 0u64..5_000) {
        let grid = ShellGenerator.generate(spiral_to);
        let r = grid.radius() as i64;
        for x in -r..=r {
            for y in -r..=r {
                let direct = value_at(x, y);
                let expected = if direct <= spiral_to { Some(direct) } else { None };
                prop_assert_eq!(grid.cell_relative(Coord::new(x, y)), Some(expected));
            }
        }
    }
}
