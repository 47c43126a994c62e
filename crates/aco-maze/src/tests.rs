//! Unit tests for the maze grid, pheromone field, and loaders.

use aco_core::{Coordinate, Direction, Route};

use crate::Maze;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

/// 3×3 maze with a blocked center column bottom:
///
/// ```text
/// 1 1 1
/// 1 0 1
/// 1 0 1
/// ```
fn ring_maze() -> Maze {
    Maze::from_rows(vec![
        vec![true, true, true],
        vec![true, false, true],
        vec![true, false, true],
    ])
    .unwrap()
}

#[cfg(test)]
mod maze_tests {
    use super::*;
    use crate::MazeError;

    #[test]
    fn from_rows_shape() {
        let maze = ring_maze();
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.length(), 3);
        assert_eq!(maze.walkable_count(), 7);
    }

    #[test]
    fn ragged_rows_rejected() {
        let result = Maze::from_rows(vec![vec![true, true], vec![true]]);
        assert!(matches!(result, Err(MazeError::Dimensions(_))));
    }

    #[test]
    fn empty_maze_rejected() {
        assert!(Maze::from_rows(vec![]).is_err());
        assert!(Maze::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn bounds_checks() {
        let maze = ring_maze();
        assert!(maze.in_bounds(at(0, 0)));
        assert!(maze.in_bounds(at(2, 2)));
        assert!(!maze.in_bounds(at(-1, 0)));
        assert!(!maze.in_bounds(at(0, -1)));
        assert!(!maze.in_bounds(at(3, 0)));
        assert!(!maze.in_bounds(at(0, 3)));
    }

    #[test]
    fn walkability() {
        let maze = ring_maze();
        assert!(maze.is_walkable(at(0, 0)));
        assert!(maze.is_walkable(at(2, 2)));
        assert!(!maze.is_walkable(at(1, 1)), "blocked cell");
        assert!(!maze.is_walkable(at(-1, 0)), "off-grid is not walkable");
    }

    #[test]
    fn open_maze_is_all_walkable() {
        let maze = Maze::open(4, 2);
        assert_eq!(maze.walkable_count(), 8);
        assert!(maze.is_walkable(at(3, 1)));
    }

    #[test]
    fn display() {
        assert_eq!(ring_maze().to_string(), "3x3 maze, 7 walkable cells");
    }
}

#[cfg(test)]
mod pheromone_tests {
    use super::*;
    use crate::pheromone::BASELINE;
    use crate::PheromoneField;

    /// Assert every cell of a field is non-negative.
    fn assert_non_negative(field: &PheromoneField, maze: &Maze) {
        for y in 0..maze.length() as i32 {
            for x in 0..maze.width() as i32 {
                let v = field.intensity(at(x, y));
                assert!(v >= 0.0, "cell ({x}, {y}) went negative: {v}");
            }
        }
    }

    #[test]
    fn fresh_field_baseline() {
        let maze = ring_maze();
        let field = PheromoneField::new(&maze);
        assert_eq!(field.intensity(at(0, 0)), BASELINE);
        assert_eq!(field.intensity(at(2, 2)), BASELINE);
        assert_eq!(field.intensity(at(1, 1)), 0.0, "blocked cells start at zero");
        assert_eq!(field.intensity(at(5, 5)), 0.0, "off-grid reads as zero");
    }

    #[test]
    fn surrounding_scent_at_a_corner() {
        let maze = Maze::open(2, 2);
        let field = PheromoneField::new(&maze);
        let scent = field.surrounding_scent(at(0, 0));
        assert_eq!(scent.north, 0.0, "off-grid neighbor");
        assert_eq!(scent.west, 0.0, "off-grid neighbor");
        assert_eq!(scent.east, BASELINE);
        assert_eq!(scent.south, BASELINE);
        assert_eq!(scent.total(), 2.0 * BASELINE);
    }

    #[test]
    fn surrounding_scent_reads_blocked_as_zero() {
        let maze = ring_maze();
        let field = PheromoneField::new(&maze);
        let scent = field.surrounding_scent(at(1, 0));
        assert_eq!(scent.south, 0.0, "blocked neighbor (1, 1)");
        assert_eq!(scent.east, BASELINE);
        assert_eq!(scent.west, BASELINE);
        assert_eq!(scent.get(Direction::South), scent.south);
    }

    #[test]
    fn evaporation_strictly_decreases_positive_cells() {
        let maze = Maze::open(2, 1);
        let mut field = PheromoneField::new(&maze);
        let before = field.intensity(at(0, 0));
        field.evaporate(0.3);
        let after = field.intensity(at(0, 0));
        assert!(after < before);
        assert!((after - 0.7 * BASELINE).abs() < 1e-15);
    }

    #[test]
    fn ten_evaporations_at_point_one() {
        // 0.9^10 ≈ 0.3487: roughly a third of the scent survives ten
        // generations without reinforcement.
        let maze = Maze::open(3, 3);
        let mut field = PheromoneField::new(&maze);
        for _ in 0..10 {
            field.evaporate(0.1);
        }
        let v = field.intensity(at(1, 1));
        assert!((v - 0.9f64.powi(10)).abs() < 1e-12, "got {v}");
        assert!((v - 0.3487).abs() < 1e-4, "got {v}");
    }

    #[test]
    fn reinforce_deposits_along_entered_cells_only() {
        let maze = Maze::open(3, 1);
        let mut field = PheromoneField::new(&maze);
        let route = Route {
            start: at(0, 0),
            steps: vec![Direction::East, Direction::East],
        };
        field.reinforce(&route, 100.0);
        assert_eq!(field.intensity(at(0, 0)), BASELINE, "start cell gets nothing");
        assert_eq!(field.intensity(at(1, 0)), BASELINE + 50.0);
        assert_eq!(field.intensity(at(2, 0)), BASELINE + 50.0);
    }

    #[test]
    fn re_entered_start_does_get_a_deposit() {
        // The start cell is only exempt as the initial position; stepping
        // back onto it counts as entering it.
        let maze = Maze::open(2, 1);
        let mut field = PheromoneField::new(&maze);
        let route = Route {
            start: at(0, 0),
            steps: vec![Direction::East, Direction::West],
        };
        field.reinforce(&route, 10.0);
        assert_eq!(field.intensity(at(1, 0)), BASELINE + 5.0);
        assert_eq!(field.intensity(at(0, 0)), BASELINE + 5.0);
    }

    #[test]
    fn zero_length_route_deposits_nothing() {
        let maze = Maze::open(2, 2);
        let mut field = PheromoneField::new(&maze);
        field.reinforce(&Route::new(at(1, 1)), 100.0);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(field.intensity(at(x, y)), BASELINE);
            }
        }
    }

    #[test]
    fn off_grid_steps_skipped_quietly() {
        let maze = Maze::open(2, 1);
        let mut field = PheromoneField::new(&maze);
        // Walks off the east edge and back on.
        let route = Route {
            start: at(1, 0),
            steps: vec![Direction::East, Direction::West],
        };
        field.reinforce(&route, 10.0);
        assert_eq!(field.intensity(at(1, 0)), BASELINE + 5.0, "re-entered cell");
        assert_eq!(field.intensity(at(0, 0)), BASELINE, "untouched");
    }

    #[test]
    fn field_never_negative() {
        let maze = ring_maze();
        let mut field = PheromoneField::new(&maze);
        field.evaporate(1.0); // full decay is allowed at the field level
        assert_non_negative(&field, &maze);

        let route = Route {
            start: at(0, 0),
            steps: vec![Direction::South, Direction::South],
        };
        field.reinforce(&route, 3.0);
        field.evaporate(0.5);
        field.evaporate(0.0);
        assert_non_negative(&field, &maze);
    }

    #[test]
    fn reset_discards_accumulated_scent() {
        let maze = Maze::open(2, 1);
        let mut field = PheromoneField::new(&maze);
        field.reinforce(
            &Route { start: at(0, 0), steps: vec![Direction::East] },
            42.0,
        );
        assert!(field.intensity(at(1, 0)) > BASELINE);
        field.reset(&maze);
        assert_eq!(field.intensity(at(1, 0)), BASELINE);
    }
}

#[cfg(test)]
mod path_spec_tests {
    use super::*;
    use crate::{MazeError, PathSpec};

    #[test]
    fn valid_endpoints_accepted() {
        let maze = ring_maze();
        let spec = PathSpec::new(at(0, 0), at(2, 2));
        assert!(spec.validate(&maze).is_ok());
    }

    #[test]
    fn out_of_bounds_endpoint_rejected() {
        let maze = ring_maze();
        let spec = PathSpec::new(at(0, 0), at(3, 0));
        match spec.validate(&maze) {
            Err(MazeError::EndpointOutOfBounds { which, .. }) => assert_eq!(which, "end"),
            other => panic!("expected EndpointOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn blocked_endpoint_rejected() {
        let maze = ring_maze();
        let spec = PathSpec::new(at(1, 1), at(0, 0));
        match spec.validate(&maze) {
            Err(MazeError::EndpointBlocked { which, .. }) => assert_eq!(which, "start"),
            other => panic!("expected EndpointBlocked, got {other:?}"),
        }
    }

    #[test]
    fn display() {
        let spec = PathSpec::new(at(0, 0), at(4, 2));
        assert_eq!(spec.to_string(), "(0, 0) -> (4, 2)");
    }
}

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::{parse_maze_reader, parse_path_spec_reader, MazeError};

    const RING: &str = "\
3 3
1 1 1
1 0 1
1 0 1
";

    #[test]
    fn maze_parses() {
        let maze = parse_maze_reader(Cursor::new(RING)).unwrap();
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.length(), 3);
        assert!(maze.is_walkable(at(0, 0)));
        assert!(!maze.is_walkable(at(1, 1)));
        assert!(!maze.is_walkable(at(1, 2)));
    }

    #[test]
    fn maze_line_breaks_are_cosmetic() {
        // Same maze with all tokens on one line.
        let flat = "3 3 1 1 1 1 0 1 1 0 1";
        let maze = parse_maze_reader(Cursor::new(flat)).unwrap();
        assert_eq!(maze.walkable_count(), 7);
    }

    #[test]
    fn maze_missing_dimensions() {
        assert!(matches!(
            parse_maze_reader(Cursor::new("")),
            Err(MazeError::Dimensions(_))
        ));
        assert!(matches!(
            parse_maze_reader(Cursor::new("4")),
            Err(MazeError::Dimensions(_))
        ));
    }

    #[test]
    fn maze_non_numeric_dimension() {
        assert!(matches!(
            parse_maze_reader(Cursor::new("three 3 1 1 1")),
            Err(MazeError::Dimensions(_))
        ));
    }

    #[test]
    fn maze_zero_dimension() {
        assert!(matches!(
            parse_maze_reader(Cursor::new("0 3")),
            Err(MazeError::Dimensions(_))
        ));
    }

    #[test]
    fn maze_bad_cell_token() {
        let text = "2 1\n1 2\n";
        assert!(matches!(
            parse_maze_reader(Cursor::new(text)),
            Err(MazeError::Parse(_))
        ));
    }

    #[test]
    fn maze_too_few_cells() {
        let text = "2 2\n1 1 1\n";
        assert!(matches!(
            parse_maze_reader(Cursor::new(text)),
            Err(MazeError::Parse(_))
        ));
    }

    #[test]
    fn maze_trailing_tokens_rejected() {
        let text = "2 1\n1 1 1\n";
        assert!(matches!(
            parse_maze_reader(Cursor::new(text)),
            Err(MazeError::Parse(_))
        ));
    }

    #[test]
    fn path_spec_parses_decorated_form() {
        let spec = parse_path_spec_reader(Cursor::new("0, 0;\n4, 2;\n")).unwrap();
        assert_eq!(spec.start, at(0, 0));
        assert_eq!(spec.end, at(4, 2));
    }

    #[test]
    fn path_spec_parses_bare_form() {
        let spec = parse_path_spec_reader(Cursor::new("1 2 3 4")).unwrap();
        assert_eq!(spec.start, at(1, 2));
        assert_eq!(spec.end, at(3, 4));
    }

    #[test]
    fn path_spec_wrong_value_count() {
        assert!(matches!(
            parse_path_spec_reader(Cursor::new("1 2 3")),
            Err(MazeError::Parse(_))
        ));
        assert!(matches!(
            parse_path_spec_reader(Cursor::new("1 2 3 4 5")),
            Err(MazeError::Parse(_))
        ));
    }

    #[test]
    fn path_spec_non_integer() {
        assert!(matches!(
            parse_path_spec_reader(Cursor::new("a, b;\n1, 1;")),
            Err(MazeError::Parse(_))
        ));
    }
}
