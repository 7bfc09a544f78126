mod observer;

use grid_2d::{Coord, Grid, Size};

use crate::{ObstacleGrid, SearchFrame, SearchObserver, SolidGrid, MOVE_ORDER};

fn grid_from_strings(strings: &[&str]) -> (Grid<bool>, Coord, Coord) {
    let width = strings[0].len() as u32;
    let height = strings.len() as u32;
    let size = Size::new(width, height);
    let mut grid = Grid::new_clone(size, false);
    let mut start = None;
    let mut goal = None;
    for (i, line) in strings.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            let coord = Coord::new(j as i32, i as i32);
            match ch {
                '.' => (),
                '#' => *grid.get_mut(coord).unwrap() = true,
                's' => start = Some(coord),
                'g' => goal = Some(coord),
                'B' => {
                    start = Some(coord);
                    goal = Some(coord);
                }
                'S' => {
                    start = Some(coord);
                    *grid.get_mut(coord).unwrap() = true;
                }
                _ => panic!(),
            }
        }
    }
    (grid, start.unwrap(), goal.unwrap())
}

/// 10x10 grid with a wall at column 5 spanning rows 2..=7, start at
/// row 7 column 7, target at row 8 column 1. The shortest route runs
/// along row 8, taking 7 moves.
fn scenario_grid() -> (ObstacleGrid, Coord, Coord) {
    let grid = ObstacleGrid::with_column_wall(Size::new(10, 10), 5, 2..=7);
    (grid, Coord::new(7, 7), Coord::new(1, 8))
}

/// Same grid but column 5 blocked for the full row range, leaving
/// start and target in disconnected regions.
fn walled_off_grid() -> (ObstacleGrid, Coord, Coord) {
    let grid = ObstacleGrid::with_column_wall(Size::new(10, 10), 5, 0..=9);
    (grid, Coord::new(7, 7), Coord::new(1, 8))
}

fn assert_path_shape<G: SolidGrid>(grid: &G, path: &[Coord], start: Coord, target: Coord) {
    assert!(!path.is_empty());
    assert_eq!(path[0], start);
    assert_eq!(*path.last().unwrap(), target);
    for &coord in path {
        assert!(grid.is_valid(coord), "path crosses {:?}", coord);
    }
    for pair in path.windows(2) {
        let step = pair[1] - pair[0];
        assert!(
            MOVE_ORDER.iter().any(|direction| direction.coord() == step),
            "step {:?} is not a legal move",
            step
        );
    }
}

#[derive(Debug, Clone)]
struct FrameRecord {
    algorithm: &'static str,
    current: Coord,
    frontier: Vec<Coord>,
    explored: Vec<Coord>,
    path: Option<Vec<Coord>>,
}

#[derive(Debug, Clone, Default)]
struct RecordingObserver {
    frames: Vec<FrameRecord>,
}

impl SearchObserver for RecordingObserver {
    fn frame(&mut self, frame: SearchFrame) {
        self.frames.push(FrameRecord {
            algorithm: frame.algorithm,
            current: frame.current,
            frontier: frame.frontier.to_vec(),
            explored: frame.explored.to_vec(),
            path: frame.path.map(<[Coord]>::to_vec),
        });
    }
}
