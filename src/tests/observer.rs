use grid_2d::{Coord, Size};

use super::{scenario_grid, walled_off_grid, RecordingObserver};
use crate::{BfsContext, DfsContext, Error, ObstacleGrid, MOVE_ORDER};

#[test]
fn one_frame_per_expansion_plus_terminal() {
    let (grid, start, target) = scenario_grid();
    let mut ctx = BfsContext::new(grid.size());
    let mut path = Vec::new();
    let mut observer = RecordingObserver::default();
    let metadata = ctx
        .bfs(
            &grid,
            start,
            target,
            Default::default(),
            &mut observer,
            &mut path,
        )
        .unwrap();

    assert_eq!(observer.frames.len(), metadata.num_nodes_visited + 1);

    let terminal = observer.frames.last().unwrap();
    assert_eq!(terminal.path.as_deref(), Some(path.as_slice()));
    assert_eq!(terminal.current, target);
    for frame in &observer.frames[..observer.frames.len() - 1] {
        assert!(frame.path.is_none());
        assert_eq!(frame.algorithm, "BFS");
    }
}

#[test]
fn terminal_frame_on_failure_has_no_path() {
    let (grid, start, target) = walled_off_grid();
    let mut ctx = BfsContext::new(grid.size());
    let mut path = Vec::new();
    let mut observer = RecordingObserver::default();
    let result = ctx.bfs(
        &grid,
        start,
        target,
        Default::default(),
        &mut observer,
        &mut path,
    );
    assert_eq!(result, Err(Error::NoPath));
    assert!(!observer.frames.is_empty());
    assert!(observer.frames.iter().all(|frame| frame.path.is_none()));
}

#[test]
fn first_frontier_snapshot_follows_move_order() {
    let grid = ObstacleGrid::new(Size::new(10, 10));
    let start = Coord::new(5, 5);
    let target = Coord::new(0, 0);
    let mut ctx = BfsContext::new(grid.size());
    let mut path = Vec::new();
    let mut observer = RecordingObserver::default();
    ctx.bfs(
        &grid,
        start,
        target,
        Default::default(),
        &mut observer,
        &mut path,
    )
    .unwrap();

    let expected: Vec<Coord> = MOVE_ORDER
        .iter()
        .map(|direction| start + direction.coord())
        .collect();
    assert_eq!(observer.frames[0].frontier, expected);
    assert_eq!(observer.frames[0].explored, vec![start]);
    assert_eq!(observer.frames[0].current, start);
}

#[test]
fn iterative_deepening_frames_are_labelled() {
    let (grid, start, target) = scenario_grid();
    let mut ctx = DfsContext::new(grid.size());
    let mut path = Vec::new();
    let mut observer = RecordingObserver::default();
    ctx.iterative_deepening(
        &grid,
        start,
        target,
        Default::default(),
        &mut observer,
        &mut path,
    )
    .unwrap();

    assert!(observer
        .frames
        .iter()
        .all(|frame| frame.algorithm == "IDDFS"));
}

#[test]
fn single_frame_when_start_equals_target() {
    let (grid, start, _) = scenario_grid();
    let mut ctx = BfsContext::new(grid.size());
    let mut path = Vec::new();
    let mut observer = RecordingObserver::default();
    ctx.bfs(
        &grid,
        start,
        start,
        Default::default(),
        &mut observer,
        &mut path,
    )
    .unwrap();

    assert_eq!(observer.frames.len(), 1);
    assert_eq!(
        observer.frames[0].path.as_deref(),
        Some(&[start][..])
    );
}
