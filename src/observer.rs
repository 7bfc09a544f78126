use grid_2d::Coord;

/// Snapshot of search progress, emitted once after each expansion and
/// once at termination. `path` is populated on the successful
/// terminal frame only.
#[derive(Debug, Clone, Copy)]
pub struct SearchFrame<'a> {
    pub algorithm: &'static str,
    pub current: Coord,
    pub frontier: &'a [Coord],
    pub explored: &'a [Coord],
    pub path: Option<&'a [Coord]>,
}

/// Pure observer: the engine never inspects a return value, so a sink
/// cannot influence control flow.
pub trait SearchObserver {
    fn frame(&mut self, frame: SearchFrame);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn frame(&mut self, _frame: SearchFrame) {}
}
