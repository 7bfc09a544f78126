use direction::Direction;
use grid_2d::{Coord, Grid, Size};
use log::debug;

use crate::config::SearchConfig;
use crate::error::Error;
use crate::grid::SolidGrid;
use crate::metadata::SearchMetadata;
use crate::moves::MOVE_ORDER;
use crate::observer::{SearchFrame, SearchObserver};
use crate::path::{self, PathNode};

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy)]
struct DfsNode {
    seen: u64,
    visited: u64,
    coord: Coord,
    from_parent: Option<Direction>,
}

impl DfsNode {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            visited: 0,
            coord,
            from_parent: None,
        }
    }
}

impl PathNode for DfsNode {
    fn from_parent(&self) -> Option<Direction> {
        self.from_parent
    }
    fn coord(&self) -> Coord {
        self.coord
    }
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy)]
struct DepthEntry {
    index: usize,
    depth: usize,
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone)]
pub struct DfsContext {
    seq: u64,
    stack: Vec<DepthEntry>,
    node_grid: Grid<DfsNode>,
    explored: Vec<Coord>,
}

impl DfsContext {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            stack: Vec::new(),
            node_grid: Grid::new_fn(size, DfsNode::new),
            explored: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    fn emit<O: SearchObserver>(
        &self,
        observer: &mut O,
        algorithm: &'static str,
        current: Coord,
        path: Option<&[Coord]>,
    ) {
        let frontier: Vec<Coord> = self
            .stack
            .iter()
            .map(|entry| self.node_grid.get_index_checked(entry.index).coord)
            .collect();
        observer.frame(SearchFrame {
            algorithm,
            current,
            frontier: &frontier,
            explored: &self.explored,
            path,
        });
    }

    pub fn dfs<G, O>(
        &mut self,
        grid: &G,
        start: Coord,
        target: Coord,
        config: SearchConfig,
        observer: &mut O,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<usize>, Error>
    where
        G: SolidGrid,
        O: SearchObserver,
    {
        self.run(grid, start, target, None, "DFS", config, observer, path)
    }

    /// Depth-limited search: a node is expanded only while its depth
    /// is strictly below `limit`, so any returned path has at most
    /// `limit` moves. Exhausting the depth budget is reported as
    /// [`Error::NoPath`].
    pub fn depth_limited<G, O>(
        &mut self,
        grid: &G,
        start: Coord,
        target: Coord,
        limit: usize,
        config: SearchConfig,
        observer: &mut O,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<usize>, Error>
    where
        G: SolidGrid,
        O: SearchObserver,
    {
        self.run(grid, start, target, Some(limit), "DLS", config, observer, path)
    }

    /// Repeats depth-limited search with limits 0, 1, 2, … up to
    /// width × height, discarding all state between attempts. The
    /// final attempt's limit can never bind, so a reachable target is
    /// always found.
    pub fn iterative_deepening<G, O>(
        &mut self,
        grid: &G,
        start: Coord,
        target: Coord,
        config: SearchConfig,
        observer: &mut O,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<usize>, Error>
    where
        G: SolidGrid,
        O: SearchObserver,
    {
        let area = (self.node_grid.width() * self.node_grid.height()) as usize;
        for limit in 0..=area {
            debug!("iterative deepening: searching at depth limit {}", limit);
            match self.run(grid, start, target, Some(limit), "IDDFS", config, observer, path) {
                Err(Error::NoPath) => (),
                result => return result,
            }
        }
        Err(Error::NoPath)
    }

    fn run<G, O>(
        &mut self,
        grid: &G,
        start: Coord,
        target: Coord,
        limit: Option<usize>,
        algorithm: &'static str,
        config: SearchConfig,
        observer: &mut O,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<usize>, Error>
    where
        G: SolidGrid,
        O: SearchObserver,
    {
        match grid.is_solid(start) {
            None => return Err(Error::StartOutsideGrid),
            Some(true) if !config.allow_solid_start => return Err(Error::StartSolid),
            _ => (),
        }

        let start_index = self
            .node_grid
            .index_of_coord(start)
            .ok_or(Error::VisitOutsideContext)?;

        self.seq += 1;
        self.stack.clear();
        self.explored.clear();

        if start == target {
            path.clear();
            path.push(start);
            self.emit(observer, algorithm, start, Some(path.as_slice()));
            return Ok(SearchMetadata {
                num_nodes_visited: 0,
                cost: 0,
                length: 0,
            });
        }

        {
            let node = self.node_grid.get_index_checked_mut(start_index);
            node.seen = self.seq;
            node.from_parent = None;
        }
        self.stack.push(DepthEntry {
            index: start_index,
            depth: 0,
        });

        let mut num_nodes_visited = 0;
        let mut last = start;

        while let Some(entry) = self.stack.pop() {
            let current_coord = self.node_grid.get_index_checked(entry.index).coord;

            if current_coord == target {
                path::make_path(&self.node_grid, entry.index, path);
                self.emit(observer, algorithm, current_coord, Some(path.as_slice()));
                return Ok(SearchMetadata {
                    num_nodes_visited,
                    cost: path.len() - 1,
                    length: path.len() - 1,
                });
            }

            {
                let node = self.node_grid.get_index_checked_mut(entry.index);
                if node.visited == self.seq {
                    continue;
                }
            }

            if let Some(limit) = limit {
                if entry.depth >= limit {
                    continue;
                }
            }

            self.node_grid.get_index_checked_mut(entry.index).visited = self.seq;
            self.explored.push(current_coord);
            num_nodes_visited += 1;
            last = current_coord;

            // Reverse push order so pops follow the canonical move order.
            for &direction in MOVE_ORDER.iter().rev() {
                let neighbour_coord = current_coord + direction.coord();

                if !grid.is_valid(neighbour_coord) {
                    continue;
                }

                let index = self
                    .node_grid
                    .index_of_coord(neighbour_coord)
                    .ok_or(Error::VisitOutsideContext)?;

                let node = self.node_grid.get_index_checked_mut(index);
                if node.seen != self.seq {
                    node.seen = self.seq;
                    node.from_parent = Some(direction);
                    self.stack.push(DepthEntry {
                        index,
                        depth: entry.depth + 1,
                    });
                }
            }

            self.emit(observer, algorithm, current_coord, None);
        }

        self.emit(observer, algorithm, last, None);
        Err(Error::NoPath)
    }
}
