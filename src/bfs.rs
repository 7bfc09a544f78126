use std::collections::VecDeque;

use direction::Direction;
use grid_2d::{Coord, Grid, Size};

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
struct BfsNode {
    seen: u64,
    visited: u64,
    coord: Coord,
    from_parent: Option<Direction>,
}

impl BfsNode {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            visited: 0,
            coord,
            from_parent: None,
        }
    }
}

impl PathNode for BfsNode {
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
#[derive(Debug, Clone)]
pub struct BfsContext {
    seq: u64,
    queue: VecDeque<usize>,
    node_grid: Grid<BfsNode>,
    explored: Vec<Coord>,
}

impl BfsContext {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            queue: VecDeque::new(),
            node_grid: Grid::new_fn(size, BfsNode::new),
            explored: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    fn emit<O: SearchObserver>(&self, observer: &mut O, current: Coord, path: Option<&[Coord]>) {
        let frontier: Vec<Coord> = self
            .queue
            .iter()
            .map(|&index| self.node_grid.get_index_checked(index).coord)
            .collect();
        observer.frame(SearchFrame {
            algorithm: "BFS",
            current,
            frontier: &frontier,
            explored: &self.explored,
            path,
        });
    }

    pub fn bfs<G, O>(
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
        self.queue.clear();
        self.explored.clear();

        if start == target {
            path.clear();
            path.push(start);
            self.emit(observer, start, Some(path.as_slice()));
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
        self.queue.push_back(start_index);

        let mut num_nodes_visited = 0;
        let mut last = start;

        while let Some(index) = self.queue.pop_front() {
            let current_coord = self.node_grid.get_index_checked(index).coord;

            if current_coord == target {
                path::make_path(&self.node_grid, index, path);
                self.emit(observer, current_coord, Some(path.as_slice()));
                return Ok(SearchMetadata {
                    num_nodes_visited,
                    cost: path.len() - 1,
                    length: path.len() - 1,
                });
            }

            {
                let node = self.node_grid.get_index_checked_mut(index);
                if node.visited == self.seq {
                    continue;
                }
                node.visited = self.seq;
            }
            self.explored.push(current_coord);
            num_nodes_visited += 1;
            last = current_coord;

            for direction in MOVE_ORDER {
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
                    self.queue.push_back(index);
                }
            }

            self.emit(observer, current_coord, None);
        }

        self.emit(observer, last, None);
        Err(Error::NoPath)
    }
}
