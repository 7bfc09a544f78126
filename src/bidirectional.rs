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
struct BidirectionalNode {
    seen: u64,
    coord: Coord,
    from_parent: Option<Direction>,
}

impl BidirectionalNode {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            coord,
            from_parent: None,
        }
    }
}

impl PathNode for BidirectionalNode {
    fn from_parent(&self) -> Option<Direction> {
        self.from_parent
    }
    fn coord(&self) -> Coord {
        self.coord
    }
}

/// One of the two independently growing trees. Each keeps its own
/// frontier, parent links and explored list; the trees only meet
/// through the cross-tree admission check in [`Half::expand`].
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone)]
struct Half {
    seq: u64,
    queue: VecDeque<usize>,
    node_grid: Grid<BidirectionalNode>,
    explored: Vec<Coord>,
}

impl Half {
    fn new(size: Size) -> Self {
        Self {
            seq: 0,
            queue: VecDeque::new(),
            node_grid: Grid::new_fn(size, BidirectionalNode::new),
            explored: Vec::new(),
        }
    }

    fn seed(&mut self, index: usize) {
        self.seq += 1;
        self.queue.clear();
        self.explored.clear();
        let node = self.node_grid.get_index_checked_mut(index);
        node.seen = self.seq;
        node.from_parent = None;
        self.queue.push_back(index);
    }

    /// Expands one node. Returns the meeting index as soon as an
    /// admitted neighbour is already seen by the opposite tree —
    /// detection happens at admission, not at a later pop.
    fn expand<G: SolidGrid>(
        &mut self,
        other: &Half,
        grid: &G,
        index: usize,
    ) -> Result<Option<usize>, Error> {
        let current_coord = self.node_grid.get_index_checked(index).coord;
        self.explored.push(current_coord);

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

                if other.node_grid.get_index_checked(index).seen == other.seq {
                    return Ok(Some(index));
                }
            }
        }

        Ok(None)
    }
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone)]
pub struct BidirectionalContext {
    forward: Half,
    backward: Half,
}

impl BidirectionalContext {
    pub fn new(size: Size) -> Self {
        Self {
            forward: Half::new(size),
            backward: Half::new(size),
        }
    }

    pub fn size(&self) -> Size {
        self.forward.node_grid.size()
    }

    fn emit<O: SearchObserver>(&self, observer: &mut O, current: Coord, path: Option<&[Coord]>) {
        let frontier: Vec<Coord> = self
            .forward
            .queue
            .iter()
            .chain(self.backward.queue.iter())
            .map(|&index| self.forward.node_grid.get_index_checked(index).coord)
            .collect();
        let explored: Vec<Coord> = self
            .forward
            .explored
            .iter()
            .chain(self.backward.explored.iter())
            .cloned()
            .collect();
        observer.frame(SearchFrame {
            algorithm: "Bidirectional",
            current,
            frontier: &frontier,
            explored: &explored,
            path,
        });
    }

    /// Forward root→meeting node, then the backward tree's ancestor
    /// chain from the meeting node to the target, meeting node
    /// included once.
    fn stitch(&self, meet: usize, path: &mut Vec<Coord>) {
        path::make_path(&self.forward.node_grid, meet, path);
        path::append_ancestors(&self.backward.node_grid, meet, path);
    }

    pub fn bidirectional<G, O>(
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
            .forward
            .node_grid
            .index_of_coord(start)
            .ok_or(Error::VisitOutsideContext)?;

        if start == target {
            self.forward.queue.clear();
            self.forward.explored.clear();
            self.backward.queue.clear();
            self.backward.explored.clear();
            path.clear();
            path.push(start);
            self.emit(observer, start, Some(path.as_slice()));
            return Ok(SearchMetadata {
                num_nodes_visited: 0,
                cost: 0,
                length: 0,
            });
        }

        // A blocked or out-of-bounds target can never be admitted by
        // any tree, so the outcome matches the other algorithms
        // without growing a backward tree rooted inside a wall.
        if !grid.is_valid(target) {
            return Err(Error::NoPath);
        }

        let target_index = self
            .backward
            .node_grid
            .index_of_coord(target)
            .ok_or(Error::VisitOutsideContext)?;

        self.forward.seed(start_index);
        self.backward.seed(target_index);

        let mut num_nodes_visited = 0;
        let mut last = start;

        loop {
            if self.backward.queue.is_empty() {
                break;
            }
            let Some(forward_index) = self.forward.queue.pop_front() else {
                break;
            };
            num_nodes_visited += 1;
            let current_forward = self.forward.node_grid.get_index_checked(forward_index).coord;
            last = current_forward;

            if let Some(meet) = self.forward.expand(&self.backward, grid, forward_index)? {
                let meet_coord = self.forward.node_grid.get_index_checked(meet).coord;
                self.stitch(meet, path);
                self.emit(observer, meet_coord, Some(path.as_slice()));
                return Ok(SearchMetadata {
                    num_nodes_visited,
                    cost: path.len() - 1,
                    length: path.len() - 1,
                });
            }

            // Non-empty at the top of the round, and forward expansion
            // only grows the forward queue.
            let backward_index = self
                .backward
                .queue
                .pop_front()
                .expect("backward frontier drained mid-round");
            num_nodes_visited += 1;

            if let Some(meet) = self.backward.expand(&self.forward, grid, backward_index)? {
                let meet_coord = self.backward.node_grid.get_index_checked(meet).coord;
                self.stitch(meet, path);
                self.emit(observer, meet_coord, Some(path.as_slice()));
                return Ok(SearchMetadata {
                    num_nodes_visited,
                    cost: path.len() - 1,
                    length: path.len() - 1,
                });
            }

            self.emit(observer, current_forward, None);
        }

        self.emit(observer, last, None);
        Err(Error::NoPath)
    }
}
