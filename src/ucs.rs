use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::Add;

use direction::Direction;
use grid_2d::{Coord, Grid, Size};
use num_traits::{One, Zero};

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
struct UcsNode<Cost> {
    seen: u64,
    visited: u64,
    coord: Coord,
    from_parent: Option<Direction>,
    cost: Cost,
}

impl<Cost: Zero> UcsNode<Cost> {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            visited: 0,
            coord,
            from_parent: None,
            cost: Zero::zero(),
        }
    }
}

impl<Cost> PathNode for UcsNode<Cost> {
    fn from_parent(&self) -> Option<Direction> {
        self.from_parent
    }
    fn coord(&self) -> Coord {
        self.coord
    }
}

/// Heap entry ordered by reversed cost, turning [`BinaryHeap`] into a
/// min-priority queue. Stale entries for a position may coexist; the
/// first pop of a position is its cheapest and later pops are skipped
/// via the visited stamp.
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone)]
pub(crate) struct PriorityEntry<Cost: PartialOrd> {
    pub(crate) index: usize,
    pub(crate) cost: Cost,
}

impl<Cost: PartialOrd> PartialEq for PriorityEntry<Cost> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<Cost: PartialOrd> Eq for PriorityEntry<Cost> {}

impl<Cost: PartialOrd> PartialOrd for PriorityEntry<Cost> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.cost.partial_cmp(&self.cost)
    }
}

impl<Cost: PartialOrd> Ord for PriorityEntry<Cost> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone)]
pub struct UniformCostContext<Cost: PartialOrd> {
    seq: u64,
    heap: BinaryHeap<PriorityEntry<Cost>>,
    node_grid: Grid<UcsNode<Cost>>,
    explored: Vec<Coord>,
}

impl<Cost> UniformCostContext<Cost>
where
    Cost: Copy + Add<Cost> + PartialOrd + Zero + One,
{
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            heap: BinaryHeap::new(),
            node_grid: Grid::new_fn(size, UcsNode::new),
            explored: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    fn emit<O: SearchObserver>(&self, observer: &mut O, current: Coord, path: Option<&[Coord]>) {
        let frontier: Vec<Coord> = self
            .heap
            .iter()
            .map(|entry| self.node_grid.get_index_checked(entry.index).coord)
            .collect();
        observer.frame(SearchFrame {
            algorithm: "UCS",
            current,
            frontier: &frontier,
            explored: &self.explored,
            path,
        });
    }

    pub fn uniform_cost<G, O>(
        &mut self,
        grid: &G,
        start: Coord,
        target: Coord,
        config: SearchConfig,
        observer: &mut O,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<Cost>, Error>
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
        self.heap.clear();
        self.explored.clear();

        if start == target {
            path.clear();
            path.push(start);
            self.emit(observer, start, Some(path.as_slice()));
            return Ok(SearchMetadata {
                num_nodes_visited: 0,
                cost: Zero::zero(),
                length: 0,
            });
        }

        {
            let node = self.node_grid.get_index_checked_mut(start_index);
            node.seen = self.seq;
            node.from_parent = None;
            node.cost = Zero::zero();
        }
        self.heap.push(PriorityEntry {
            index: start_index,
            cost: Zero::zero(),
        });

        let mut num_nodes_visited = 0;
        let mut last = start;

        while let Some(entry) = self.heap.pop() {
            let (current_coord, current_cost) = {
                let node = self.node_grid.get_index_checked(entry.index);
                (node.coord, node.cost)
            };

            if current_coord == target {
                path::make_path(&self.node_grid, entry.index, path);
                self.emit(observer, current_coord, Some(path.as_slice()));
                return Ok(SearchMetadata {
                    num_nodes_visited,
                    cost: current_cost,
                    length: path.len() - 1,
                });
            }

            {
                let node = self.node_grid.get_index_checked_mut(entry.index);
                if node.visited == self.seq {
                    // Stale entry superseded by a cheaper path.
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

                let next_cost = current_cost + One::one();

                let node = self.node_grid.get_index_checked_mut(index);
                if node.seen != self.seq || next_cost < node.cost {
                    node.seen = self.seq;
                    node.from_parent = Some(direction);
                    node.cost = next_cost;
                    self.heap.push(PriorityEntry {
                        index,
                        cost: next_cost,
                    });
                }
            }

            self.emit(observer, current_coord, None);
        }

        self.emit(observer, last, None);
        Err(Error::NoPath)
    }
}
