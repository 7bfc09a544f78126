use direction::Direction;
use grid_2d::{Coord, Grid};

pub(crate) trait PathNode {
    fn from_parent(&self) -> Option<Direction>;
    fn coord(&self) -> Coord;
}

/// Walks parent links from the node at `index` back to its root, then
/// reverses, leaving `path` holding root..=node.
pub(crate) fn make_path<N: PathNode>(node_grid: &Grid<N>, index: usize, path: &mut Vec<Coord>) {
    path.clear();
    let mut index = index;
    loop {
        let node = node_grid.get_index_checked(index);
        path.push(node.coord());
        if let Some(direction) = node.from_parent() {
            let parent_coord = node.coord() - direction.coord();
            index = node_grid
                .index_of_coord(parent_coord)
                .expect("parent link outside node grid");
        } else {
            path.reverse();
            return;
        }
    }
}

/// Appends the strict ancestors of the node at `index` in walk order
/// (node's parent first, root last). Used to stitch the backward half
/// of a bidirectional path onto the forward half without duplicating
/// the meeting node.
pub(crate) fn append_ancestors<N: PathNode>(
    node_grid: &Grid<N>,
    index: usize,
    path: &mut Vec<Coord>,
) {
    let mut index = index;
    while let Some(direction) = node_grid.get_index_checked(index).from_parent() {
        let parent_coord = node_grid.get_index_checked(index).coord() - direction.coord();
        index = node_grid
            .index_of_coord(parent_coord)
            .expect("parent link outside node grid");
        path.push(parent_coord);
    }
}
