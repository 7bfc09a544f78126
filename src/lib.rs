mod bfs;
mod bidirectional;
mod config;
mod dfs;
mod error;
mod grid;
mod metadata;
mod moves;
mod observer;
mod path;
mod ucs;

pub use bfs::*;
pub use bidirectional::*;
pub use config::*;
pub use dfs::*;
pub use error::*;
pub use grid::*;
pub use metadata::*;
pub use moves::*;
pub use observer::*;
pub use ucs::*;

pub use direction::Direction;
pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;
