/// `length` counts moves, so a single-cell path has length 0. For the
/// unit-cost algorithms `cost` equals `length`.
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMetadata<C> {
    pub num_nodes_visited: usize,
    pub cost: C,
    pub length: usize,
}
