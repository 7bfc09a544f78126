use direction::Direction;

/// Candidate moves in tie-break order: up, right, down, down-right,
/// left, up-left. Every algorithm expands neighbours in this order
/// (the depth-first family pushes in reverse so that stack pops come
/// out in this order).
pub const MOVE_ORDER: [Direction; 6] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::SouthEast,
    Direction::West,
    Direction::NorthWest,
];
