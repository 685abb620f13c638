/// A cell position on a rectangular board, shared by the grid-based puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridLocation {
    pub row: usize,
    pub column: usize,
}

impl GridLocation {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}
