//! Slot identity and coordinate projection

/// Reading direction of a slot within the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Across,
    /// Top to bottom along a column
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A maximal run of fillable cells requiring exactly one word
///
/// Slots are the variables of the CSP. Two slots are distinct if any
/// field differs; all fields are fixed once the grid is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Row of the first cell
    pub row: usize,
    /// Column of the first cell
    pub col: usize,
    /// Reading direction
    pub direction: Direction,
    /// Number of cells, equal to the required word length
    pub length: usize,
}

impl Slot {
    /// Grid coordinates of the cell holding the character at `offset`
    ///
    /// Offset 0 is the slot's starting cell; offsets are not bounds-checked
    /// against `length` since overlap indices are derived from cell geometry.
    pub const fn cell(&self, offset: usize) -> [usize; 2] {
        match self.direction {
            Direction::Across => [self.row, self.col + offset],
            Direction::Down => [self.row + offset, self.col],
        }
    }
}
