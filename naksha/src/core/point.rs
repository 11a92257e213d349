//! Cell coordinates and cursor movement.

/// Grid coordinates (pixel column/row, row 0 at the top of the image)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: u32,
    /// Y coordinate (row index)
    pub y: u32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Center cell of a `width` x `height` grid (integer division)
    #[inline]
    pub fn center(width: u32, height: u32) -> Self {
        Self::new(width / 2, height / 2)
    }

    /// Is this coordinate inside a `width` x `height` grid?
    #[inline]
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.x < width && self.y < height
    }

    /// Move one cell in `direction`, clamped to `[0, width-1] x [0, height-1]`.
    ///
    /// Steps past an edge stay on the edge cell.
    pub fn step(self, direction: Direction, width: u32, height: u32) -> Self {
        let max_x = width.saturating_sub(1);
        let max_y = height.saturating_sub(1);
        match direction {
            Direction::Left => Self::new(self.x.saturating_sub(1).min(max_x), self.y.min(max_y)),
            Direction::Right => Self::new(self.x.saturating_add(1).min(max_x), self.y.min(max_y)),
            Direction::Up => Self::new(self.x.min(max_x), self.y.saturating_sub(1).min(max_y)),
            Direction::Down => Self::new(self.x.min(max_x), self.y.saturating_add(1).min(max_y)),
        }
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cursor movement direction (screen space: Up decreases the row)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One column left
    Left,
    /// One column right
    Right,
    /// One row up
    Up,
    /// One row down
    Down,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}
