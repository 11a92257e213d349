//! Cell values for grayscale occupancy maps.
//!
//! Maps follow the ROS `map_server` picture convention: white pixels are free
//! space, black pixels are obstacles, and intermediate grays (typically 205)
//! are unknown.

/// Pixel value of a free cell
pub const FREE: u8 = 255;

/// Pixel value of an occupied cell
pub const OCCUPIED: u8 = 0;

/// Pixel value written by ROS map_saver for unknown cells
pub const UNKNOWN: u8 = 205;

/// Value a cell takes when toggled.
///
/// Only pure white flips to black. Every other value, including unknown gray,
/// becomes white. This is not a two-color complement: toggling an unknown
/// cell twice ends up black, not unknown.
#[inline]
pub fn toggled(value: u8) -> u8 {
    if value == FREE { OCCUPIED } else { FREE }
}

/// Occupancy interpretation of a pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Traversable space
    Free,
    /// Obstacle
    Occupied,
    /// Between the free and occupied thresholds
    Unknown,
}

impl CellState {
    /// Short label for the status bar
    pub fn label(self) -> &'static str {
        match self {
            CellState::Free => "free",
            CellState::Occupied => "occupied",
            CellState::Unknown => "unknown",
        }
    }
}
