//! Core value types shared by the editor.
//!
//! - [`GridCoord`]: pixel column/row of a cell, row 0 at the top
//! - [`Direction`]: one-cell cursor step
//! - [`CellState`]: free/occupied/unknown reading of a pixel
//!
//! The [`cell`] module holds the pixel constants and the toggle rule.

pub mod cell;
mod point;

pub use cell::{CellState, toggled};
pub use point::{Direction, GridCoord};
