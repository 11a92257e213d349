//! # Naksha
//!
//! Interactive editor for 2D occupancy grid maps in the ROS `map_server`
//! layout: a grayscale PGM bitmap paired with a YAML metadata file.
//!
//! ## Overview
//!
//! A map folder is loaded into a [`MapEditor`] session. A single-cell cursor
//! is moved with [`Direction`] steps (clamped to the map), the cell under it
//! is toggled between free (white) and occupied (black), and toggles can be
//! undone. The edited bitmap is written back in the format it was read in.
//! The YAML file is read for display only and never rewritten.
//!
//! ## Features
//!
//! - `gui` (default): eframe desktop front end and the `naksha` binary
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use naksha::{Command, Direction, EditorConfig, MapEditor, ViewBounds};
//!
//! let mut editor = MapEditor::new(EditorConfig::default());
//! editor.load("maps/lab")?;
//!
//! editor.apply(Command::Move(Direction::Left));
//! editor.apply(Command::Toggle);
//!
//! let frame = editor.render(ViewBounds::new(1024, 768));
//! editor.save()?;
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod editor;
pub mod error;
pub mod folder;
pub mod grid;
pub mod history;
pub mod metadata;
pub mod render;

#[cfg(feature = "gui")]
pub mod app;

// Re-export commonly used types
pub use config::EditorConfig;
pub use core::{CellState, Direction, GridCoord};
pub use editor::{Command, MapEditor, Session};
pub use error::{Error, Result};
pub use folder::MapFolder;
pub use grid::OccupancyImage;
pub use history::{UndoEntry, UndoHistory};
pub use metadata::MapMetadata;
pub use render::{Frame, ViewBounds, ViewGeometry};
