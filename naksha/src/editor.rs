//! Map editing session.
//!
//! [`MapEditor`] is a two-state machine:
//!
//! ```text
//!   Unloaded ──load()──▶ Loaded ──load()──▶ Loaded (fresh session)
//! ```
//!
//! While unloaded, cursor moves, toggles and undo are no-ops. A successful
//! load replaces the whole [`Session`] (image, metadata, cursor, history); a
//! load that finds no map, or fails, leaves the current session untouched.
//!
//! ## Editing
//!
//! ```rust,ignore
//! use naksha::{Command, Direction, EditorConfig, MapEditor};
//!
//! let mut editor = MapEditor::new(EditorConfig::default());
//! if editor.load("maps/lab")? {
//!     editor.apply(Command::Move(Direction::Right));
//!     editor.apply(Command::Toggle);
//!     editor.save()?;
//! }
//! ```

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::config::EditorConfig;
use crate::core::{CellState, Direction, GridCoord, toggled};
use crate::error::Result;
use crate::folder::MapFolder;
use crate::grid::OccupancyImage;
use crate::history::{UndoEntry, UndoHistory};
use crate::metadata::MapMetadata;
use crate::render::{self, Frame, ViewBounds, ViewGeometry};

/// Discrete editing command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor one cell
    Move(Direction),
    /// Toggle the cell under the cursor
    Toggle,
    /// Revert the most recent toggle
    Undo,
}

/// A loaded map and its editing state
#[derive(Debug, Clone)]
pub struct Session {
    image: OccupancyImage,
    metadata: MapMetadata,
    folder: MapFolder,
    cursor: GridCoord,
    history: UndoHistory,
    modified: bool,
}

impl Session {
    /// Open the map pair found in `folder`
    pub fn open(folder: MapFolder, undo_depth: usize) -> Result<Self> {
        let metadata = MapMetadata::load(&folder.metadata_path)?;
        let image = OccupancyImage::open(&folder.image_path)?;
        Ok(Self::new(image, metadata, folder, undo_depth))
    }

    /// Start a session on already-decoded data, cursor at the center
    pub fn new(
        image: OccupancyImage,
        metadata: MapMetadata,
        folder: MapFolder,
        undo_depth: usize,
    ) -> Self {
        let cursor = GridCoord::center(image.width(), image.height());
        Self {
            image,
            metadata,
            folder,
            cursor,
            history: UndoHistory::new(undo_depth),
            modified: false,
        }
    }

    /// Cursor cell
    pub fn cursor(&self) -> GridCoord {
        self.cursor
    }

    /// Map image
    pub fn image(&self) -> &OccupancyImage {
        &self.image
    }

    /// Map metadata (read-only)
    pub fn metadata(&self) -> &MapMetadata {
        &self.metadata
    }

    /// Files this session was loaded from
    pub fn folder(&self) -> &MapFolder {
        &self.folder
    }

    /// Undo history
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Edited since load or last save?
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Pixel value under the cursor
    pub fn cursor_value(&self) -> u8 {
        // The cursor is clamped to the image on every move
        self.image.get(self.cursor).unwrap_or_default()
    }

    /// Metadata reading of the pixel under the cursor
    pub fn cursor_state(&self) -> CellState {
        self.metadata.classify(self.cursor_value())
    }

    /// World coordinates (meters) of the cursor cell center
    pub fn cursor_world(&self) -> (f32, f32) {
        self.metadata.cell_to_world(self.cursor, self.image.height())
    }

    fn move_cursor(&mut self, direction: Direction) -> bool {
        let (width, height) = self.image.dimensions();
        let next = self.cursor.step(direction, width, height);
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    fn toggle(&mut self) -> UndoEntry {
        let previous = self.cursor_value();
        let entry = UndoEntry {
            coord: self.cursor,
            previous,
        };
        self.history.push(entry);
        self.image.set(self.cursor, toggled(previous));
        self.modified = true;

        log::debug!(
            "Toggled {}: {} -> {}",
            self.cursor,
            previous,
            toggled(previous)
        );
        entry
    }

    fn undo(&mut self) -> Option<UndoEntry> {
        let entry = self.history.pop()?;
        self.image.set(entry.coord, entry.previous);
        self.modified = true;

        log::debug!("Undo {}: restored {}", entry.coord, entry.previous);
        Some(entry)
    }
}

/// Editor state machine: unloaded, or one loaded [`Session`]
#[derive(Debug, Clone, Default)]
pub struct MapEditor {
    config: EditorConfig,
    session: Option<Session>,
}

impl MapEditor {
    /// Create an unloaded editor
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Editor configuration
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current session, `None` while unloaded
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Is a map loaded?
    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    /// Cursor cell, `None` while unloaded
    pub fn cursor(&self) -> Option<GridCoord> {
        self.session.as_ref().map(Session::cursor)
    }

    /// Load the map in `dir`.
    ///
    /// Returns `Ok(false)` and keeps the current session when the folder
    /// lacks a metadata or bitmap file. Malformed metadata and undecodable
    /// images are errors, also leaving the current session in place.
    pub fn load<P: AsRef<Path>>(&mut self, dir: P) -> Result<bool> {
        let Some(folder) = MapFolder::scan(dir, &self.config.files)? else {
            return Ok(false);
        };

        let session = Session::open(folder, self.config.editor.undo_depth)?;
        let (width, height) = session.image.dimensions();
        log::info!(
            "Loaded map {} ({}x{} @ {}m, origin {:?})",
            session.folder.image_path.display(),
            width,
            height,
            session.metadata.resolution,
            session.metadata.origin
        );

        self.session = Some(session);
        Ok(true)
    }

    /// Move the cursor one cell, clamped to the map. Returns true if it moved.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.move_cursor(direction))
    }

    /// Toggle the cell under the cursor (white to black, anything else to white)
    pub fn toggle_pixel(&mut self) -> Option<UndoEntry> {
        self.session.as_mut().map(Session::toggle)
    }

    /// Revert the most recent toggle. The cursor stays where it is.
    pub fn undo(&mut self) -> Option<UndoEntry> {
        self.session.as_mut().and_then(Session::undo)
    }

    /// Run a command. Returns true if the view needs redrawing.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Move(direction) => self.move_cursor(direction),
            Command::Toggle => self.toggle_pixel().is_some(),
            Command::Undo => self.undo().is_some(),
        }
    }

    /// Placement of the map and cursor within `bounds`
    pub fn view_geometry(&self, bounds: ViewBounds) -> Option<ViewGeometry> {
        let session = self.session.as_ref()?;
        let (width, height) = session.image.dimensions();
        ViewGeometry::fit(width, height, session.cursor, bounds)
    }

    /// Scaled map with cursor overlay, `None` while unloaded or for empty bounds
    pub fn render(&self, bounds: ViewBounds) -> Option<Frame> {
        let geometry = self.view_geometry(bounds)?;
        let session = self.session.as_ref()?;
        Some(render::compose(session.image.pixels(), geometry, &self.config.view))
    }

    /// Write the map back to the file it was loaded from.
    ///
    /// Returns the path written, `None` while unloaded. Metadata is not written.
    pub fn save(&mut self) -> Result<Option<PathBuf>> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };

        let path = session.folder.image_path.clone();
        session.image.save(&path)?;
        session.modified = false;

        log::info!("Saved map to {}", path.display());
        Ok(Some(path))
    }

    /// Write the map to `path` in the format it was loaded in.
    ///
    /// Later [`save`](Self::save) calls still target the original file.
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        let Some(session) = self.session.as_ref() else {
            return Ok(false);
        };

        let path = path.as_ref();
        session.image.save(path)?;

        log::info!(
            "Saved map copy to {} ({:?})",
            path.display(),
            session.image.format()
        );
        Ok(true)
    }

    /// Codec format of the loaded image
    pub fn image_format(&self) -> Option<ImageFormat> {
        self.session.as_ref().map(|session| session.image.format())
    }
}
