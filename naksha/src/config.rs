//! Configuration for the Naksha editor
//!
//! Loaded from a TOML file. Every field has a default, so the file, and any
//! section in it, may be omitted.
//!
//! ```toml
//! [editor]
//! undo_depth = 0           # 0 = unbounded
//!
//! [files]
//! metadata_extensions = ["yaml", "yml"]
//! image_extensions = ["pgm"]
//!
//! [view]
//! accent = [255, 0, 0]     # cursor highlight color
//! cursor_stroke = 1        # border width in screen pixels
//!
//! [window]
//! width = 1280.0
//! height = 800.0
//! maximized = true
//!
//! [logging]
//! level = "info"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_PATH: &str = "naksha.toml";

/// Top-level editor configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditorConfig {
    /// Editing behaviour
    #[serde(default)]
    pub editor: EditorSection,
    /// Map folder discovery
    #[serde(default)]
    pub files: FilesSection,
    /// Rendering
    #[serde(default)]
    pub view: ViewSection,
    /// Initial window geometry
    #[serde(default)]
    pub window: WindowSection,
    /// Logging
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Editing behaviour
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditorSection {
    /// Maximum number of undo entries kept (0 = unbounded)
    #[serde(default = "default_undo_depth")]
    pub undo_depth: usize,
}

fn default_undo_depth() -> usize {
    0
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            undo_depth: default_undo_depth(),
        }
    }
}

/// Which files in a map folder are recognised
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilesSection {
    /// Extensions of the metadata file (case-insensitive, no dot)
    #[serde(default = "default_metadata_extensions")]
    pub metadata_extensions: Vec<String>,
    /// Extensions of the bitmap file (case-insensitive, no dot)
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,
}

fn default_metadata_extensions() -> Vec<String> {
    vec!["yaml".to_string(), "yml".to_string()]
}

fn default_image_extensions() -> Vec<String> {
    vec!["pgm".to_string()]
}

impl Default for FilesSection {
    fn default() -> Self {
        Self {
            metadata_extensions: default_metadata_extensions(),
            image_extensions: default_image_extensions(),
        }
    }
}

/// Rendering of the map view
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewSection {
    /// Cursor highlight color (RGB)
    #[serde(default = "default_accent")]
    pub accent: [u8; 3],
    /// Cursor border width in screen pixels
    #[serde(default = "default_cursor_stroke")]
    pub cursor_stroke: u32,
}

fn default_accent() -> [u8; 3] {
    [255, 0, 0]
}

fn default_cursor_stroke() -> u32 {
    1
}

impl Default for ViewSection {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            cursor_stroke: default_cursor_stroke(),
        }
    }
}

/// Initial window geometry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowSection {
    /// Window width in points
    #[serde(default = "default_window_width")]
    pub width: f32,
    /// Window height in points
    #[serde(default = "default_window_height")]
    pub height: f32,
    /// Start maximized
    #[serde(default = "default_maximized")]
    pub maximized: bool,
}

fn default_window_width() -> f32 {
    1280.0
}

fn default_window_height() -> f32 {
    800.0
}

fn default_maximized() -> bool {
    true
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            maximized: default_maximized(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingSection {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl EditorConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_PATH`] if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.editor.undo_depth, 0);
        assert_eq!(config.files.metadata_extensions, vec!["yaml", "yml"]);
        assert_eq!(config.files.image_extensions, vec!["pgm"]);
        assert_eq!(config.view.accent, [255, 0, 0]);
        assert_eq!(config.view.cursor_stroke, 1);
        assert!(config.window.maximized);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = EditorConfig::from_toml("").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let toml_content = r#"
[editor]
undo_depth = 16

[view]
accent = [0, 255, 0]

[logging]
level = "debug"
"#;
        let config = EditorConfig::from_toml(toml_content).unwrap();
        assert_eq!(config.editor.undo_depth, 16);
        assert_eq!(config.view.accent, [0, 255, 0]);
        assert_eq!(config.view.cursor_stroke, 1);
        assert_eq!(config.files, FilesSection::default());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_toml() {
        let err = EditorConfig::from_toml("[editor]\nundo_depth = \"lots\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("naksha.toml");
        let contents = "[editor]\nundo_depth = 64\n\n[files]\nimage_extensions = [\"pgm\", \"png\"]\n";
        fs::write(&path, contents).unwrap();

        let config = EditorConfig::from_file(&path).unwrap();
        assert_eq!(config.editor.undo_depth, 64);
        assert_eq!(config.files.image_extensions, vec!["pgm", "png"]);
        assert_eq!(config.files.metadata_extensions, vec!["yaml", "yml"]);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../naksha.toml");
        let config = EditorConfig::from_file(path).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            EditorConfig::load_or_default(Some(&missing)),
            Err(Error::Io(_))
        ));
    }
}
