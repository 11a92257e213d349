//! Map metadata in ROS-standard YAML format.
//!
//! Only `resolution` and `origin` are required; their values are taken as
//! given. Missing origin components read as 0. The remaining ROS
//! `map_server` fields are read when present so the status bar can interpret
//! pixels the way the navigation stack would. Metadata is never written back:
//! saving a map touches the image file only.
//!
//! ```yaml
//! image: lab.pgm
//! resolution: 0.05
//! origin: [-10.0, -10.0, 0.0]
//! negate: 0
//! occupied_thresh: 0.65
//! free_thresh: 0.196
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::core::{CellState, GridCoord};
use crate::error::{Error, Result};

/// Default occupied threshold (ROS map_server)
const DEFAULT_OCCUPIED_THRESH: f32 = 0.65;

/// Default free threshold (ROS map_server)
const DEFAULT_FREE_THRESH: f32 = 0.196;

/// Map metadata from YAML file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapMetadata {
    /// Image filename (relative to YAML file)
    #[serde(default)]
    pub image: Option<String>,

    /// Map resolution in meters per pixel
    pub resolution: f32,

    /// Origin of map [x, y, yaw] - world coordinates of bottom-left pixel.
    /// Not length-checked; see [`origin_xy`](Self::origin_xy).
    pub origin: Vec<f32>,

    /// Non-zero inverts the white=free / black=occupied reading
    #[serde(default)]
    pub negate: i32,

    /// Occupancy probability above which a cell is occupied (0.0-1.0)
    #[serde(default = "default_occupied_thresh")]
    pub occupied_thresh: f32,

    /// Occupancy probability below which a cell is free (0.0-1.0)
    #[serde(default = "default_free_thresh")]
    pub free_thresh: f32,

    /// Interpretation mode (trinary, scale, raw)
    #[serde(default)]
    pub mode: Option<String>,
}

fn default_occupied_thresh() -> f32 {
    DEFAULT_OCCUPIED_THRESH
}

fn default_free_thresh() -> f32 {
    DEFAULT_FREE_THRESH
}

impl MapMetadata {
    /// Load metadata from a YAML file.
    ///
    /// A file that is not a mapping, or lacks `resolution`/`origin`, is an
    /// [`Error::Metadata`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|reason| Error::metadata(path, reason))
    }

    /// Parse metadata from a YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Origin (x, y) in world coordinates, 0 for any missing component
    pub fn origin_xy(&self) -> (f32, f32) {
        let component = |i: usize| self.origin.get(i).copied().unwrap_or(0.0);
        (component(0), component(1))
    }

    /// Origin yaw in radians (0 when omitted)
    pub fn origin_yaw(&self) -> f32 {
        self.origin.get(2).copied().unwrap_or(0.0)
    }

    /// Convert a cell to world coordinates of its center.
    ///
    /// Image row 0 is the top of the map; `origin` is the bottom-left pixel.
    pub fn cell_to_world(&self, coord: GridCoord, height: u32) -> (f32, f32) {
        let (ox, oy) = self.origin_xy();
        let x = ox + (coord.x as f32 + 0.5) * self.resolution;
        let y = oy + (height as f32 - 1.0 - coord.y as f32 + 0.5) * self.resolution;
        (x, y)
    }

    /// Interpret a pixel with the ROS trinary thresholds
    pub fn classify(&self, pixel: u8) -> CellState {
        let p = if self.negate == 0 {
            (255 - pixel) as f32 / 255.0
        } else {
            pixel as f32 / 255.0
        };

        if p > self.occupied_thresh {
            CellState::Occupied
        } else if p < self.free_thresh {
            CellState::Free
        } else {
            CellState::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::{FREE, OCCUPIED, UNKNOWN};
    use approx::assert_relative_eq;

    const ROS_YAML: &str = r#"
image: lab.pgm
resolution: 0.050000
origin: [-10.000000, -5.000000, 0.000000]
negate: 0
occupied_thresh: 0.65
free_thresh: 0.196
"#;

    #[test]
    fn test_parse_ros_yaml() {
        let meta = MapMetadata::from_yaml(ROS_YAML).unwrap();
        assert_eq!(meta.image.as_deref(), Some("lab.pgm"));
        assert_relative_eq!(meta.resolution, 0.05);
        assert_eq!(meta.origin_xy(), (-10.0, -5.0));
        assert_eq!(meta.origin_yaw(), 0.0);
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let meta = MapMetadata::from_yaml("resolution: 1\norigin: [0, 0]\n").unwrap();
        assert_eq!(meta.image, None);
        assert_eq!(meta.negate, 0);
        assert_relative_eq!(meta.occupied_thresh, 0.65);
        assert_relative_eq!(meta.free_thresh, 0.196);
    }

    #[test]
    fn test_missing_resolution_is_rejected() {
        let err = MapMetadata::from_yaml("origin: [0, 0, 0]\n").unwrap_err();
        assert!(err.contains("resolution"), "{}", err);
    }

    #[test]
    fn test_missing_origin_is_rejected() {
        let err = MapMetadata::from_yaml("resolution: 0.05\n").unwrap_err();
        assert!(err.contains("origin"), "{}", err);
    }

    #[test]
    fn test_short_origin_is_accepted() {
        let meta = MapMetadata::from_yaml("resolution: 0.05\norigin: [1.5]\n").unwrap();
        assert_eq!(meta.origin_xy(), (1.5, 0.0));
        assert_eq!(meta.origin_yaw(), 0.0);

        let meta = MapMetadata::from_yaml("resolution: 0.05\norigin: []\n").unwrap();
        assert_eq!(meta.origin_xy(), (0.0, 0.0));
        let (x, y) = meta.cell_to_world(GridCoord::new(0, 0), 1);
        assert_relative_eq!(x, 0.025);
        assert_relative_eq!(y, 0.025);
    }

    #[test]
    fn test_non_mapping_is_rejected() {
        assert!(MapMetadata::from_yaml("- just\n- a list\n").is_err());
    }

    #[test]
    fn test_classify_trinary() {
        let meta = MapMetadata::from_yaml(ROS_YAML).unwrap();
        assert_eq!(meta.classify(FREE), CellState::Free);
        assert_eq!(meta.classify(OCCUPIED), CellState::Occupied);
        assert_eq!(meta.classify(UNKNOWN), CellState::Unknown);
    }

    #[test]
    fn test_classify_negated() {
        let mut meta = MapMetadata::from_yaml(ROS_YAML).unwrap();
        meta.negate = 1;
        assert_eq!(meta.classify(FREE), CellState::Occupied);
        assert_eq!(meta.classify(OCCUPIED), CellState::Free);
    }

    #[test]
    fn test_cell_to_world() {
        // 200 rows at 0.05m, origin (-10, -5)
        let meta = MapMetadata::from_yaml(ROS_YAML).unwrap();

        // Bottom-left pixel center
        let (x, y) = meta.cell_to_world(GridCoord::new(0, 199), 200);
        assert_relative_eq!(x, -9.975, epsilon = 1e-4);
        assert_relative_eq!(y, -4.975, epsilon = 1e-4);

        // Top-left pixel is 199 rows above
        let (_, y_top) = meta.cell_to_world(GridCoord::new(0, 0), 200);
        assert_relative_eq!(y_top, -4.975 + 199.0 * 0.05, epsilon = 1e-3);
    }
}
