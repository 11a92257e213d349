//! Error types for Naksha

use std::path::PathBuf;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Naksha error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error (folder scan, file create)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bitmap could not be decoded or encoded
    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// Map metadata file is not a valid ROS map description
    #[error("Malformed map metadata {}: {reason}", path.display())]
    Metadata {
        /// Metadata file that failed to parse
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a metadata error for the given file
    pub fn metadata(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Metadata {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_error_message() {
        let err = Error::metadata("/maps/lab/map.yaml", "missing field `resolution`");
        let msg = err.to_string();
        assert!(msg.contains("/maps/lab/map.yaml"));
        assert!(msg.contains("missing field `resolution`"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
