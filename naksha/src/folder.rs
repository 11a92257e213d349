//! Map folder discovery.
//!
//! A map folder holds one metadata file and one bitmap. When a folder holds
//! several candidates of a kind, entries are ordered by file name and the
//! last one wins, so the choice does not depend on directory listing order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FilesSection;
use crate::error::Result;

/// Metadata/bitmap pair found in a map folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFolder {
    /// Folder that was scanned
    pub dir: PathBuf,
    /// Selected metadata file
    pub metadata_path: PathBuf,
    /// Selected bitmap file
    pub image_path: PathBuf,
}

impl MapFolder {
    /// Scan `dir` for a metadata/bitmap pair.
    ///
    /// Returns `Ok(None)` when either file is missing. Subdirectories are
    /// not searched.
    pub fn scan<P: AsRef<Path>>(dir: P, files: &FilesSection) -> Result<Option<Self>> {
        let dir = dir.as_ref();

        let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut metadata_path = None;
        let mut image_path = None;

        for path in entries {
            if has_extension(&path, &files.metadata_extensions) {
                metadata_path = Some(path);
            } else if has_extension(&path, &files.image_extensions) {
                image_path = Some(path);
            }
        }

        match (metadata_path, image_path) {
            (Some(metadata_path), Some(image_path)) => Ok(Some(Self {
                dir: dir.to_path_buf(),
                metadata_path,
                image_path,
            })),
            (metadata, image) => {
                log::warn!(
                    "No map in {}: metadata {}, image {}",
                    dir.display(),
                    if metadata.is_some() { "found" } else { "missing" },
                    if image.is_some() { "found" } else { "missing" },
                );
                Ok(None)
            }
        }
    }
}

/// Case-insensitive extension check
fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
