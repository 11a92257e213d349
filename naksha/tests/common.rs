//! Test utilities for Naksha integration tests.
//!
//! Builds map folders (PGM + YAML) in temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use naksha::OccupancyImage;
use tempfile::TempDir;

/// Standard ROS map YAML for `image`
pub fn ros_yaml(image: &str) -> String {
    format!(
        "image: {}\nresolution: 0.050000\norigin: [-10.000000, -10.000000, 0.000000]\nnegate: 0\noccupied_thresh: 0.65\nfree_thresh: 0.196\n",
        image
    )
}

/// Write a binary PGM with every pixel set to `value`
pub fn write_pgm(path: &Path, width: u32, height: u32, value: u8) {
    OccupancyImage::filled(width, height, value)
        .save(path)
        .unwrap();
}

/// Write a binary PGM from a pixel function
pub fn write_pgm_with(path: &Path, width: u32, height: u32, f: impl Fn(u32, u32) -> u8) {
    let pixels = GrayImage::from_fn(width, height, |x, y| Luma([f(x, y)]));
    OccupancyImage::from_pixels(pixels, image::ImageFormat::Pnm)
        .save(path)
        .unwrap();
}

/// Temporary map folder containing `map.yaml` + `map.pgm`
pub fn map_folder(width: u32, height: u32, value: u8) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_pgm(&dir.path().join("map.pgm"), width, height, value);
    fs::write(dir.path().join("map.yaml"), ros_yaml("map.pgm")).unwrap();
    dir
}

/// Path of the bitmap in a folder made by [`map_folder`]
pub fn pgm_path(dir: &TempDir) -> PathBuf {
    dir.path().join("map.pgm")
}

/// Decode the pixels of a PGM file
pub fn read_pixels(path: &Path) -> GrayImage {
    OccupancyImage::open(path).unwrap().pixels().clone()
}
