//! In-memory occupancy bitmap.
//!
//! Wraps an 8-bit grayscale buffer together with the codec format it was
//! decoded from, so that saving writes the same kind of file that was loaded.
//! PGM output is always binary `P5` with maxval 255, which is what ROS
//! `map_server` and `map_saver` read and write.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, GrayImage, ImageEncoder, ImageFormat, ImageReader, Luma};

use crate::core::GridCoord;
use crate::error::Result;

/// Grayscale occupancy bitmap with its source format
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyImage {
    /// Pixel data, row 0 at the top
    pixels: GrayImage,
    /// Codec the pixels were decoded from
    format: ImageFormat,
}

impl OccupancyImage {
    /// Wrap existing pixels
    pub fn from_pixels(pixels: GrayImage, format: ImageFormat) -> Self {
        Self { pixels, format }
    }

    /// PGM image with every cell set to `value`
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self::from_pixels(GrayImage::from_pixel(width, height, Luma([value])), ImageFormat::Pnm)
    }

    /// Decode a bitmap file.
    ///
    /// The format is detected from the file contents, falling back to the
    /// extension. Any bit depth or color type is converted to 8-bit luma.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = ImageReader::open(path.as_ref())?.with_guessed_format()?;
        let format = reader.format();
        let pixels = reader.decode()?.into_luma8();

        Ok(Self {
            pixels,
            format: format.unwrap_or(ImageFormat::Pnm),
        })
    }

    /// Encode to `path` in the source format
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);

        match self.format {
            ImageFormat::Pnm => {
                PnmEncoder::new(&mut writer)
                    .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
                    .write_image(
                        self.pixels.as_raw(),
                        self.width(),
                        self.height(),
                        ExtendedColorType::L8,
                    )?;
            }
            format => self.pixels.write_to(&mut writer, format)?,
        }

        writer.flush()?;
        Ok(())
    }

    /// Width in cells
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in cells
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// (width, height) in cells
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Codec the image was decoded from
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Raw pixel buffer
    pub fn pixels(&self) -> &GrayImage {
        &self.pixels
    }

    /// Pixel value at `coord`, `None` outside the image
    pub fn get(&self, coord: GridCoord) -> Option<u8> {
        if coord.is_within(self.width(), self.height()) {
            Some(self.pixels.get_pixel(coord.x, coord.y).0[0])
        } else {
            None
        }
    }

    /// Set the pixel at `coord`. Returns false outside the image.
    pub fn set(&mut self, coord: GridCoord, value: u8) -> bool {
        if coord.is_within(self.width(), self.height()) {
            self.pixels.put_pixel(coord.x, coord.y, Luma([value]));
            true
        } else {
            false
        }
    }
}
