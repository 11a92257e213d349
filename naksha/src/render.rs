//! View computation for the map display.
//!
//! The map is scaled uniformly to fit the display area,
//! `scale = min(display_w / map_w, display_h / map_h)`, and the cursor cell
//! is outlined at its scaled position. Scaling is nearest-neighbour so that a
//! single edited cell stays a crisp block on screen.
//!
//! Everything here is a pure function of the grid, cursor and bounds.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Rgba, RgbaImage};

use crate::config::ViewSection;
use crate::core::GridCoord;

/// Display area available for the map, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewBounds {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ViewBounds {
    /// Create bounds
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Square outline drawn around the cursor cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightRect {
    /// Left edge in frame pixels
    pub x: u32,
    /// Top edge in frame pixels
    pub y: u32,
    /// Side length in frame pixels (at least 1)
    pub size: u32,
}

/// Placement of the scaled map and cursor inside the display area
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewGeometry {
    /// Screen pixels per map cell
    pub scale: f32,
    /// Scaled map width in pixels
    pub width: u32,
    /// Scaled map height in pixels
    pub height: u32,
    /// Cursor outline
    pub cursor: HighlightRect,
}

impl ViewGeometry {
    /// Fit a `map_width` x `map_height` grid into `bounds`.
    ///
    /// Returns `None` when either the map or the bounds are empty.
    ///
    /// At non-integer scales the outline sits at `floor(x * scale)` with side
    /// `floor(scale)`, while nearest-neighbour resizing samples cell centers,
    /// so a scaled cell can be one pixel wider than its outline.
    pub fn fit(
        map_width: u32,
        map_height: u32,
        cursor: GridCoord,
        bounds: ViewBounds,
    ) -> Option<Self> {
        if map_width == 0 || map_height == 0 || bounds.width == 0 || bounds.height == 0 {
            return None;
        }

        let scale = (bounds.width as f32 / map_width as f32)
            .min(bounds.height as f32 / map_height as f32);

        let width = ((map_width as f32 * scale).round() as u32).clamp(1, bounds.width);
        let height = ((map_height as f32 * scale).round() as u32).clamp(1, bounds.height);

        let size = (scale.floor() as u32).clamp(1, width.min(height));
        let x = ((cursor.x as f32 * scale).floor() as u32).min(width - size);
        let y = ((cursor.y as f32 * scale).floor() as u32).min(height - size);

        Some(Self {
            scale,
            width,
            height,
            cursor: HighlightRect { x, y, size },
        })
    }
}

/// Scaled map with the cursor overlay, ready for display
#[derive(Clone, Debug)]
pub struct Frame {
    /// Where things landed
    pub geometry: ViewGeometry,
    /// RGBA pixels, `geometry.width` x `geometry.height`
    pub image: RgbaImage,
}

/// Scale `pixels` to `geometry` and outline the cursor cell
pub fn compose(pixels: &GrayImage, geometry: ViewGeometry, style: &ViewSection) -> Frame {
    let scaled = imageops::resize(pixels, geometry.width, geometry.height, FilterType::Nearest);
    let mut image = DynamicImage::ImageLuma8(scaled).into_rgba8();

    let [r, g, b] = style.accent;
    draw_outline(&mut image, geometry.cursor, style.cursor_stroke.max(1), Rgba([r, g, b, 255]));

    Frame { geometry, image }
}

/// Draw a square border `stroke` pixels thick, clipped to the image
fn draw_outline(image: &mut RgbaImage, rect: HighlightRect, stroke: u32, color: Rgba<u8>) {
    let x_end = (rect.x + rect.size).min(image.width());
    let y_end = (rect.y + rect.size).min(image.height());

    for py in rect.y..y_end {
        for px in rect.x..x_end {
            let dx = (px - rect.x).min(rect.x + rect.size - 1 - px);
            let dy = (py - rect.y).min(rect.y + rect.size - 1 - py);
            if dx < stroke || dy < stroke {
                image.put_pixel(px, py, color);
            }
        }
    }
}
