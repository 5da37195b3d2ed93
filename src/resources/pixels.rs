//! Image import: decode, scale and flatten into a pixel color grid.
//!
//! A [`PixelGrid`] is the wire form of an imported image: a flat row-major
//! list of RGBA values plus the scaled dimensions, serialized as
//! `{ "pixelColors": [{r,g,b,a}, ..], "width": w, "height": h }`. The
//! cube-grid layout consumes it one cube per non-transparent pixel.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, load_from_memory_with_format};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::BlockformError;

/// Scale applied when the caller passes nothing usable.
pub const DEFAULT_SCALE: f32 = 0.5;

/// One imported pixel, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PixelColor {
    pub fn color(self) -> Color {
        Color::new(self.r, self.g, self.b)
    }

    /// Alpha as a normalized opacity.
    pub fn opacity(self) -> f32 {
        self.a as f32 / 255.0
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// A scaled image flattened to per-pixel colors, row by row from the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelGrid {
    pub pixel_colors: Vec<PixelColor>,
    pub width: u32,
    pub height: u32,
}

impl PixelGrid {
    /// Decode encoded image bytes, scale them and flatten the pixels.
    ///
    /// `format` is an optional file format hint (e.g., "png"). If None,
    /// auto-detect. Scales outside `(0, inf)` fall back to
    /// [`DEFAULT_SCALE`].
    pub fn from_bytes(
        bytes: &[u8],
        format: Option<&str>,
        scale: f32,
    ) -> Result<Self, BlockformError> {
        let img = match format {
            None => image::load_from_memory(bytes)?,
            Some(fmt) => {
                let format = ImageFormat::from_extension(fmt)
                    .ok_or_else(|| BlockformError::UnknownFormat(fmt.to_string()))?;
                load_from_memory_with_format(bytes, format)?
            }
        };
        Ok(Self::from_image(&img, scale))
    }

    /// Read and decode an image file, detecting the format from content.
    pub fn from_path<P: AsRef<Path>>(path: P, scale: f32) -> Result<Self, BlockformError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes, None, scale)
    }

    /// Scale a decoded image and flatten its pixels.
    ///
    /// Both dimensions are multiplied by `scale` and rounded, with a floor
    /// of one pixel.
    pub fn from_image(img: &DynamicImage, scale: f32) -> Self {
        let scale = clamp_scale(scale);
        let (width, height) = img.dimensions();
        let scaled_width = ((width as f32 * scale).round() as u32).max(1);
        let scaled_height = ((height as f32 * scale).round() as u32).max(1);

        let rgba = img
            .resize_exact(scaled_width, scaled_height, FilterType::Lanczos3)
            .to_rgba8();
        let pixel_colors = rgba
            .pixels()
            .map(|pixel| PixelColor {
                r: pixel[0],
                g: pixel[1],
                b: pixel[2],
                a: pixel[3],
            })
            .collect();

        Self {
            pixel_colors,
            width: scaled_width,
            height: scaled_height,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, BlockformError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, BlockformError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The pixel at image coordinates, with y growing downward from the
    /// top row.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&PixelColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixel_colors.get((y * self.width + x) as usize)
    }

    pub fn len(&self) -> usize {
        self.pixel_colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_colors.is_empty()
    }
}

fn clamp_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        DEFAULT_SCALE
    }
}
