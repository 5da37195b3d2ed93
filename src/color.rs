//! Solid colors, the predefined palette and random color helpers.
//!
//! Colors are plain 8-bit RGB values. Batching and instancing key off them,
//! so the type is `Eq + Hash` and cheap to copy. Alpha is not part of the
//! color itself: opacity travels separately on shapes and pixel cells.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BlockformError;

/// An opaque RGB color value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Predefined palette used whenever a caller does not pick a color.
pub const PALETTE: [Color; 10] = [
    Color::from_hex(0xFF5733), // vibrant orange
    Color::from_hex(0x33FF57), // bright green
    Color::from_hex(0x3357FF), // bold blue
    Color::from_hex(0xF5B041), // golden yellow
    Color::from_hex(0x8E44AD), // purple
    Color::from_hex(0xE74C3C), // red
    Color::from_hex(0x1ABC9C), // cyan
    Color::from_hex(0x2ECC71), // emerald green
    Color::from_hex(0x3498DB), // sky blue
    Color::from_hex(0x9B59B6), // violet
];

impl Color {
    pub const WHITE: Color = Color::from_hex(0xffffff);
    pub const BLACK: Color = Color::from_hex(0x000000);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Packed `0xRRGGBB` form of this color.
    pub const fn hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a `#RRGGBB` literal (the leading `#` is optional).
    pub fn parse(literal: &str) -> Result<Self, BlockformError> {
        let digits = literal.strip_prefix('#').unwrap_or(literal);
        if digits.len() != 6 {
            return Err(BlockformError::InvalidColor(literal.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| BlockformError::InvalidColor(literal.to_string()))
    }

    /// RGBA as normalized floats, ready for per-instance GPU data.
    pub fn to_rgba_f32(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }

    /// Linear blend towards `other`. `ratio` 0.0 keeps `self`, 1.0 is `other`.
    pub fn blend(self, other: Color, ratio: f32) -> Color {
        let lerp = |a: u8, b: u8| (a as f32 + ratio * (b as f32 - a as f32)).round() as u8;
        Color::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.hex())
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

/// A uniformly random color over the full 24-bit range.
pub fn random_color(rng: &mut impl Rng) -> Color {
    Color::from_hex(rng.gen_range(0..=0xFFFFFFu32))
}

/// A random pick from [`PALETTE`].
pub fn random_palette_color(rng: &mut impl Rng) -> Color {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}
