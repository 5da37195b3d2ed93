//! Square-layer grid math and the pixel-to-cube-grid importer.

use cgmath::Vector3;

use crate::color::Color;
use crate::data_structures::scene::Group;
use crate::data_structures::shape::{Category, Shape, ShapeKind};
use crate::resources::pixels::PixelGrid;

/// One cube slot within a square layer.
///
/// The position is a deterministic function of the indices and the pitch;
/// no state survives between invocations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerCell {
    pub layer: u32,
    pub i: u32,
    pub j: u32,
    pub position: Vector3<f32>,
    pub category: Category,
}

/// Center-to-center distance of neighboring cubes.
pub fn pitch(base_size: f32, gap: f32) -> f32 {
    base_size + gap
}

/// Generate the `side * side` cells of one square layer at height `y`,
/// centered on the origin, row by row.
pub fn square_layer(
    layer: u32,
    side: u32,
    y: f32,
    pitch: f32,
) -> impl Iterator<Item = LayerCell> {
    let center = (side as f32 - 1.0) / 2.0;
    (0..side).flat_map(move |i| {
        (0..side).map(move |j| LayerCell {
            layer,
            i,
            j,
            position: Vector3::new(
                (i as f32 - center) * pitch,
                y,
                (j as f32 - center) * pitch,
            ),
            category: Category::from_grid(i, j, side),
        })
    })
}

/// Build an upright cube grid from imported pixel data, one cube per
/// non-transparent pixel.
///
/// The grid is centered on the origin in the xy plane, with image rows
/// growing upward so the picture reads the right way up. Pixel alpha
/// carries over as cube opacity.
pub fn from_pixels(pixels: &PixelGrid, size: f32, gap: f32) -> Group {
    let pitch = pitch(size, gap);
    let width = pixels.width;
    let height = pixels.height;
    let offset_x = -(width as f32 * pitch) / 2.0;
    let offset_y = -(height as f32 * pitch) / 2.0;

    let mut group = Group::new();
    if width == 0 || height == 0 {
        if !pixels.pixel_colors.is_empty() {
            log::warn!("pixel grid reports zero extent but carries pixels, placing nothing");
        }
        return group;
    }
    for (index, pixel) in pixels.pixel_colors.iter().enumerate() {
        let x = index as u32 % width;
        let y = index as u32 / width;
        if y >= height || pixel.is_transparent() {
            continue;
        }

        let mut cube = Shape::new(
            ShapeKind::Cube,
            size,
            Color::new(pixel.r, pixel.g, pixel.b),
            Category::Inner,
        );
        cube.set_opacity(pixel.opacity());

        group.place(
            cube,
            Vector3::new(
                offset_x + x as f32 * pitch,
                offset_y + (height - 1 - y) as f32 * pitch,
                0.0,
            ),
        );
    }
    group
}
