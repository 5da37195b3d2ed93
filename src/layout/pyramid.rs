//! Stacked-square pyramid layout.

use crate::color::Color;
use crate::data_structures::scene::Group;
use crate::data_structures::shape::{ShapeFactory, ShapeKind, ShapeOptions};
use crate::layout::grid::{self, LayerCell};

/// Cell coordinates for a pyramid with the given layer count.
///
/// Layer `n` holds `(layers - n)^2` cells: the base is `layers` cubes on a
/// side, the top a single cube.
pub fn cells(layers: u32, base_size: f32, gap: f32) -> Vec<LayerCell> {
    let pitch = grid::pitch(base_size, gap);
    (0..layers)
        .flat_map(|layer| {
            let side = layers - layer;
            grid::square_layer(layer, side, layer as f32 * pitch, pitch)
        })
        .collect()
}

/// Build a pyramid of cubes. Without a fixed color, every cube picks its
/// own random palette color.
pub fn build(
    factory: &mut ShapeFactory,
    layers: u32,
    base_size: f32,
    gap: f32,
    color: Option<Color>,
) -> Group {
    let mut group = Group::new();
    for cell in cells(layers, base_size, gap) {
        let shape = factory.build(
            ShapeKind::Cube,
            ShapeOptions {
                size: Some(base_size),
                color,
                category: Some(cell.category),
            },
        );
        group.place(shape, cell.position);
    }
    group
}
