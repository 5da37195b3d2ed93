//! Hourglass layout: stacked squares narrowing to a one-cube waist.

use crate::color::Color;
use crate::data_structures::scene::Group;
use crate::data_structures::shape::{ShapeFactory, ShapeKind, ShapeOptions};
use crate::layout::grid::{self, LayerCell};

/// Cell coordinates for an hourglass with `layers` layers per half.
///
/// `2 * layers - 1` stacked layers in total. Side lengths run from
/// `layers` down to the single-cube waist and back up to `layers`, every
/// layer one pitch above the previous.
pub fn cells(layers: u32, base_size: f32, gap: f32) -> Vec<LayerCell> {
    if layers == 0 {
        return Vec::new();
    }
    let pitch = grid::pitch(base_size, gap);
    let total_layers = 2 * layers - 1;
    (0..total_layers)
        .flat_map(|layer| {
            let side = if layer < layers {
                layers - layer
            } else {
                layer - layers + 2
            };
            grid::square_layer(layer, side, layer as f32 * pitch, pitch)
        })
        .collect()
}

/// Build an hourglass of cubes sharing one color (random palette pick
/// when unset).
pub fn build(
    factory: &mut ShapeFactory,
    layers: u32,
    base_size: f32,
    gap: f32,
    color: Option<Color>,
) -> Group {
    let color = color.unwrap_or_else(|| factory.palette_color());
    let mut group = Group::new();
    for cell in cells(layers, base_size, gap) {
        let shape = factory.build(
            ShapeKind::Cube,
            ShapeOptions {
                size: Some(base_size),
                color: Some(color),
                category: Some(cell.category),
            },
        );
        group.place(shape, cell.position);
    }
    group
}
