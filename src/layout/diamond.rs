//! Diamond layout: a pyramid mirrored around a widened crown ring.

use crate::color::Color;
use crate::data_structures::scene::Group;
use crate::data_structures::shape::{Category, Shape, ShapeFactory, ShapeKind};
use crate::layout::grid::{self, LayerCell};

/// Corner cubes render white to frame the silhouette.
pub const CORNER_COLOR: Color = Color::WHITE;
/// Border cubes render a light gray between frame and fill.
pub const EDGE_COLOR: Color = Color::from_hex(0xc6c6c6);

/// Cell coordinates for a diamond with `layers` layers per half.
///
/// Three phases: the upper pyramid rising from the base at y = 0, a crown
/// ring one cube wider than the base sitting halfway below it (classified
/// corner throughout), and the mirrored lower pyramid hanging underneath,
/// emitted tip first.
pub fn cells(layers: u32, base_size: f32, gap: f32) -> Vec<LayerCell> {
    let pitch = grid::pitch(base_size, gap);
    let mut cells = Vec::new();

    for layer in 0..layers {
        let side = layers - layer;
        cells.extend(grid::square_layer(layer, side, layer as f32 * pitch, pitch));
    }

    cells.extend(
        grid::square_layer(0, layers + 1, -pitch / 2.0, pitch).map(|cell| LayerCell {
            category: Category::Corner,
            ..cell
        }),
    );

    for layer in (1..=layers).rev() {
        let side = layers - layer + 1;
        cells.extend(grid::square_layer(
            layer,
            side,
            -(layer as f32) * pitch,
            pitch,
        ));
    }
    cells
}

/// Build a diamond of cubes colored by category: white corners, gray
/// borders, and a shared inner color (random palette pick when unset).
/// Every cube carries its category's opacity preset.
pub fn build(
    factory: &mut ShapeFactory,
    layers: u32,
    base_size: f32,
    gap: f32,
    inner: Option<Color>,
) -> Group {
    let inner = inner.unwrap_or_else(|| factory.palette_color());
    let mut group = Group::new();
    for cell in cells(layers, base_size, gap) {
        let color = match cell.category {
            Category::Corner => CORNER_COLOR,
            Category::Edge => EDGE_COLOR,
            Category::Inner => inner,
        };
        let mut shape = Shape::new(ShapeKind::Cube, base_size, color, cell.category);
        shape.set_opacity(cell.category.opacity());
        group.place(shape, cell.position);
    }
    group
}
