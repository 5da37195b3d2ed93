//! Cube-marker outlines for 2D figures.
//!
//! Every generator returns marker positions spaced one marker size apart
//! along the figure's edges. Markers can overshoot an endpoint by less
//! than one step, and figures built from several edges repeat the shared
//! vertices, one marker per incident edge.

use cgmath::{InnerSpace, Vector3};

use crate::color::Color;
use crate::data_structures::scene::Group;
use crate::data_structures::shape::{Category, Shape, ShapeKind};

pub const DEFAULT_SEGMENTS: u32 = 32;

/// Markers along a straight segment, from `start` towards `end`.
pub fn line(start: Vector3<f32>, end: Vector3<f32>, size: f32) -> Vec<Vector3<f32>> {
    let span = end - start;
    let distance = span.magnitude();
    if distance == 0.0 || size <= 0.0 {
        return vec![start];
    }
    let direction = span / distance;
    let steps = (distance / size).ceil() as u32;
    (0..=steps)
        .map(|i| start + direction * (i as f32 * size))
        .collect()
}

/// Markers along a closed polygon, connecting each vertex to the next and
/// the last back to the first.
pub fn polygon(vertices: &[Vector3<f32>], size: f32) -> Vec<Vector3<f32>> {
    if vertices.is_empty() {
        return Vec::new();
    }
    let mut points = Vec::new();
    for (index, start) in vertices.iter().enumerate() {
        let end = vertices[(index + 1) % vertices.len()];
        points.extend(line(*start, end, size));
    }
    points
}

pub fn triangle(
    a: Vector3<f32>,
    b: Vector3<f32>,
    c: Vector3<f32>,
    size: f32,
) -> Vec<Vector3<f32>> {
    polygon(&[a, b, c], size)
}

/// Markers along an axis-aligned rectangle spanned by two opposite
/// corners, placed in the z plane of the first corner.
pub fn rectangle(a: Vector3<f32>, b: Vector3<f32>, size: f32) -> Vec<Vector3<f32>> {
    polygon(
        &[
            Vector3::new(a.x, a.y, a.z),
            Vector3::new(b.x, a.y, a.z),
            Vector3::new(b.x, b.y, a.z),
            Vector3::new(a.x, b.y, a.z),
        ],
        size,
    )
}

pub fn square(corner: Vector3<f32>, side: f32, size: f32) -> Vec<Vector3<f32>> {
    rectangle(corner, corner + Vector3::new(side, side, 0.0), size)
}

/// Markers along a regular polygon inscribed in a circle.
pub fn regular_polygon(
    center: Vector3<f32>,
    radius: f32,
    sides: u32,
    size: f32,
) -> Vec<Vector3<f32>> {
    let vertices: Vec<Vector3<f32>> = (0..sides)
        .map(|i| {
            let angle = (i as f32 / sides as f32) * std::f32::consts::TAU;
            Vector3::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
                center.z,
            )
        })
        .collect();
    polygon(&vertices, size)
}

/// Markers along a circular arc swept from `start_angle` to `end_angle`
/// (radians), approximated by `segments` chords.
pub fn arc(
    center: Vector3<f32>,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    size: f32,
    segments: u32,
) -> Vec<Vector3<f32>> {
    if segments == 0 {
        return Vec::new();
    }
    let samples: Vec<Vector3<f32>> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let angle = start_angle + t * (end_angle - start_angle);
            Vector3::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
                center.z,
            )
        })
        .collect();
    chain(&samples, size)
}

pub fn circle(
    center: Vector3<f32>,
    radius: f32,
    size: f32,
    segments: u32,
) -> Vec<Vector3<f32>> {
    arc(center, radius, 0.0, std::f32::consts::TAU, size, segments)
}

/// Markers along an axis-aligned ellipse with the given half extents.
pub fn ellipse(
    center: Vector3<f32>,
    radius_x: f32,
    radius_y: f32,
    size: f32,
    segments: u32,
) -> Vec<Vector3<f32>> {
    if segments == 0 {
        return Vec::new();
    }
    let samples: Vec<Vector3<f32>> = (0..=segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            Vector3::new(
                center.x + radius_x * angle.cos(),
                center.y + radius_y * angle.sin(),
                center.z,
            )
        })
        .collect();
    chain(&samples, size)
}

/// Connect consecutive sample points with marker lines, without wrapping.
fn chain(samples: &[Vector3<f32>], size: f32) -> Vec<Vector3<f32>> {
    let mut points = Vec::new();
    for pair in samples.windows(2) {
        points.extend(line(pair[0], pair[1], size));
    }
    points
}

/// Place a cube marker of the given size and color at every point.
pub fn build(points: &[Vector3<f32>], size: f32, color: Color) -> Group {
    let mut group = Group::new();
    for point in points {
        group.place(
            Shape::new(ShapeKind::Cube, size, color, Category::Inner),
            *point,
        );
    }
    group
}
