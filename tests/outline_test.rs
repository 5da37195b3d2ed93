use blockform::layout::outline::{self, DEFAULT_SEGMENTS};
use blockform::{Category, Color, InnerSpace, ShapeKind, Vector3};

use crate::common::test_utils::assert_close;

mod common;

fn v(x: f32, y: f32, z: f32) -> Vector3<f32> {
    Vector3::new(x, y, z)
}

#[test]
fn should_space_line_markers_one_size_apart() {
    let points = outline::line(v(0.0, 0.0, 0.0), v(5.0, 0.0, 0.0), 1.0);
    assert_eq!(points.len(), 6);
    assert_eq!(points[0], v(0.0, 0.0, 0.0));
    assert_eq!(points[5], v(5.0, 0.0, 0.0));

    let diagonal = outline::line(v(0.0, 0.0, 0.0), v(3.0, 4.0, 0.0), 0.5);
    for pair in diagonal.windows(2) {
        assert_close((pair[1] - pair[0]).magnitude(), 0.5);
    }
}

#[test]
fn should_overshoot_rather_than_stop_short() {
    // 5 units at step 2 takes 3 steps, the last landing past the endpoint.
    let points = outline::line(v(0.0, 0.0, 0.0), v(5.0, 0.0, 0.0), 2.0);
    assert_eq!(points.len(), 4);
    assert_close(points[3].x, 6.0);
}

#[test]
fn should_collapse_degenerate_lines_to_the_start() {
    let start = v(1.0, 2.0, 3.0);
    assert_eq!(outline::line(start, start, 1.0), vec![start]);
    assert_eq!(outline::line(start, v(4.0, 2.0, 3.0), 0.0), vec![start]);
}

#[test]
fn should_close_polygons_back_to_the_first_vertex() {
    assert!(outline::polygon(&[], 1.0).is_empty());

    // A 3-4-5 right triangle at unit step: 4 + 6 + 5 markers per edge.
    let a = v(0.0, 0.0, 0.0);
    let b = v(3.0, 0.0, 0.0);
    let c = v(0.0, 4.0, 0.0);
    let points = outline::polygon(&[a, b, c], 1.0);
    assert_eq!(points.len(), 15);
    assert_eq!(outline::triangle(a, b, c, 1.0), points);

    // The closing edge heads back towards the first vertex.
    assert_eq!(points[points.len() - 1], a);
}

#[test]
fn should_keep_rectangles_in_the_first_corners_z_plane() {
    let points = outline::rectangle(v(1.0, 1.0, 5.0), v(4.0, 3.0, 9.0), 1.0);
    assert!(!points.is_empty());
    for point in &points {
        assert_close(point.z, 5.0);
        assert!((1.0..=4.0).contains(&point.x));
        assert!((1.0..=3.0).contains(&point.y));
    }
}

#[test]
fn should_span_squares_from_one_corner() {
    let from_corner = outline::square(v(2.0, 2.0, 0.0), 2.0, 1.0);
    let as_rectangle = outline::rectangle(v(2.0, 2.0, 0.0), v(4.0, 4.0, 0.0), 1.0);
    assert_eq!(from_corner, as_rectangle);
    for corner in [
        v(2.0, 2.0, 0.0),
        v(4.0, 2.0, 0.0),
        v(4.0, 4.0, 0.0),
        v(2.0, 4.0, 0.0),
    ] {
        assert!(from_corner.contains(&corner));
    }
}

#[test]
fn should_inscribe_regular_polygons_in_their_circle() {
    // A square inscribed at radius 1: four sqrt(2) edges, 3 markers each.
    let points = outline::regular_polygon(v(0.0, 0.0, 2.0), 1.0, 4, 1.0);
    assert_eq!(points.len(), 12);
    for point in &points {
        assert_close(point.z, 2.0);
    }
    assert_close(points[0].x, 1.0);
    assert_close(points[0].y, 0.0);
}

#[test]
fn should_trace_circles_close_to_their_radius() {
    let center = v(1.0, 0.0, 0.0);
    let points = outline::circle(center, 2.0, 0.25, DEFAULT_SEGMENTS);
    assert!(!points.is_empty());
    for point in &points {
        // Chords cut inside and marker steps overshoot outside, both by
        // less than the marker size.
        let distance = (point - center).magnitude();
        assert!((distance - 2.0).abs() < 0.25, "distance {distance}");
    }
}

#[test]
fn should_sweep_arcs_between_the_given_angles() {
    assert!(outline::arc(v(0.0, 0.0, 0.0), 1.0, 0.0, 1.0, 0.5, 0).is_empty());

    let points = outline::arc(
        v(0.0, 0.0, 0.0),
        1.0,
        0.0,
        std::f32::consts::PI,
        0.1,
        8,
    );
    assert_close(points[0].x, 1.0);
    assert_close(points[0].y, 0.0);
    // An upper half-circle stays above the x axis, give or take the
    // final marker overshooting by less than one step.
    assert!(points.iter().all(|p| p.y >= -0.1));
}

#[test]
fn should_stretch_ellipses_along_their_half_extents() {
    assert!(outline::ellipse(v(0.0, 0.0, 0.0), 3.0, 1.0, 0.5, 0).is_empty());

    let points = outline::ellipse(v(0.0, 0.0, 0.0), 3.0, 1.0, 0.25, 16);
    assert_close(points[0].x, 3.0);
    for point in &points {
        assert!(point.x.abs() <= 3.0 + 0.25);
        assert!(point.y.abs() <= 1.0 + 0.25);
        assert_close(point.z, 0.0);
    }
}

#[test]
fn should_place_a_cube_marker_at_every_point() {
    let color = Color::from_hex(0x8b4513);
    let points = outline::line(v(0.0, 0.0, 0.0), v(2.0, 0.0, 0.0), 1.0);
    let group = outline::build(&points, 0.8, color);

    assert_eq!(group.len(), points.len());
    for (placed, point) in group.members().iter().zip(&points) {
        assert_eq!(placed.shape.kind(), ShapeKind::Cube);
        assert_eq!(placed.shape.color(), color);
        assert_eq!(placed.shape.category(), Category::Inner);
        assert_close(placed.shape.size(), 0.8);
        assert_eq!(placed.local.position, *point);
    }
}
