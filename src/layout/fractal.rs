//! Binary-tree fractal branches.

use cgmath::{InnerSpace, Vector3};

use crate::color::Color;
use crate::data_structures::batch::ColorBatches;

/// Default trunk brown.
pub const TRUNK_COLOR: Color = Color::from_hex(0x8b4513);
/// Default leaf green.
pub const LEAF_COLOR: Color = Color::from_hex(0x228b22);
/// Branches longer than this stamp in the trunk color.
pub const TRUNK_MIN_LENGTH: f32 = 3.0;
/// Segment length decay per generation.
pub const LENGTH_DECAY: f32 = 0.7;

/// One branch segment. `depth` is the number of generations remaining
/// when the branch was grown, so leaves carry depth 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Branch {
    pub start: Vector3<f32>,
    pub end: Vector3<f32>,
    pub depth: u32,
}

impl Branch {
    pub fn length(&self) -> f32 {
        (self.end - self.start).magnitude()
    }
}

/// Colors for the two branch classes, defaulting to brown and green.
#[derive(Clone, Copy, Debug)]
pub struct FractalColors {
    pub trunk: Color,
    pub leaf: Color,
}

impl Default for FractalColors {
    fn default() -> Self {
        Self {
            trunk: TRUNK_COLOR,
            leaf: LEAF_COLOR,
        }
    }
}

/// Grow a binary tree of branches in the xy plane.
///
/// The first branch heads straight up from `start`. Every branch spawns
/// two children at its end, rotated `angle_delta` radians either way,
/// with segment length decaying by [`LENGTH_DECAY`] per generation. The
/// recursion terminates when `depth` reaches zero, so a tree of depth `d`
/// holds `2^d - 1` branches in pre-order.
pub fn binary_tree(
    start: Vector3<f32>,
    length: f32,
    angle_delta: f32,
    depth: u32,
) -> Vec<Branch> {
    let mut branches = Vec::new();
    grow(
        &mut branches,
        start,
        length,
        std::f32::consts::FRAC_PI_2,
        angle_delta,
        depth,
    );
    branches
}

fn grow(
    branches: &mut Vec<Branch>,
    start: Vector3<f32>,
    length: f32,
    heading: f32,
    angle_delta: f32,
    depth: u32,
) {
    if depth == 0 {
        return;
    }
    let end = Vector3::new(
        start.x + length * heading.cos(),
        start.y + length * heading.sin(),
        start.z,
    );
    branches.push(Branch { start, end, depth });

    let child_length = length * LENGTH_DECAY;
    grow(
        branches,
        end,
        child_length,
        heading + angle_delta,
        angle_delta,
        depth - 1,
    );
    grow(
        branches,
        end,
        child_length,
        heading - angle_delta,
        angle_delta,
        depth - 1,
    );
}

/// Stamp every branch into the batches as two unit markers, one at each
/// endpoint. Branches longer than [`TRUNK_MIN_LENGTH`] use the trunk
/// color, shorter ones the leaf color.
pub fn plant(batches: &mut ColorBatches, branches: &[Branch], colors: FractalColors) {
    for branch in branches {
        let color = if branch.length() > TRUNK_MIN_LENGTH {
            colors.trunk
        } else {
            colors.leaf
        };
        batches.add(color, branch.start);
        batches.add(color, branch.end);
    }
}
