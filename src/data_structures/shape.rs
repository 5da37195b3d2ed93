//! Shape catalog and the name-keyed shape factory.
//!
//! The catalog is a fixed set of primitive kinds. Each kind knows how to
//! derive its renderer-ready geometry parameters from a single `size`
//! value, so callers never juggle per-kind radii or segment counts. The
//! factory resolves user-facing names, fills unset options with defaults
//! and hands out [`Shape`] values ready for placement.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::{self, Color};
use crate::error::BlockformError;

/// Where a cube sits within its layer's square grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// One of the four literal corners of the layer.
    Corner,
    /// On the border of the layer, but not a corner.
    Edge,
    /// Everything enclosed by the border.
    #[default]
    Inner,
}

impl Category {
    /// Classify grid cell `(i, j)` within a square layer of the given side.
    ///
    /// Degenerate layers classify as corners: a 1x1 layer is all corner, a
    /// 2x2 layer is corners only.
    pub fn from_grid(i: u32, j: u32, side: u32) -> Self {
        if side <= 1 {
            return Category::Corner;
        }
        let last = side - 1;
        let i_border = i == 0 || i == last;
        let j_border = j == 0 || j == last;
        match (i_border, j_border) {
            (true, true) => Category::Corner,
            (true, false) | (false, true) => Category::Edge,
            (false, false) => Category::Inner,
        }
    }

    /// Material opacity preset for this category.
    pub fn opacity(self) -> f32 {
        match self {
            Category::Corner => 0.75,
            Category::Edge => 0.25,
            Category::Inner => 0.55,
        }
    }

    /// Index into a category texture array, for renderers that bind one.
    pub fn texture_index(self) -> u32 {
        match self {
            Category::Corner => 0,
            Category::Edge => 1,
            Category::Inner => 2,
        }
    }
}

/// Every primitive the catalog knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Torus,
    TorusKnot,
    Dodecahedron,
    Icosahedron,
    Octahedron,
    Tetrahedron,
    Plane,
    Circle,
    Ring,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 13] = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Torus,
        ShapeKind::TorusKnot,
        ShapeKind::Dodecahedron,
        ShapeKind::Icosahedron,
        ShapeKind::Octahedron,
        ShapeKind::Tetrahedron,
        ShapeKind::Plane,
        ShapeKind::Circle,
        ShapeKind::Ring,
    ];

    /// Canonical catalog name, as accepted by [`ShapeKind::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::Torus => "Torus",
            ShapeKind::TorusKnot => "TorusKnot",
            ShapeKind::Dodecahedron => "Dodecahedron",
            ShapeKind::Icosahedron => "Icosahedron",
            ShapeKind::Octahedron => "Octahedron",
            ShapeKind::Tetrahedron => "Tetrahedron",
            ShapeKind::Plane => "Plane",
            ShapeKind::Circle => "Circle",
            ShapeKind::Ring => "Ring",
        }
    }

    /// Case-sensitive lookup of a catalog name.
    pub fn from_name(name: &str) -> Option<Self> {
        ShapeKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Flat shapes have no volume and render double-sided.
    pub fn is_flat(self) -> bool {
        matches!(self, ShapeKind::Plane | ShapeKind::Circle | ShapeKind::Ring)
    }

    /// Resting orientation. Circles and rings lie face-up in the xz plane,
    /// everything else keeps the identity rotation.
    pub fn base_rotation(self) -> cgmath::Quaternion<f32> {
        use cgmath::{Quaternion, Rad, Rotation3};
        match self {
            ShapeKind::Circle | ShapeKind::Ring => {
                Quaternion::from_angle_x(Rad(std::f32::consts::FRAC_PI_2))
            }
            _ => cgmath::One::one(),
        }
    }

    /// Renderer-ready geometry parameters for this kind at the given size.
    pub fn geometry(self, size: f32) -> GeometryDesc {
        match self {
            ShapeKind::Cube => GeometryDesc::Box {
                width: size,
                height: size,
                depth: size,
            },
            ShapeKind::Sphere => GeometryDesc::Sphere {
                radius: size,
                width_segments: 32,
                height_segments: 32,
            },
            ShapeKind::Cylinder => GeometryDesc::Cylinder {
                radius_top: size / 2.0,
                radius_bottom: size / 2.0,
                height: size,
                radial_segments: 32,
            },
            ShapeKind::Cone => GeometryDesc::Cone {
                radius: size / 2.0,
                height: size,
                radial_segments: 32,
            },
            ShapeKind::Torus => GeometryDesc::Torus {
                radius: size,
                tube: size / 4.0,
                radial_segments: 16,
                tubular_segments: 100,
            },
            ShapeKind::TorusKnot => GeometryDesc::TorusKnot {
                radius: size,
                tube: size / 4.0,
                tubular_segments: 100,
                radial_segments: 16,
            },
            ShapeKind::Dodecahedron => GeometryDesc::Polyhedron {
                faces: 12,
                radius: size,
            },
            ShapeKind::Icosahedron => GeometryDesc::Polyhedron {
                faces: 20,
                radius: size,
            },
            ShapeKind::Octahedron => GeometryDesc::Polyhedron {
                faces: 8,
                radius: size,
            },
            ShapeKind::Tetrahedron => GeometryDesc::Polyhedron {
                faces: 4,
                radius: size,
            },
            ShapeKind::Plane => GeometryDesc::Plane {
                width: size,
                height: size,
            },
            ShapeKind::Circle => GeometryDesc::Circle {
                radius: size,
                segments: 32,
            },
            ShapeKind::Ring => GeometryDesc::Ring {
                inner_radius: size / 2.0,
                outer_radius: size,
                theta_segments: 32,
            },
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters a mesh builder needs to realize a shape, one variant per
/// geometry family. Segment counts follow the catalog defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryDesc {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
    },
    /// Regular polyhedra, distinguished by face count.
    Polyhedron {
        faces: u32,
        radius: f32,
    },
    Plane {
        width: f32,
        height: f32,
    },
    Circle {
        radius: f32,
        segments: u32,
    },
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        theta_segments: u32,
    },
}

/// A placeable shape with its display attributes.
///
/// Setters guard against no-op writes so callers can use them as cheap
/// change detection before re-uploading instance data.
#[derive(Clone, Debug)]
pub struct Shape {
    kind: ShapeKind,
    size: f32,
    color: Color,
    opacity: f32,
    category: Category,
}

impl Shape {
    pub fn new(kind: ShapeKind, size: f32, color: Color, category: Category) -> Self {
        Self {
            kind,
            size,
            color,
            opacity: 1.0,
            category,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Geometry parameters at the current size.
    pub fn geometry(&self) -> GeometryDesc {
        self.kind.geometry(self.size)
    }

    /// Returns true when the size actually changed.
    pub fn set_size(&mut self, size: f32) -> bool {
        if self.size == size {
            return false;
        }
        self.size = size;
        true
    }

    /// Returns true when the color actually changed.
    pub fn set_color(&mut self, color: Color) -> bool {
        if self.color == color {
            return false;
        }
        self.color = color;
        true
    }

    /// Returns true when the opacity actually changed.
    pub fn set_opacity(&mut self, opacity: f32) -> bool {
        if self.opacity == opacity {
            return false;
        }
        self.opacity = opacity;
        true
    }

    /// Returns true when the category actually changed.
    pub fn set_category(&mut self, category: Category) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        true
    }
}

/// Unset fields fall back to factory defaults: size 1.0, a random palette
/// color and the inner category.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapeOptions {
    pub size: Option<f32>,
    pub color: Option<Color>,
    pub category: Option<Category>,
}

impl ShapeOptions {
    pub fn sized(size: f32) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn colored(size: f32, color: Color) -> Self {
        Self {
            size: Some(size),
            color: Some(color),
            category: None,
        }
    }
}

/// Builds shapes by catalog name or at random.
///
/// Flat kinds are not registered, so they cannot be produced by name or by
/// random pick. The random entry points additionally honor a caller
/// blacklist, with the flat kinds excluded by default.
pub struct ShapeFactory {
    rng: StdRng,
}

/// Kinds the random entry points skip unless told otherwise.
pub const DEFAULT_BLACKLIST: [ShapeKind; 3] =
    [ShapeKind::Plane, ShapeKind::Circle, ShapeKind::Ring];

impl ShapeFactory {
    /// The ten solid kinds available for lookup and random picks.
    pub const REGISTRY: [ShapeKind; 10] = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Torus,
        ShapeKind::TorusKnot,
        ShapeKind::Dodecahedron,
        ShapeKind::Icosahedron,
        ShapeKind::Octahedron,
        ShapeKind::Tetrahedron,
    ];

    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A factory with a fixed seed produces a reproducible shape stream.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_config_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Build a shape by its catalog name.
    ///
    /// Unknown and unregistered names both fail with
    /// [`BlockformError::UnrecognizedShape`].
    pub fn get(&mut self, name: &str, options: ShapeOptions) -> Result<Shape, BlockformError> {
        let kind = ShapeKind::from_name(name)
            .filter(|kind| Self::REGISTRY.contains(kind))
            .ok_or_else(|| BlockformError::UnrecognizedShape(name.to_string()))?;
        Ok(self.build(kind, options))
    }

    /// A random pick from the predefined palette.
    pub fn palette_color(&mut self) -> Color {
        color::random_palette_color(&mut self.rng)
    }

    /// Build a shape of a known kind, resolving unset options.
    pub fn build(&mut self, kind: ShapeKind, options: ShapeOptions) -> Shape {
        let size = options.size.unwrap_or(1.0);
        let color = options
            .color
            .unwrap_or_else(|| color::random_palette_color(&mut self.rng));
        let category = options.category.unwrap_or_default();
        Shape::new(kind, size, color, category)
    }

    /// A random registered shape, excluding [`DEFAULT_BLACKLIST`].
    pub fn random(&mut self, options: ShapeOptions) -> Result<Shape, BlockformError> {
        self.random_excluding(&DEFAULT_BLACKLIST, options)
    }

    /// A random registered shape, excluding the given kinds.
    pub fn random_excluding(
        &mut self,
        blacklist: &[ShapeKind],
        options: ShapeOptions,
    ) -> Result<Shape, BlockformError> {
        let pool: Vec<ShapeKind> = Self::REGISTRY
            .iter()
            .copied()
            .filter(|kind| !blacklist.contains(kind))
            .collect();
        if pool.is_empty() {
            return Err(BlockformError::EmptyShapePool);
        }
        let kind = pool[self.rng.gen_range(0..pool.len())];
        Ok(self.build(kind, options))
    }

    /// Build a shape by name unless the name is blacklisted, in which case
    /// `Ok(None)` is returned instead of an error.
    pub fn specific(
        &mut self,
        name: &str,
        options: ShapeOptions,
        blacklist: &[ShapeKind],
    ) -> Result<Option<Shape>, BlockformError> {
        if ShapeKind::from_name(name).is_some_and(|kind| blacklist.contains(&kind)) {
            return Ok(None);
        }
        self.get(name, options).map(Some)
    }
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self::new()
    }
}
