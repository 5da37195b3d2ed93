//! blockform
//!
//! A procedural block-art toolkit: layouts of instanced cube shapes
//! (pyramids, diamonds, hourglasses, outlines and branch fractals) plus
//! an image importer that turns pictures into cube grids. The crate
//! produces renderer-ready per-instance data rather than drawing itself,
//! so the output plugs into any instancing-capable renderer. The design
//! emphasizes deterministic layout math, per-color batching and a minimal
//! retained scene for spin and recolor behavior.
//!
//! High-level modules
//! - `color`: solid colors, the predefined palette and random picks
//! - `config`: stage tunables loaded from JSON with full defaults
//! - `data_structures`: shape catalog, instances, batches and scenes
//! - `error`: the crate-wide error type
//! - `layout`: deterministic generators mapping indices to positions
//! - `resources`: importers for external data such as images
//!

pub mod color;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod layout;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;

pub use crate::color::{Color, PALETTE};
pub use crate::config::StageConfig;
pub use crate::data_structures::batch::{Batch, ColorBatches};
pub use crate::data_structures::instance::{Instance, InstanceRaw};
pub use crate::data_structures::scene::{Group, GroupId, PlacedShape, Scene};
pub use crate::data_structures::shape::{
    Category, GeometryDesc, Shape, ShapeFactory, ShapeKind, ShapeOptions,
};
pub use crate::error::BlockformError;
pub use crate::resources::pixels::{PixelColor, PixelGrid};
