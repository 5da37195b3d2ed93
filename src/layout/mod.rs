//! Procedural layout generators.
//!
//! Each generator is a pure mapping from integer indices and the size/gap
//! parameters to positions and category labels, so layouts are fully
//! deterministic and cheap to regenerate:
//!
//! - `grid` holds the square-layer primitive shared by the stacked builds,
//!   plus the pixel-to-cube-grid importer
//! - `pyramid` stacks shrinking square layers
//! - `diamond` mirrors a pyramid around a widened crown ring
//! - `hourglass` narrows to a single-cube waist and widens again
//! - `outline` marks 2D figures (lines, polygons, arcs) with cube markers
//! - `fractal` grows binary branch trees with decaying segment length

pub mod diamond;
pub mod fractal;
pub mod grid;
pub mod hourglass;
pub mod outline;
pub mod pyramid;
