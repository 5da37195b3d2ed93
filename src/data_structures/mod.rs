//! Core data structures: shapes, instances, batches, and scenes.
//!
//! This module contains the data types everything else builds on:
//!
//! - `shape` is the shape catalog, factory, and per-shape attributes
//! - `instance` holds per-instance transformation and attribute data
//! - `batch` groups instances by color for instanced drawing
//! - `scene` is the retained scene of shape groups with spin and recolor

pub mod batch;
pub mod instance;
pub mod scene;
pub mod shape;
