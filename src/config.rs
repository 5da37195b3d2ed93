//! Stage configuration loaded from JSON.
//!
//! Every field has a default, so an empty object `{}` (or a missing file
//! entry) yields the stock stage: an 11-layer build of 21.0-unit cubes with
//! a 7.5-unit gap, recoloring once after a second.

use std::path::Path;

use instant::Duration;
use serde::{Deserialize, Serialize};

use crate::error::BlockformError;

fn default_layers() -> u32 {
    11
}

fn default_base_size() -> f32 {
    21.0
}

fn default_gap() -> f32 {
    7.5
}

fn default_spin() -> [f32; 3] {
    // Radians per second around x, y and z.
    [0.6, 1.8, 3.0]
}

fn default_recolor_after_millis() -> u64 {
    1000
}

fn default_max_instances() -> usize {
    10_000
}

/// Tunables for a generated stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Layer count for pyramids, diamonds and hourglasses.
    #[serde(default = "default_layers")]
    pub layers: u32,
    /// Edge length of a single cube.
    #[serde(default = "default_base_size")]
    pub base_size: f32,
    /// Empty space between neighboring cubes.
    #[serde(default = "default_gap")]
    pub gap: f32,
    /// Spin rates in radians per second around x, y and z.
    #[serde(default = "default_spin")]
    pub spin: [f32; 3],
    /// Delay before the one-shot recolor of inner shapes fires.
    #[serde(default = "default_recolor_after_millis")]
    pub recolor_after_millis: u64,
    /// Instance cap per color batch.
    #[serde(default = "default_max_instances")]
    pub max_instances: usize,
    /// Seed for deterministic color picks. Random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for StageConfig {
    fn default() -> Self {
        // All fields carry serde defaults, so the empty object cannot fail.
        serde_json::from_str("{}").unwrap()
    }
}

impl StageConfig {
    pub fn from_json(json: &str) -> Result<Self, BlockformError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlockformError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Center-to-center distance between neighboring cubes.
    pub fn pitch(&self) -> f32 {
        self.base_size + self.gap
    }

    pub fn recolor_after(&self) -> Duration {
        Duration::from_millis(self.recolor_after_millis)
    }
}
