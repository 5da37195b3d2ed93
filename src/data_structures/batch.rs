//! Per-color instance batches.
//!
//! Shapes sharing a color render as one instanced draw. [`ColorBatches`]
//! keeps a batch per color, each with a fixed instance cap. Additions past
//! the cap are dropped with a warning rather than growing the batch, since
//! the matching GPU buffer is sized once.

use std::collections::HashMap;

use cgmath::Vector3;

use crate::color::Color;
use crate::data_structures::instance::{Instance, InstanceRaw};

pub const DEFAULT_MAX_INSTANCES: usize = 10_000;

/// Instances of one color, flattened to raw per-draw data at push time.
#[derive(Clone, Debug)]
pub struct Batch {
    color: Color,
    limit: usize,
    raw: Vec<InstanceRaw>,
}

impl Batch {
    fn new(color: Color, limit: usize) -> Self {
        Self {
            color,
            limit,
            raw: Vec::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn count(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Per-draw instance data, one entry per accepted instance.
    pub fn raw(&self) -> &[InstanceRaw] {
        &self.raw
    }

    /// The raw data viewed as bytes for a buffer upload.
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.raw)
    }

    /// Append a fully transformed instance. Returns false and drops the
    /// instance when the batch is at its cap.
    pub fn push(&mut self, instance: &Instance, opacity: f32) -> bool {
        if self.raw.len() >= self.limit {
            log::warn!(
                "maximum of {} instances reached for color {}, dropping instance",
                self.limit,
                self.color
            );
            return false;
        }
        self.raw.push(instance.to_raw(self.color, opacity));
        true
    }
}

/// All batches of a stage, keyed by color.
#[derive(Clone, Debug)]
pub struct ColorBatches {
    limit: usize,
    batches: HashMap<Color, Batch>,
}

impl ColorBatches {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_INSTANCES)
    }

    /// `limit` caps the instance count of every individual batch.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            batches: HashMap::new(),
        }
    }

    /// Get or create the batch for a color.
    pub fn batch(&mut self, color: Color) -> &mut Batch {
        let limit = self.limit;
        self.batches
            .entry(color)
            .or_insert_with(|| Batch::new(color, limit))
    }

    pub fn get(&self, color: Color) -> Option<&Batch> {
        self.batches.get(&color)
    }

    /// Place an axis-aligned, unit-scale instance at a position.
    pub fn add(&mut self, color: Color, position: Vector3<f32>) -> bool {
        self.add_instance(color, &Instance::from(position), 1.0)
    }

    /// Place a fully transformed instance.
    pub fn add_instance(&mut self, color: Color, instance: &Instance, opacity: f32) -> bool {
        self.batch(color).push(instance, opacity)
    }

    /// Move every instance of `from` into the batch of `to`.
    ///
    /// The target keeps its cap, so instances that do not fit are dropped
    /// with a warning. A missing source batch is a no-op.
    pub fn recolor(&mut self, from: Color, to: Color) {
        if from == to {
            return;
        }
        let Some(source) = self.batches.remove(&from) else {
            return;
        };
        let target = self.batch(to);
        let room = target.limit.saturating_sub(target.raw.len());
        if source.raw.len() > room {
            log::warn!(
                "maximum of {} instances reached for color {}, dropping {} instances",
                target.limit,
                to,
                source.raw.len() - room
            );
        }
        for mut raw in source.raw.into_iter().take(room) {
            raw.color[..3].copy_from_slice(&to.to_rgba_f32(1.0)[..3]);
            target.raw.push(raw);
        }
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Instances across all batches.
    pub fn total_instances(&self) -> usize {
        self.batches.values().map(Batch::count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Batch> {
        self.batches.values()
    }
}

impl Default for ColorBatches {
    fn default() -> Self {
        Self::new()
    }
}
