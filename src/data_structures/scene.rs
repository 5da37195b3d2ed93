//! Retained scene of shape groups.
//!
//! A [`Scene`] owns groups of placed shapes and drives the frame-to-frame
//! behavior of a stage: the shared spin applied to spinning groups and the
//! one-shot recolor of inner shapes once the recolor delay elapses.
//! [`Scene::to_batches`] flattens the current state into per-color
//! instance batches for drawing.

use cgmath::{Euler, Quaternion, Rad, Vector3};
use instant::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::random_color;
use crate::config::StageConfig;
use crate::data_structures::batch::ColorBatches;
use crate::data_structures::instance::Instance;
use crate::data_structures::shape::{Category, Shape};

/// Stable handle to a group within a scene.
pub type GroupId = usize;

/// A shape plus its transform relative to the owning group.
#[derive(Clone, Debug)]
pub struct PlacedShape {
    pub shape: Shape,
    pub local: Instance,
}

impl PlacedShape {
    /// Local transform with the shape's own size and resting orientation
    /// folded in, ready to compose with the group origin.
    fn stamp(&self) -> Instance {
        let size = self.shape.size();
        Instance {
            position: self.local.position,
            rotation: self.local.rotation * self.shape.kind().base_rotation(),
            scale: self.local.scale * size,
        }
    }
}

/// A rigid collection of placed shapes sharing one origin transform.
#[derive(Clone, Debug, Default)]
pub struct Group {
    origin: Instance,
    members: Vec<PlacedShape>,
    spinning: bool,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(origin: Instance) -> Self {
        Self {
            origin,
            ..Default::default()
        }
    }

    /// Place a shape at a position relative to the group origin.
    pub fn place(&mut self, shape: Shape, position: Vector3<f32>) {
        self.place_instance(shape, Instance::from(position));
    }

    /// Place a shape with a full local transform.
    pub fn place_instance(&mut self, shape: Shape, local: Instance) {
        self.members.push(PlacedShape { shape, local });
    }

    /// Shift the whole group.
    pub fn translate(&mut self, offset: Vector3<f32>) {
        self.origin.position += offset;
    }

    pub fn origin(&self) -> &Instance {
        &self.origin
    }

    pub fn origin_mut(&mut self) -> &mut Instance {
        &mut self.origin
    }

    /// Spinning groups pick up the scene's shared spin, each member
    /// rotating in place around its own center.
    pub fn set_spinning(&mut self, spinning: bool) {
        self.spinning = spinning;
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn members(&self) -> &[PlacedShape] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [PlacedShape] {
        &mut self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// All retained state of a running stage.
pub struct Scene {
    groups: Vec<Option<Group>>,
    spin_rates: [f32; 3],
    spin_angles: Vector3<f32>,
    elapsed: Duration,
    last_tick: Option<Instant>,
    recolor_after: Duration,
    recolored: bool,
    limit: usize,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: &StageConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            groups: Vec::new(),
            spin_rates: config.spin,
            spin_angles: Vector3::new(0.0, 0.0, 0.0),
            elapsed: Duration::ZERO,
            last_tick: None,
            recolor_after: config.recolor_after(),
            recolored: false,
            limit: config.max_instances,
            rng,
        }
    }

    /// Add a group, reusing the slot of a previously removed one.
    pub fn add(&mut self, group: Group) -> GroupId {
        match self.groups.iter().position(Option::is_none) {
            Some(id) => {
                self.groups[id] = Some(group);
                id
            }
            None => {
                self.groups.push(Some(group));
                self.groups.len() - 1
            }
        }
    }

    /// Remove a group. Its shapes and instance data go with it.
    pub fn remove(&mut self, id: GroupId) -> Option<Group> {
        self.groups.get_mut(id).and_then(Option::take)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id).and_then(Option::as_ref)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.get_mut(id).and_then(Option::as_mut)
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().flatten()
    }

    /// Number of live groups.
    pub fn len(&self) -> usize {
        self.groups.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Accumulated spin angles in radians around x, y and z.
    pub fn spin_angles(&self) -> Vector3<f32> {
        self.spin_angles
    }

    /// Advance the scene using the wall-clock time since the last call.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = match self.last_tick {
            Some(prev) => now - prev,
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);
        self.update(dt);
    }

    /// Advance the scene by an explicit time step.
    ///
    /// The y spin briefly reverses on ticks where the elapsed milliseconds
    /// land on a multiple of 21, which gives the stage its characteristic
    /// wobble. Once the total elapsed time passes the recolor delay, every
    /// inner shape is recolored once with a random color.
    pub fn update(&mut self, dt: Duration) {
        self.elapsed += dt;
        let secs = dt.as_secs_f32();
        let flip = self.elapsed.as_millis() % 21 == 0;

        self.spin_angles.x += self.spin_rates[0] * secs;
        self.spin_angles.y += if flip {
            -self.spin_rates[1]
        } else {
            self.spin_rates[1]
        } * secs;
        self.spin_angles.z += self.spin_rates[2] * secs;

        if !self.recolored && self.elapsed >= self.recolor_after {
            self.recolored = true;
            for group in self.groups.iter_mut().flatten() {
                for member in &mut group.members {
                    if member.shape.category() == Category::Inner {
                        member.shape.set_color(random_color(&mut self.rng));
                    }
                }
            }
        }
    }

    /// Flatten the scene into per-color instance batches.
    pub fn to_batches(&self) -> ColorBatches {
        let mut batches = ColorBatches::with_limit(self.limit);
        let spin: Quaternion<f32> = Euler::new(
            Rad(self.spin_angles.x),
            Rad(self.spin_angles.y),
            Rad(self.spin_angles.z),
        )
        .into();

        for group in self.groups.iter().flatten() {
            for member in &group.members {
                let mut local = member.stamp();
                if group.spinning {
                    local.rotation = spin * local.rotation;
                }
                let world = &group.origin * &local;
                batches.add_instance(member.shape.color(), &world, member.shape.opacity());
            }
        }
        batches
    }
}
