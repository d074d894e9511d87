//! Render-side instance grouping and per-entity composite caching.
//!
//! The chunk engine hands the renderer rectangle slices and raw instance
//! lists; this crate owns the render-side buffers built from them. Composite
//! models (a creature and its equipment, a multi-part building) are memoized
//! per entity and invalidated explicitly when the entity changes.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use hashbrown::HashMap;

/// Tint applied to buildings still under construction.
pub const INCOMPLETE_TINT: [f32; 3] = [0.0, 0.0, 1.0];

/// One placed copy of a voxel model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModelInstance {
    pub model: i32,
    /// Owning entity id, `-1` for free-standing placements.
    pub entity: i32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub tint: [f32; 3],
    pub rotation: f32,
    pub scale: [f32; 3],
}

impl ModelInstance {
    pub fn at(model: i32, entity: i32, x: f32, y: f32, z: f32) -> Self {
        Self {
            model,
            entity,
            x,
            y,
            z,
            tint: [1.0, 1.0, 1.0],
            rotation: 0.0,
            scale: [1.0, 1.0, 1.0],
        }
    }

    pub fn with_tint(mut self, tint: [f32; 3]) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: [f32; 3]) -> Self {
        self.scale = scale;
        self
    }
}

/// Instance for a placed building; incomplete buildings render tinted.
pub fn building_instance(
    model: i32,
    entity: i32,
    x: f32,
    y: f32,
    z: f32,
    rotation: f32,
    complete: bool,
) -> ModelInstance {
    let inst = ModelInstance::at(model, entity, x, y, z).with_rotation(rotation);
    if complete {
        inst
    } else {
        inst.with_tint(INCOMPLETE_TINT)
    }
}

/// Groups instances by model id for batched draws. Iteration is by ascending
/// model id, so a rebuilt buffer with the same content draws identically.
#[derive(Default, Clone, Debug)]
pub struct InstanceBuffer {
    by_model: BTreeMap<i32, Vec<ModelInstance>>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.by_model.clear();
    }

    pub fn push(&mut self, inst: ModelInstance) {
        self.by_model.entry(inst.model).or_default().push(inst);
    }

    pub fn extend(&mut self, instances: impl IntoIterator<Item = ModelInstance>) {
        for inst in instances {
            self.push(inst);
        }
    }

    pub fn len(&self) -> usize {
        self.by_model.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_model.is_empty()
    }

    /// Batches in ascending model-id order.
    pub fn batches(&self) -> impl Iterator<Item = (i32, &[ModelInstance])> {
        self.by_model.iter().map(|(&model, v)| (model, v.as_slice()))
    }
}

/// Per-entity memoized composite instance lists.
#[derive(Default, Clone, Debug)]
pub struct CompositeCache {
    cache: HashMap<i32, Vec<ModelInstance>>,
}

impl CompositeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached composite for the entity, building it on miss.
    pub fn get_or_build(
        &mut self,
        entity: i32,
        build: impl FnOnce() -> Vec<ModelInstance>,
    ) -> &[ModelInstance] {
        self.cache.entry(entity).or_insert_with(build)
    }

    /// Drops the cached composite so the next lookup rebuilds it.
    pub fn invalidate(&mut self, entity: i32) {
        self.cache.remove(&entity);
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
