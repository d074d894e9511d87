use std::collections::BTreeMap;

use karst_world::RegionDims;

use crate::dirty::DirtyMap;

/// Merged rectangle for floor and design-overlay geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FloorRect {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
    pub h: i32,
    pub tex: u32,
}

/// Merged rectangle for cube geometry. Depth is always 1: cubes merge in the
/// horizontal plane only, never across z-layers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CubeRect {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
    pub h: i32,
    pub d: i32,
    pub tex: u32,
}

impl CubeRect {
    #[inline]
    pub fn from_run(r: FloorRect) -> CubeRect {
        CubeRect {
            x: r.x,
            y: r.y,
            z: r.z,
            w: r.w,
            h: r.h,
            d: 1,
            tex: r.tex,
        }
    }
}

/// One placed vegetation model. `plant == VEG_TRUNK` marks a tree trunk with
/// stage 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VegInstance {
    pub plant: i32,
    pub stage: i32,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// One placed static voxel model (stairs, doors, farm plots).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StaticModel {
    pub model: i32,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Geometry for one z-slice of a chunk.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub floors: Vec<FloorRect>,
    pub cubes: Vec<CubeRect>,
    pub design: Vec<FloorRect>,
}

impl Layer {
    pub(crate) fn clear(&mut self) {
        self.floors.clear();
        self.cubes.clear();
        self.design.clear();
    }
}

/// One chunk record. Created once at store construction; only the buffer
/// contents cycle through clear/repopulate on rebuild.
#[derive(Clone, Debug)]
pub struct Chunk {
    pub index: usize,
    pub base_x: i32,
    pub base_y: i32,
    pub base_z: i32,
    pub layers: Vec<Layer>,
    pub models: BTreeMap<i32, Vec<(i32, i32, i32)>>,
    pub vegetation: Vec<VegInstance>,
}

/// Owned arena of chunk records covering the whole region, with the dirty
/// bitset that drives incremental rebuilds.
pub struct ChunkStore {
    pub(crate) dims: RegionDims,
    pub(crate) chunks: Vec<Chunk>,
    pub(crate) dirty: DirtyMap,
}

impl ChunkStore {
    /// Builds the partition table and marks every chunk dirty, so the first
    /// drain performs a full rebuild.
    pub fn new(dims: RegionDims) -> Self {
        let mut chunks = Vec::with_capacity(dims.chunk_count());
        for index in 0..dims.chunk_count() {
            let (bx, by, bz) = dims.chunk_base(index);
            chunks.push(Chunk {
                index,
                base_x: bx as i32,
                base_y: by as i32,
                base_z: bz as i32,
                layers: vec![Layer::default(); dims.chunk],
                models: BTreeMap::new(),
                vegetation: Vec::new(),
            });
        }
        let mut dirty = DirtyMap::new(dims.chunk_count());
        dirty.mark_all();
        Self {
            dims,
            chunks,
            dirty,
        }
    }

    #[inline]
    pub fn dims(&self) -> RegionDims {
        self.dims
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Flags a chunk for rebuild on the next drain. Idempotent.
    pub fn mark_dirty(&mut self, chunk: usize) {
        self.dirty.mark(chunk);
    }

    /// Flags the chunk owning the given tile.
    pub fn mark_dirty_by_tile(&mut self, tile: usize) {
        self.dirty.mark(self.dims.chunk_of_tile_index(tile));
    }

    /// Flags every chunk, forcing a full rebuild on the next drain.
    pub fn mark_all_dirty(&mut self) {
        self.dirty.mark_all();
    }

    #[inline]
    pub fn is_dirty(&self, chunk: usize) -> bool {
        self.dirty.is_marked(chunk)
    }

    #[inline]
    pub fn dirty_count(&self) -> usize {
        self.dirty.count()
    }

    // --- Query interface ---
    //
    // Out-of-range chunk or layer indices are caller bugs and panic via the
    // slice index. Borrows returned here pin the store: the borrow checker
    // enforces the copy-out-before-next-rebuild contract.

    pub fn floor_rects(&self, chunk: usize, layer: usize) -> &[FloorRect] {
        &self.chunks[chunk].layers[layer].floors
    }

    pub fn cube_rects(&self, chunk: usize, layer: usize) -> &[CubeRect] {
        &self.chunks[chunk].layers[layer].cubes
    }

    pub fn design_rects(&self, chunk: usize, layer: usize) -> &[FloorRect] {
        &self.chunks[chunk].layers[layer].design
    }

    /// Flattens the chunk's model bucket into an instance list, grouped by
    /// ascending model id.
    pub fn models(&self, chunk: usize) -> Vec<StaticModel> {
        let c = &self.chunks[chunk];
        let mut out = Vec::new();
        for (&model, positions) in &c.models {
            for &(x, y, z) in positions {
                out.push(StaticModel { model, x, y, z });
            }
        }
        out
    }

    pub fn vegetation(&self, chunk: usize) -> &[VegInstance] {
        &self.chunks[chunk].vegetation
    }

    /// Region-space base coordinate of the chunk.
    pub fn origin(&self, chunk: usize) -> (i32, i32, i32) {
        let c = &self.chunks[chunk];
        (c.base_x, c.base_y, c.base_z)
    }
}
