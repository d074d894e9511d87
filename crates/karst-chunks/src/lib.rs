//! Chunked extraction of renderable geometry from the tile grid.
//!
//! The region is partitioned into fixed-size cubic chunks; each chunk caches
//! per-z-layer rectangle lists (floors, cubes, design overlay) plus static
//! model and vegetation instance lists. Tile mutations flag chunks dirty and
//! an explicit drain rescans only those, replacing their buffers wholesale.
#![forbid(unsafe_code)]

mod classify;
mod dirty;
mod merge;
mod sites;
mod store;
mod update;

pub use classify::{
    MODEL_DOOR_DEFAULT, MODEL_FARM_PLOT, MODEL_STAIRS_DOWN, MODEL_STAIRS_UP, MODEL_STAIRS_UPDOWN,
    TEX_FALLBACK, TEX_FLOWERING, TEX_GERMINATING, TEX_GRASS, TEX_SPROUTING, TEX_STOCKPILE,
    TEX_TREE_LEAF, TEX_TREE_TRUNK, TEX_WINDOW, VEG_TRUNK, cube_texture, design_texture,
    door_model, floor_texture,
};
pub use dirty::DirtyMap;
pub use merge::merge_layer_rects;
pub use sites::{SiteIndex, SiteTable};
pub use store::{Chunk, ChunkStore, CubeRect, FloorRect, Layer, StaticModel, VegInstance};
