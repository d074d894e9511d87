//! Region addressing and the tile-grid interface boundary.
#![forbid(unsafe_code)]

mod dims;
mod grid;
mod tile;

pub use dims::RegionDims;
pub use grid::DenseTileGrid;
pub use tile::{TileKind, TileSource};
