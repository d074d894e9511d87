//! Demo driver: builds a small region, runs full and incremental chunk
//! rebuilds, and logs the resulting geometry statistics.

mod scene;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use karst_chunks::ChunkStore;
use karst_raws::{BuildingCatalog, MaterialCatalog, PlantCatalog};
use karst_render::{CompositeCache, InstanceBuffer, building_instance};
use karst_world::{RegionDims, TileKind};

#[derive(Parser, Debug)]
#[command(name = "karst", about = "Chunked voxel extraction demo")]
struct Args {
    /// Region width in tiles (multiple of the chunk edge)
    #[arg(long, default_value_t = 64)]
    width: usize,
    /// Region height in tiles (multiple of the chunk edge)
    #[arg(long, default_value_t = 64)]
    height: usize,
    /// Region depth in z-layers (multiple of the chunk edge)
    #[arg(long, default_value_t = 32)]
    depth: usize,
    /// Chunk edge length
    #[arg(long, default_value_t = 16)]
    chunk: usize,
    /// Directory holding materials.toml / buildings.toml / plants.toml
    #[arg(long, default_value = "assets/raws")]
    raws: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let materials = MaterialCatalog::from_path(args.raws.join("materials.toml"))?;
    let buildings = BuildingCatalog::from_path(args.raws.join("buildings.toml"))?;
    let plants = PlantCatalog::from_path(args.raws.join("plants.toml"))?;
    info!(
        "raws loaded: {} materials, {} buildings, {} plants",
        materials.len(),
        buildings.len(),
        plants.len()
    );

    let dims = RegionDims::new(args.width, args.height, args.depth, args.chunk);
    let (mut grid, sites) = scene::build(dims, &materials, &plants);

    let mut store = ChunkStore::new(dims);
    let rebuilt = store.drain_dirty(&grid, &materials, &buildings, &sites);
    info!("initial rebuild: {} chunks", rebuilt.len());
    log_geometry(&store, dims);

    // Incremental pass: dig a small stairwell shaft and rescan only the
    // chunks it touches.
    let shaft = dims.tile_index(10, 10, dims.depth / 2);
    grid.set_kind(shaft, TileKind::StairsDown);
    store.mark_dirty_by_tile(shaft);
    let below = dims.tile_index(10, 10, dims.depth / 2 - 1);
    grid.set_kind(below, TileKind::StairsUp);
    grid.set_revealed(below, true);
    store.mark_dirty_by_tile(below);

    let rebuilt = store.drain_dirty(&grid, &materials, &buildings, &sites);
    info!("after digging stairs: rebuilt chunks {rebuilt:?}");

    // Render-side composite caching for placed buildings.
    let mut composites = CompositeCache::new();
    let mut frame = InstanceBuffer::new();
    for (entity, def_tag, x, y, z, complete) in scene::placed_buildings(dims) {
        if let Some(def) = buildings.get(def_tag) {
            let parts = composites.get_or_build(entity, || {
                vec![building_instance(
                    def.model, entity, x, y, z, 0.0, complete,
                )]
            });
            frame.extend(parts.iter().copied());
        }
    }
    info!(
        "render frame: {} building instances across {} batches, {} composites cached",
        frame.len(),
        frame.batches().count(),
        composites.len()
    );

    Ok(())
}

fn log_geometry(store: &ChunkStore, dims: RegionDims) {
    let mut floors = 0usize;
    let mut cubes = 0usize;
    let mut design = 0usize;
    let mut models = 0usize;
    let mut vegetation = 0usize;
    for chunk in 0..dims.chunk_count() {
        for layer in 0..dims.chunk {
            floors += store.floor_rects(chunk, layer).len();
            cubes += store.cube_rects(chunk, layer).len();
            design += store.design_rects(chunk, layer).len();
        }
        models += store.models(chunk).len();
        vegetation += store.vegetation(chunk).len();
    }
    info!(
        "geometry: {floors} floor rects, {cubes} cube rects, {design} design rects, \
         {models} static models, {vegetation} vegetation instances over {} tiles",
        dims.tile_count()
    );
}
