use std::collections::BTreeMap;

use karst_raws::{BuildingCatalog, MaterialCatalog};
use karst_world::{TileKind, TileSource};
use log::debug;

use crate::classify::{
    MODEL_FARM_PLOT, MODEL_STAIRS_DOWN, MODEL_STAIRS_UP, MODEL_STAIRS_UPDOWN, TEX_FALLBACK,
    VEG_TRUNK, cube_texture, design_texture, door_model, floor_texture,
};
use crate::merge::merge_layer_rects;
use crate::sites::SiteIndex;
use crate::store::{ChunkStore, CubeRect, VegInstance};

impl ChunkStore {
    /// Rebuilds every dirty chunk, then clears the whole dirty set. The
    /// bit-clearing is atomic relative to the batch: bits set before this call
    /// are consumed as one unit.
    pub fn rebuild_dirty<G: TileSource, S: SiteIndex>(
        &mut self,
        grid: &G,
        materials: &MaterialCatalog,
        buildings: &BuildingCatalog,
        sites: &S,
    ) {
        for chunk in 0..self.chunks.len() {
            if self.dirty.is_marked(chunk) {
                self.rebuild_chunk(chunk, grid, materials, buildings, sites);
            }
        }
        self.dirty.clear();
    }

    /// Like [`rebuild_dirty`](Self::rebuild_dirty), but reports which chunks
    /// were rebuilt, in ascending index order.
    pub fn drain_dirty<G: TileSource, S: SiteIndex>(
        &mut self,
        grid: &G,
        materials: &MaterialCatalog,
        buildings: &BuildingCatalog,
        sites: &S,
    ) -> Vec<usize> {
        let mut changed = Vec::new();
        for chunk in 0..self.chunks.len() {
            if self.dirty.is_marked(chunk) {
                self.rebuild_chunk(chunk, grid, materials, buildings, sites);
                changed.push(chunk);
            }
        }
        self.dirty.clear();
        changed
    }

    /// Full rescan of one chunk volume. All cached buffers are cleared first,
    /// so a rebuild fully replaces the previous contents before control
    /// returns; a half-updated chunk is never observable.
    pub fn rebuild_chunk<G: TileSource, S: SiteIndex>(
        &mut self,
        chunk: usize,
        grid: &G,
        materials: &MaterialCatalog,
        buildings: &BuildingCatalog,
        sites: &S,
    ) {
        let dims = self.dims;
        let c = &mut self.chunks[chunk];
        for layer in &mut c.layers {
            layer.clear();
        }
        c.models.clear();
        c.vegetation.clear();

        let base_x = c.base_x as usize;
        let base_y = c.base_y as usize;
        let base_z = c.base_z as usize;

        for lz in 0..dims.chunk {
            let z = base_z + lz;
            let mut floors: BTreeMap<usize, u32> = BTreeMap::new();
            let mut cubes: BTreeMap<usize, u32> = BTreeMap::new();
            let mut design: BTreeMap<usize, u32> = BTreeMap::new();

            for ly in 0..dims.chunk {
                let y = base_y + ly;
                for lx in 0..dims.chunk {
                    let x = base_x + lx;
                    let idx = dims.tile_index(x, y, z);
                    let kind = grid.kind(idx);

                    // The planning overlay covers every tile, revealed or not.
                    design.insert(idx, design_texture(grid, materials, idx));

                    if kind == TileKind::OpenSpace {
                        continue;
                    }
                    if !grid.is_revealed(idx) {
                        // Unexplored volume renders as a featureless solid.
                        cubes.insert(idx, TEX_FALLBACK);
                        continue;
                    }

                    let (px, py, pz) = (x as i32, y as i32, z as i32);
                    match kind {
                        TileKind::Floor => {
                            floors.insert(idx, floor_texture(grid, materials, idx));
                            if sites.farm_at(idx) {
                                c.models
                                    .entry(MODEL_FARM_PLOT)
                                    .or_default()
                                    .push((px, py, pz));
                            }
                            if let Some((plant, stage)) = grid.vegetation(idx) {
                                if !grid.is_construction(idx) {
                                    c.vegetation.push(VegInstance {
                                        plant: plant.0 as i32,
                                        stage: stage.index() as i32,
                                        x: px,
                                        y: py,
                                        z: pz,
                                    });
                                }
                            }
                        }
                        TileKind::TreeTrunk => {
                            c.vegetation.push(VegInstance {
                                plant: VEG_TRUNK,
                                stage: 0,
                                x: px,
                                y: py,
                                z: pz,
                            });
                        }
                        TileKind::Solid
                        | TileKind::SemiMolten
                        | TileKind::Wall
                        | TileKind::Ramp
                        | TileKind::TreeFoliage
                        | TileKind::Window => {
                            cubes.insert(idx, cube_texture(grid, materials, idx));
                        }
                        TileKind::StairsUp => {
                            c.models
                                .entry(MODEL_STAIRS_UP)
                                .or_default()
                                .push((px, py, pz));
                        }
                        TileKind::StairsDown => {
                            c.models
                                .entry(MODEL_STAIRS_DOWN)
                                .or_default()
                                .push((px, py, pz));
                        }
                        TileKind::StairsUpDown => {
                            c.models
                                .entry(MODEL_STAIRS_UPDOWN)
                                .or_default()
                                .push((px, py, pz));
                        }
                        TileKind::ClosedDoor => {
                            let model = door_model(grid, buildings, sites, idx);
                            c.models.entry(model).or_default().push((px, py, pz));
                        }
                        TileKind::OpenSpace => {}
                    }
                }
            }

            let layer = &mut c.layers[lz];
            layer.floors = merge_layer_rects(&mut floors, &dims, base_x, base_y);
            layer.cubes = merge_layer_rects(&mut cubes, &dims, base_x, base_y)
                .into_iter()
                .map(CubeRect::from_run)
                .collect();
            layer.design = merge_layer_rects(&mut design, &dims, base_x, base_y);
        }

        debug!(
            "chunk {} rebuilt: {} floor / {} cube / {} design rects, {} models, {} vegetation",
            chunk,
            c.layers.iter().map(|l| l.floors.len()).sum::<usize>(),
            c.layers.iter().map(|l| l.cubes.len()).sum::<usize>(),
            c.layers.iter().map(|l| l.design.len()).sum::<usize>(),
            c.models.values().map(Vec::len).sum::<usize>(),
            c.vegetation.len()
        );
    }
}
