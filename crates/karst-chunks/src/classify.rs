use karst_raws::{BuildingCatalog, MaterialCatalog, VegLifecycle};
use karst_world::{TileKind, TileSource};
use log::warn;

use crate::sites::SiteIndex;

/// Texture drawn when no material or definition resolves; also the opaque
/// "fog" cube shown for unrevealed volume.
pub const TEX_FALLBACK: u32 = 3;
/// Stockpile floors short-circuit to this id before material lookup.
/// Currently the same image as the fallback; kept separate so it can be
/// reassigned without touching the fallback path.
pub const TEX_STOCKPILE: u32 = 3;
/// Grown ground cover renders as the base grass texture.
pub const TEX_GRASS: u32 = 0;
pub const TEX_GERMINATING: u32 = 18;
pub const TEX_SPROUTING: u32 = 21;
pub const TEX_FLOWERING: u32 = 24;
pub const TEX_TREE_TRUNK: u32 = 6;
pub const TEX_TREE_LEAF: u32 = 9;
pub const TEX_WINDOW: u32 = 15;

pub const MODEL_STAIRS_UP: i32 = 23;
pub const MODEL_STAIRS_DOWN: i32 = 24;
pub const MODEL_STAIRS_UPDOWN: i32 = 25;
pub const MODEL_FARM_PLOT: i32 = 116;
pub const MODEL_DOOR_DEFAULT: i32 = 128;

/// Sentinel plant id for tree-trunk vegetation instances.
pub const VEG_TRUNK: i32 = -1;

/// Texture for a floor tile. Priority: stockpile claim, then un-constructed
/// vegetation by lifecycle stage, then the material's floor texture.
pub fn floor_texture<G: TileSource>(grid: &G, materials: &MaterialCatalog, idx: usize) -> u32 {
    if grid.stockpile_id(idx) > 0 {
        return TEX_STOCKPILE;
    }
    if let Some((_, stage)) = grid.vegetation(idx) {
        if !grid.is_construction(idx) {
            return match stage {
                VegLifecycle::Germinating => TEX_GERMINATING,
                VegLifecycle::Sprouting => TEX_SPROUTING,
                VegLifecycle::Growing => TEX_GRASS,
                VegLifecycle::Flowering => TEX_FLOWERING,
            };
        }
    }
    let material = grid.material(idx);
    let Some(def) = materials.get(material) else {
        warn!("material id {} has no definition; floor uses fallback texture", material.0);
        return TEX_FALLBACK;
    };
    if grid.is_construction(idx) {
        def.constructed_floor_texture
    } else {
        def.floor_texture
    }
}

/// Texture for cube-merged tiles (solids, walls, ramps, foliage, windows).
pub fn cube_texture<G: TileSource>(grid: &G, materials: &MaterialCatalog, idx: usize) -> u32 {
    match grid.kind(idx) {
        TileKind::TreeTrunk => return TEX_TREE_TRUNK,
        TileKind::TreeFoliage => return TEX_TREE_LEAF,
        TileKind::Window => return TEX_WINDOW,
        _ => {}
    }
    let material = grid.material(idx);
    let Some(def) = materials.get(material) else {
        warn!("material id {} has no definition; cube uses fallback texture", material.0);
        return TEX_FALLBACK;
    };
    if grid.is_construction(idx) {
        def.constructed_wall_texture
    } else {
        def.wall_texture
    }
}

/// Texture for the planning overlay. Computed for every tile regardless of
/// reveal state: open space and unrevealed tiles take the fallback id, floors
/// reuse the floor rule, everything else the cube rule.
pub fn design_texture<G: TileSource>(grid: &G, materials: &MaterialCatalog, idx: usize) -> u32 {
    let kind = grid.kind(idx);
    if kind == TileKind::OpenSpace {
        return TEX_FALLBACK;
    }
    if !grid.is_revealed(idx) {
        return TEX_FALLBACK;
    }
    match kind {
        TileKind::Floor => floor_texture(grid, materials, idx),
        TileKind::TreeTrunk => TEX_TREE_TRUNK,
        _ => cube_texture(grid, materials, idx),
    }
}

/// Display model for a closed door. The owning building's `provides` list is
/// scanned in declaration order and the last entry carrying a positive
/// alternate model wins; without an owner or an override the stock door model
/// is used.
pub fn door_model<G: TileSource, S: SiteIndex>(
    grid: &G,
    buildings: &BuildingCatalog,
    sites: &S,
    idx: usize,
) -> i32 {
    let mut model = MODEL_DOOR_DEFAULT;
    let building = grid.building_id(idx);
    if building > 0 {
        if let Some(tag) = sites.building_tag(building) {
            if let Some(def) = buildings.get(tag) {
                for p in &def.provides {
                    if p.alternate_model > 0 {
                        model = p.alternate_model;
                    }
                }
            } else {
                warn!("building tag {tag:?} has no definition; door keeps stock model");
            }
        }
    }
    model
}
