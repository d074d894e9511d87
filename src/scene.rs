//! Deterministic demo scene: enough tile variety to exercise every
//! classification path without a worldgen dependency.

use karst_chunks::SiteTable;
use karst_raws::{MaterialCatalog, MaterialId, PlantCatalog, PlantId, VegLifecycle};
use karst_world::{DenseTileGrid, RegionDims, TileKind};

/// Building entities placed by [`build`]: (entity id, definition tag, x, y,
/// z, complete).
pub fn placed_buildings(dims: RegionDims) -> Vec<(i32, &'static str, f32, f32, f32, bool)> {
    let z = (dims.depth / 2) as f32;
    vec![
        (1, "door", 24.0, 28.0, z, true),
        (2, "ornate_door", 20.0, 24.0, z, false),
    ]
}

/// Fills a grid with a layered scene: solid rock below a surface of soil
/// floors, a walled room with a window and doors, a stockpile, a farm, and a
/// tree. Everything at or below the surface starts revealed; deeper rock
/// stays fogged.
pub fn build(
    dims: RegionDims,
    materials: &MaterialCatalog,
    plants: &PlantCatalog,
) -> (DenseTileGrid, SiteTable) {
    let granite = materials.get_id("granite").unwrap_or(MaterialId(0));
    let soil = materials.get_id("soil").unwrap_or(MaterialId(0));
    let wheat = plants.get_id("wheat").unwrap_or(PlantId(0));

    let surface = dims.depth / 2;
    let mut grid = DenseTileGrid::new(dims);
    let mut sites = SiteTable::new();

    // Solid rock below the surface; only the top rock layer is revealed.
    for z in 0..surface {
        for y in 0..dims.height {
            for x in 0..dims.width {
                let idx = dims.tile_index(x, y, z);
                grid.set_kind(idx, TileKind::Solid);
                grid.set_material(idx, granite);
                if z + 1 == surface {
                    grid.set_revealed(idx, true);
                }
            }
        }
    }

    // Surface layer: open soil floors.
    for y in 0..dims.height {
        for x in 0..dims.width {
            let idx = dims.tile_index(x, y, surface);
            grid.set_kind(idx, TileKind::Floor);
            grid.set_material(idx, soil);
            grid.set_revealed(idx, true);
        }
    }
    // The airy layer above is revealed open space.
    if surface + 1 < dims.depth {
        for y in 0..dims.height {
            for x in 0..dims.width {
                grid.set_revealed(dims.tile_index(x, y, surface + 1), true);
            }
        }
    }

    // A constructed granite room spanning (20..29, 20..29) with a window in
    // the north wall and doors east and south.
    for y in 20..29 {
        for x in 20..29 {
            let on_edge = x == 20 || x == 28 || y == 20 || y == 28;
            if !on_edge {
                continue;
            }
            let idx = dims.tile_index(x, y, surface);
            grid.set_kind(idx, TileKind::Wall);
            grid.set_material(idx, granite);
            grid.set_construction(idx, true);
        }
    }
    grid.set_kind(dims.tile_index(24, 20, surface), TileKind::Window);
    let front_door = dims.tile_index(24, 28, surface);
    grid.set_kind(front_door, TileKind::ClosedDoor);
    grid.set_building(front_door, 1);
    sites.add_building(1, "door");
    let side_door = dims.tile_index(20, 24, surface);
    grid.set_kind(side_door, TileKind::ClosedDoor);
    grid.set_building(side_door, 2);
    sites.add_building(2, "ornate_door");

    // Stockpile floors in the room's corner.
    for y in 22..24 {
        for x in 21..24 {
            grid.set_stockpile(dims.tile_index(x, y, surface), 1);
        }
    }

    // A farm strip cycling through every lifecycle stage.
    for (offset, stage) in [
        VegLifecycle::Germinating,
        VegLifecycle::Sprouting,
        VegLifecycle::Growing,
        VegLifecycle::Flowering,
    ]
    .into_iter()
    .enumerate()
    {
        for y in 34..38 {
            let idx = dims.tile_index(8 + offset, y, surface);
            grid.set_vegetation(idx, wheat, stage);
            sites.add_farm(idx);
        }
    }

    // One tree: trunk column with a foliage cap.
    for dz in 0..3 {
        let z = surface + dz;
        if z >= dims.depth {
            break;
        }
        let idx = dims.tile_index(40, 40, z);
        grid.set_kind(idx, TileKind::TreeTrunk);
        grid.set_revealed(idx, true);
    }
    if surface + 3 < dims.depth {
        let cap = dims.tile_index(40, 40, surface + 3);
        grid.set_kind(cap, TileKind::TreeFoliage);
        grid.set_revealed(cap, true);
    }

    // A ramp up the quarry edge.
    let ramp = dims.tile_index(4, 4, surface);
    grid.set_kind(ramp, TileKind::Ramp);
    grid.set_material(ramp, granite);

    (grid, sites)
}
