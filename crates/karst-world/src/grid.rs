use karst_raws::{MaterialId, PlantId, VegLifecycle};

use crate::dims::RegionDims;
use crate::tile::{TileKind, TileSource};

/// Dense in-memory tile grid implementing [`TileSource`].
///
/// Reference implementation of the grid collaborator, used by the demo driver
/// and the test suites. Tiles start as unrevealed open space with material 0.
#[derive(Clone, Debug)]
pub struct DenseTileGrid {
    dims: RegionDims,
    kinds: Vec<TileKind>,
    materials: Vec<MaterialId>,
    construction: Vec<bool>,
    revealed: Vec<bool>,
    vegetation: Vec<Option<(PlantId, VegLifecycle)>>,
    stockpiles: Vec<u32>,
    buildings: Vec<u32>,
}

impl DenseTileGrid {
    pub fn new(dims: RegionDims) -> Self {
        let n = dims.tile_count();
        Self {
            dims,
            kinds: vec![TileKind::OpenSpace; n],
            materials: vec![MaterialId(0); n],
            construction: vec![false; n],
            revealed: vec![false; n],
            vegetation: vec![None; n],
            stockpiles: vec![0; n],
            buildings: vec![0; n],
        }
    }

    #[inline]
    pub fn dims(&self) -> RegionDims {
        self.dims
    }

    pub fn set_kind(&mut self, idx: usize, kind: TileKind) {
        self.kinds[idx] = kind;
    }

    pub fn set_material(&mut self, idx: usize, material: MaterialId) {
        self.materials[idx] = material;
    }

    pub fn set_construction(&mut self, idx: usize, constructed: bool) {
        self.construction[idx] = constructed;
    }

    pub fn set_revealed(&mut self, idx: usize, revealed: bool) {
        self.revealed[idx] = revealed;
    }

    pub fn reveal_all(&mut self) {
        self.revealed.fill(true);
    }

    pub fn set_vegetation(&mut self, idx: usize, plant: PlantId, stage: VegLifecycle) {
        self.vegetation[idx] = Some((plant, stage));
    }

    pub fn clear_vegetation(&mut self, idx: usize) {
        self.vegetation[idx] = None;
    }

    pub fn set_stockpile(&mut self, idx: usize, stockpile: u32) {
        self.stockpiles[idx] = stockpile;
    }

    pub fn set_building(&mut self, idx: usize, building: u32) {
        self.buildings[idx] = building;
    }
}

impl TileSource for DenseTileGrid {
    #[inline]
    fn kind(&self, idx: usize) -> TileKind {
        self.kinds[idx]
    }

    #[inline]
    fn material(&self, idx: usize) -> MaterialId {
        self.materials[idx]
    }

    #[inline]
    fn is_construction(&self, idx: usize) -> bool {
        self.construction[idx]
    }

    #[inline]
    fn is_revealed(&self, idx: usize) -> bool {
        self.revealed[idx]
    }

    #[inline]
    fn vegetation(&self, idx: usize) -> Option<(PlantId, VegLifecycle)> {
        self.vegetation[idx]
    }

    #[inline]
    fn stockpile_id(&self, idx: usize) -> u32 {
        self.stockpiles[idx]
    }

    #[inline]
    fn building_id(&self, idx: usize) -> u32 {
        self.buildings[idx]
    }
}
