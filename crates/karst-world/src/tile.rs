use karst_raws::{MaterialId, PlantId, VegLifecycle};

/// Occupancy class of a single tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileKind {
    #[default]
    OpenSpace,
    Solid,
    SemiMolten,
    Wall,
    Floor,
    Ramp,
    StairsUp,
    StairsDown,
    StairsUpDown,
    TreeTrunk,
    TreeFoliage,
    Window,
    ClosedDoor,
}

/// Read-only view of the tile grid collaborator.
///
/// All accessors take the flat tile index of `RegionDims::tile_index`; callers
/// are responsible for staying within region bounds.
pub trait TileSource {
    fn kind(&self, idx: usize) -> TileKind;
    fn material(&self, idx: usize) -> MaterialId;
    /// True when the tile was built rather than occurring naturally.
    fn is_construction(&self, idx: usize) -> bool;
    /// False while the tile is still hidden by fog of war.
    fn is_revealed(&self, idx: usize) -> bool;
    fn vegetation(&self, idx: usize) -> Option<(PlantId, VegLifecycle)>;
    /// Stockpile id claiming this tile, `0` when unclaimed.
    fn stockpile_id(&self, idx: usize) -> u32;
    /// Building entity id occupying this tile, `0` when none.
    fn building_id(&self, idx: usize) -> u32;
}
