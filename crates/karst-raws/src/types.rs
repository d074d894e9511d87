use serde::{Deserialize, Serialize};

/// Index into the material catalog.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u16);

/// Index into the plant catalog.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlantId(pub u16);

/// Growth stage of planted or wild vegetation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VegLifecycle {
    Germinating = 0,
    Sprouting = 1,
    Growing = 2,
    Flowering = 3,
}

impl VegLifecycle {
    /// Returns the `[0..4)` index of this stage.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a stage index `[0..4)` back into a `VegLifecycle` value.
    /// Falls back to `Growing` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> VegLifecycle {
        match i {
            0 => VegLifecycle::Germinating,
            1 => VegLifecycle::Sprouting,
            2 => VegLifecycle::Growing,
            3 => VegLifecycle::Flowering,
            _ => VegLifecycle::Growing,
        }
    }
}
