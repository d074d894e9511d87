//! Definition tables: materials, buildings, and plants.
#![forbid(unsafe_code)]

pub mod buildings;
pub mod materials;
pub mod plants;
pub mod types;

pub use buildings::{BuildingCatalog, BuildingDef, Provides};
pub use materials::{MaterialCatalog, MaterialDef};
pub use plants::{PlantCatalog, PlantDef};
pub use types::{MaterialId, PlantId, VegLifecycle};
