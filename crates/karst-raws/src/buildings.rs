use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// One capability a building grants. Entries may carry an alternate display
/// model that replaces the stock model for tiles the building occupies.
#[derive(Clone, Debug, Deserialize)]
pub struct Provides {
    pub ability: String,
    #[serde(default)]
    pub alternate_model: i32,
}

#[derive(Clone, Debug)]
pub struct BuildingDef {
    pub tag: String,
    pub name: String,
    /// Stock voxel model drawn for the assembled building.
    pub model: i32,
    pub provides: Vec<Provides>,
}

#[derive(Default, Clone, Debug)]
pub struct BuildingCatalog {
    pub by_tag: HashMap<String, BuildingDef>,
}

impl BuildingCatalog {
    pub fn new() -> Self {
        Self {
            by_tag: HashMap::new(),
        }
    }

    pub fn get(&self, tag: &str) -> Option<&BuildingDef> {
        self.by_tag.get(tag)
    }

    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BuildingsConfig = toml::from_str(toml_str)?;
        let mut catalog = BuildingCatalog::new();
        for (tag, entry) in cfg.buildings {
            catalog.by_tag.insert(
                tag.clone(),
                BuildingDef {
                    name: entry.name.unwrap_or_else(|| tag.clone()),
                    tag,
                    model: entry.model,
                    provides: entry.provides,
                },
            );
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct BuildingsConfig {
    pub buildings: HashMap<String, BuildingEntry>,
}

#[derive(Deserialize)]
pub struct BuildingEntry {
    pub name: Option<String>,
    #[serde(default)]
    pub model: i32,
    #[serde(default)]
    pub provides: Vec<Provides>,
}
