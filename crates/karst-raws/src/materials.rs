use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::types::MaterialId;

/// Texture ids a material resolves to, split by surface and by whether the
/// tile was built or occurs naturally.
#[derive(Clone, Debug)]
pub struct MaterialDef {
    pub id: MaterialId,
    pub key: String,
    pub name: String,
    pub floor_texture: u32,
    pub constructed_floor_texture: u32,
    pub wall_texture: u32,
    pub constructed_wall_texture: u32,
}

#[derive(Default, Clone, Debug)]
pub struct MaterialCatalog {
    pub materials: Vec<MaterialDef>,
    pub by_key: HashMap<String, MaterialId>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    pub fn get_id(&self, key: &str) -> Option<MaterialId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: MaterialId) -> Option<&MaterialDef> {
        self.materials.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        let mut catalog = MaterialCatalog::new();
        let mut entries: Vec<(String, MaterialEntry)> = cfg.materials.into_iter().collect();
        // HashMap iteration order is nondeterministic; sort keys so MaterialId assignment is stable.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, entry) in entries {
            let id = MaterialId(catalog.materials.len() as u16);
            catalog.by_key.insert(key.clone(), id);
            // Constructed variants default to the natural texture when unset.
            let constructed_floor = entry.floor_constructed.unwrap_or(entry.floor);
            let constructed_wall = entry.wall_constructed.unwrap_or(entry.wall);
            catalog.materials.push(MaterialDef {
                id,
                name: entry.name.unwrap_or_else(|| key.clone()),
                key,
                floor_texture: entry.floor,
                constructed_floor_texture: constructed_floor,
                wall_texture: entry.wall,
                constructed_wall_texture: constructed_wall,
            });
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
pub struct MaterialsConfig {
    pub materials: HashMap<String, MaterialEntry>,
}

#[derive(Deserialize)]
pub struct MaterialEntry {
    pub name: Option<String>,
    pub floor: u32,
    #[serde(default)]
    pub floor_constructed: Option<u32>,
    pub wall: u32,
    #[serde(default)]
    pub wall_constructed: Option<u32>,
}
