use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::types::{PlantId, VegLifecycle};

/// Plant species definition. The mesher never reads these; the tooltip layer
/// uses the stage labels and harvest mapping.
#[derive(Clone, Debug)]
pub struct PlantDef {
    pub id: PlantId,
    pub key: String,
    pub name: String,
    /// Display labels for the four lifecycle stages, in stage order.
    pub stages: [String; 4],
    /// Item tag produced when harvested at flowering, if any.
    pub harvest: Option<String>,
}

impl PlantDef {
    /// Label shown for the plant at the given growth stage.
    pub fn stage_label(&self, stage: VegLifecycle) -> &str {
        &self.stages[stage.index()]
    }
}

#[derive(Default, Clone, Debug)]
pub struct PlantCatalog {
    pub plants: Vec<PlantDef>,
    pub by_key: HashMap<String, PlantId>,
}

impl PlantCatalog {
    pub fn new() -> Self {
        Self {
            plants: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    pub fn get_id(&self, key: &str) -> Option<PlantId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: PlantId) -> Option<&PlantDef> {
        self.plants.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: PlantsConfig = toml::from_str(toml_str)?;
        let mut catalog = PlantCatalog::new();
        let mut entries: Vec<(String, PlantEntry)> = cfg.plants.into_iter().collect();
        // Sorted keys keep PlantId assignment stable across loads.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, entry) in entries {
            let id = PlantId(catalog.plants.len() as u16);
            catalog.by_key.insert(key.clone(), id);
            let mut stages: [String; 4] = [
                "germinating".to_string(),
                "sprouting".to_string(),
                "growing".to_string(),
                "flowering".to_string(),
            ];
            for (slot, label) in stages.iter_mut().zip(entry.stages.into_iter()) {
                *slot = label;
            }
            catalog.plants.push(PlantDef {
                id,
                name: entry.name.unwrap_or_else(|| key.clone()),
                key,
                stages,
                harvest: entry.harvest,
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
pub struct PlantsConfig {
    pub plants: HashMap<String, PlantEntry>,
}

#[derive(Deserialize)]
pub struct PlantEntry {
    pub name: Option<String>,
    #[serde(default)]
    pub stages: Vec<String>,
    #[serde(default)]
    pub harvest: Option<String>,
}
