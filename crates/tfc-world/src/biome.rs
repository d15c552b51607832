//! Biome registry.
//!
//! Built once from a fixed table of identifier → descriptor pairs. Lookups of
//! unknown identifiers fail with [`BiomeError::Unknown`]. Entries can be
//! replaced (e.g. by a data pack) but never removed: every biome in
//! [`REQUIRED_BIOMES`] must stay present.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BiomeError;
use BiomeCategory::*;

/// Broad terrain band of a biome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomeCategory {
    Aquatic,
    Low,
    Mid,
    High,
    Shore,
    /// Edge, lake, and river biomes used by the generator.
    Technical,
}

/// Geological activity of the rock layers under a biome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoAge {
    Old,
    Medium,
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geology {
    pub activity: GeoLevel,
    pub age: GeoAge,
}

/// Definition of a single biome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeDescriptor {
    /// Namespaced identifier, e.g. `"tfc:plains"`.
    pub id: String,
    pub category: BiomeCategory,
    #[serde(default)]
    pub geology: Option<Geology>,
    /// Water bodies in this biome are salt water.
    #[serde(default)]
    pub salt_water: bool,
    #[serde(default)]
    pub description: String,
}

struct BiomeEntry {
    name: &'static str,
    category: BiomeCategory,
    geology: Option<(GeoLevel, GeoAge)>,
    salt_water: bool,
    description: &'static str,
}

const fn entry(
    name: &'static str,
    category: BiomeCategory,
    geology: Option<(GeoLevel, GeoAge)>,
    salt_water: bool,
    description: &'static str,
) -> BiomeEntry {
    BiomeEntry {
        name,
        category,
        geology,
        salt_water,
        description,
    }
}

#[rustfmt::skip]
static BIOME_TABLE: &[BiomeEntry] = &[
    entry("ocean", Aquatic, Some((GeoLevel::Medium, GeoAge::Medium)), true,
        "Ocean found near continents"),
    entry("deep_ocean", Aquatic, Some((GeoLevel::Medium, GeoAge::Medium)), true,
        "Deep ocean covering most of the sea floor"),
    entry("deep_ocean_ridge", Aquatic, Some((GeoLevel::High, GeoAge::New)), true,
        "Deep ocean with snaking ridge formations"),
    entry("plains", Low, Some((GeoLevel::Low, GeoAge::Old)), false,
        "Very flat, slightly above sea level"),
    entry("hills", Low, Some((GeoLevel::Low, GeoAge::Medium)), false,
        "Small hills, slightly above sea level"),
    entry("lowlands", Low, Some((GeoLevel::Low, GeoAge::Old)), false,
        "Flat and swampy with shallow pools below sea level"),
    entry("low_canyons", Low, Some((GeoLevel::Medium, GeoAge::Old)), false,
        "Sharp small hills cut by winding rivers"),
    entry("rolling_hills", Mid, Some((GeoLevel::Medium, GeoAge::Medium)), false,
        "Higher hills with some steep slopes"),
    entry("badlands", Mid, Some((GeoLevel::High, GeoAge::Medium)), false,
        "High flat area with carved relief"),
    entry("plateau", Mid, Some((GeoLevel::Low, GeoAge::New)), false,
        "Very high area with a flat top"),
    entry("old_mountains", Mid, Some((GeoLevel::Medium, GeoAge::Old)), false,
        "Rounded mountains and very large hills"),
    entry("mountains", High, Some((GeoLevel::High, GeoAge::New)), false,
        "Pointed peaks with valleys well above sea level"),
    entry("flooded_mountains", High, Some((GeoLevel::High, GeoAge::Old)), true,
        "Mountains with valleys flooded below sea level"),
    entry("canyons", High, Some((GeoLevel::Medium, GeoAge::New)), false,
        "Very high flat area with steep carved relief"),
    entry("shore", Shore, None, false,
        "Standard shore; material follows the local rock layers"),
    entry("stone_shore", Shore, None, false, "Shore for mountain biomes"),
    entry("mountains_edge", Technical, None, false, "Edge biome for mountains"),
    entry("lake", Technical, None, false, "Freshwater lakes and landlocked seas"),
    entry("river", Technical, None, false, "River channels"),
];

/// Identifiers that every registry must contain.
pub const REQUIRED_BIOMES: &[&str] = &[
    "tfc:ocean",
    "tfc:deep_ocean",
    "tfc:deep_ocean_ridge",
    "tfc:plains",
    "tfc:hills",
    "tfc:lowlands",
    "tfc:low_canyons",
    "tfc:rolling_hills",
    "tfc:badlands",
    "tfc:plateau",
    "tfc:old_mountains",
    "tfc:mountains",
    "tfc:flooded_mountains",
    "tfc:canyons",
    "tfc:shore",
    "tfc:stone_shore",
    "tfc:mountains_edge",
    "tfc:lake",
    "tfc:river",
];

/// Registry of biome descriptors, in table order.
#[derive(Debug, Clone)]
pub struct BiomeRegistry {
    biomes: Vec<BiomeDescriptor>,
}

impl Default for BiomeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BiomeRegistry {
    /// Build the registry from the built-in table.
    pub fn new() -> Self {
        let biomes = BIOME_TABLE
            .iter()
            .map(|e| BiomeDescriptor {
                id: format!("tfc:{}", e.name),
                category: e.category,
                geology: e.geology.map(|(activity, age)| Geology { activity, age }),
                salt_water: e.salt_water,
                description: e.description.into(),
            })
            .collect();
        Self { biomes }
    }

    /// Build a registry from arbitrary descriptors, checking for duplicates
    /// and for every required biome.
    pub fn from_descriptors(biomes: Vec<BiomeDescriptor>) -> Result<Self, BiomeError> {
        for (i, b) in biomes.iter().enumerate() {
            if biomes[..i].iter().any(|other| other.id == b.id) {
                return Err(BiomeError::Duplicate(b.id.clone()));
            }
        }
        let registry = Self { biomes };
        registry.validate()?;
        Ok(registry)
    }

    pub fn get(&self, id: &str) -> Result<&BiomeDescriptor, BiomeError> {
        self.biomes
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| BiomeError::Unknown(id.into()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.biomes.iter().any(|b| b.id == id)
    }

    pub fn all(&self) -> &[BiomeDescriptor] {
        &self.biomes
    }

    pub fn by_category(&self, category: BiomeCategory) -> impl Iterator<Item = &BiomeDescriptor> {
        self.biomes.iter().filter(move |b| b.category == category)
    }

    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }

    /// Replace an existing entry, returning the previous descriptor.
    pub fn replace(&mut self, descriptor: BiomeDescriptor) -> Result<BiomeDescriptor, BiomeError> {
        let slot = self
            .biomes
            .iter_mut()
            .find(|b| b.id == descriptor.id)
            .ok_or_else(|| BiomeError::Unknown(descriptor.id.clone()))?;
        Ok(std::mem::replace(slot, descriptor))
    }

    /// Check that every required biome is present.
    pub fn validate(&self) -> Result<(), BiomeError> {
        match REQUIRED_BIOMES.iter().find(|id| !self.contains(id)) {
            Some(id) => Err(BiomeError::Missing((*id).into())),
            None => Ok(()),
        }
    }

    /// Apply a JSON array of replacement descriptors. Returns how many were
    /// replaced. Nothing is applied if any entry is unknown.
    /// Read a JSON override file and apply it with
    /// [`load_overrides_json`](Self::load_overrides_json).
    pub fn load_overrides_file(&mut self, path: impl AsRef<Path>) -> Result<usize, BiomeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BiomeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.load_overrides_json(&json)
    }

    pub fn load_overrides_json(&mut self, json: &str) -> Result<usize, BiomeError> {
        let overrides: Vec<BiomeDescriptor> = serde_json::from_str(json)?;
        if let Some(unknown) = overrides.iter().find(|d| !self.contains(&d.id)) {
            return Err(BiomeError::Unknown(unknown.id.clone()));
        }
        let count = overrides.len();
        for descriptor in overrides {
            self.replace(descriptor)?;
        }
        Ok(count)
    }
}
