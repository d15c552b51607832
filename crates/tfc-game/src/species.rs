//! Species definitions.
//!
//! Each species is a value: stats, growth constants, sounds, and a behavior
//! list. The registry holds the built-in species and accepts validated
//! overrides of the growth constants from configuration.

use thiserror::Error;
use tracing::{debug, warn};

use crate::ai::behavior::BehaviorDescriptor;
use crate::ai::species_behaviors;
use crate::growth::GrowthClock;

pub const BEAR: &str = "tfc:bear";

/// Mob category for spawn cap grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesCategory {
    Passive,
    Hostile,
}

#[derive(Debug, Error, PartialEq)]
pub enum SpeciesError {
    #[error("unknown species: {0}")]
    Unknown(String),

    #[error("species already registered: {0}")]
    Duplicate(String),

    #[error("invalid {field} for {type_id}: {value}")]
    InvalidConstant {
        type_id: String,
        field: &'static str,
        value: i64,
    },
}

/// A sound played at a given volume and pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundCue {
    pub name: String,
    pub volume: f32,
    pub pitch: f32,
}

impl SoundCue {
    pub fn new(name: &str) -> Self {
        Self::with(name, 1.0, 1.0)
    }

    pub fn with(name: &str, volume: f32, pitch: f32) -> Self {
        Self {
            name: name.into(),
            volume,
            pitch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Ambient,
    Hurt,
    Death,
    Step,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SoundSet {
    pub ambient: SoundCue,
    pub hurt: SoundCue,
    pub death: SoundCue,
    pub step: SoundCue,
}

impl SoundSet {
    pub fn cue(&self, kind: SoundKind) -> &SoundCue {
        match kind {
            SoundKind::Ambient => &self.ambient,
            SoundKind::Hurt => &self.hurt,
            SoundKind::Death => &self.death,
            SoundKind::Step => &self.step,
        }
    }
}

/// Definition of a species.
#[derive(Debug, Clone)]
pub struct SpeciesDefinition {
    /// Namespaced identifier, e.g. `"tfc:bear"`.
    pub type_id: String,
    pub display_name: String,
    pub category: SpeciesCategory,
    pub max_health: f32,
    pub movement_speed: f32,
    /// Registered attack attribute.
    pub base_attack_damage: f32,
    /// Damage of a melee hit while juvenile.
    pub juvenile_hit_damage: f32,
    /// Damage of a melee hit once adult.
    pub adult_hit_damage: f32,
    pub bb_width: f32,
    pub bb_height: f32,
    /// Days from birth until fully grown.
    pub adulthood_days: i64,
    /// Days a pregnancy lasts.
    pub gestation_days: i64,
    pub offspring_per_birth: u32,
    pub sounds: SoundSet,
    pub behaviors: Vec<BehaviorDescriptor>,
}

impl SpeciesDefinition {
    pub fn bear() -> Self {
        Self {
            type_id: BEAR.into(),
            display_name: "Bear".into(),
            category: SpeciesCategory::Hostile,
            max_health: 60.0,
            movement_speed: 0.4,
            base_attack_damage: 3.0,
            juvenile_hit_damage: 2.0,
            adult_hit_damage: 4.0,
            bb_width: 1.2,
            bb_height: 1.2,
            adulthood_days: 1800,
            gestation_days: 210,
            offspring_per_birth: 1,
            sounds: SoundSet {
                ambient: SoundCue::new("entity.polar_bear.ambient"),
                hurt: SoundCue::new("entity.polar_bear.hurt"),
                death: SoundCue::new("entity.polar_bear.death"),
                step: SoundCue::with("entity.polar_bear.step", 0.15, 1.0),
            },
            behaviors: species_behaviors::bear_behaviors(),
        }
    }

    /// Growth clock for an individual of this species born on `birth_day`.
    pub fn growth_clock(&self, birth_day: i64) -> GrowthClock {
        GrowthClock::new(birth_day, self.adulthood_days, self.gestation_days)
    }
}

/// Optional replacements for a species' growth constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeciesOverrides {
    pub adulthood_days: Option<i64>,
    pub gestation_days: Option<i64>,
    pub offspring_per_birth: Option<u32>,
}

/// Registry of known species.
#[derive(Debug)]
pub struct SpeciesRegistry {
    species: Vec<SpeciesDefinition>,
}

impl Default for SpeciesRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeciesRegistry {
    /// Build the registry with all built-in species.
    pub fn new() -> Self {
        Self {
            species: vec![SpeciesDefinition::bear()],
        }
    }

    pub fn get(&self, type_id: &str) -> Option<&SpeciesDefinition> {
        self.species.iter().find(|s| s.type_id == type_id)
    }

    /// Like [`get`](Self::get) but with a typed failure for unknown ids.
    pub fn require(&self, type_id: &str) -> Result<&SpeciesDefinition, SpeciesError> {
        self.get(type_id)
            .ok_or_else(|| SpeciesError::Unknown(type_id.into()))
    }

    pub fn all(&self) -> &[SpeciesDefinition] {
        &self.species
    }

    pub fn register(&mut self, def: SpeciesDefinition) -> Result<(), SpeciesError> {
        if self.get(&def.type_id).is_some() {
            return Err(SpeciesError::Duplicate(def.type_id));
        }
        debug!("Registered species {}", def.type_id);
        self.species.push(def);
        Ok(())
    }

    /// Apply configured constant overrides to one species.
    ///
    /// All values are validated before any is written.
    pub fn apply_overrides(
        &mut self,
        type_id: &str,
        overrides: &SpeciesOverrides,
    ) -> Result<(), SpeciesError> {
        let invalid = |field: &'static str, value: i64| SpeciesError::InvalidConstant {
            type_id: type_id.into(),
            field,
            value,
        };
        if let Some(days) = overrides.adulthood_days.filter(|d| *d <= 0) {
            return Err(invalid("adulthood_days", days));
        }
        if let Some(days) = overrides.gestation_days.filter(|d| *d <= 0) {
            return Err(invalid("gestation_days", days));
        }
        if overrides.offspring_per_birth == Some(0) {
            return Err(invalid("offspring_per_birth", 0));
        }

        let def = self
            .species
            .iter_mut()
            .find(|s| s.type_id == type_id)
            .ok_or_else(|| SpeciesError::Unknown(type_id.into()))?;
        if let Some(days) = overrides.adulthood_days {
            if days != def.adulthood_days {
                warn!(
                    "{}: adulthood_days overridden {} -> {}",
                    type_id, def.adulthood_days, days
                );
            }
            def.adulthood_days = days;
        }
        if let Some(days) = overrides.gestation_days {
            def.gestation_days = days;
        }
        if let Some(count) = overrides.offspring_per_birth {
            def.offspring_per_birth = count;
        }
        Ok(())
    }
}
