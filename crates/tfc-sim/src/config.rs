use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tfc_game::species::SpeciesOverrides;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
pub struct SimConfig {
    pub simulation: SimulationSection,
    pub logging: LoggingSection,
    /// Growth constant overrides keyed by species id.
    #[serde(default)]
    pub species: BTreeMap<String, SpeciesSection>,
    #[serde(default)]
    pub biomes: BiomesSection,
}

#[derive(Debug, Deserialize)]
pub struct SimulationSection {
    pub seed: u64,
    /// Number of days to simulate.
    pub days: i64,
    #[serde(default)]
    pub start_day: i64,
    pub initial_population: usize,
    #[serde(default = "default_species")]
    pub species: String,
    /// Days between census reports. Default: 365.
    #[serde(default = "default_report_interval")]
    pub report_interval: i64,
    /// Daily probability that an eligible pair mates. Default: 0.01.
    #[serde(default = "default_mating_chance")]
    pub mating_chance: f64,
}

fn default_species() -> String {
    tfc_game::species::BEAR.into()
}

fn default_report_interval() -> i64 {
    365
}

fn default_mating_chance() -> f64 {
    0.01
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    pub level: String,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SpeciesSection {
    pub adulthood_days: Option<i64>,
    pub gestation_days: Option<i64>,
    pub offspring_per_birth: Option<u32>,
}

impl From<&SpeciesSection> for SpeciesOverrides {
    fn from(s: &SpeciesSection) -> Self {
        SpeciesOverrides {
            adulthood_days: s.adulthood_days,
            gestation_days: s.gestation_days,
            offspring_per_birth: s.offspring_per_birth,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BiomesSection {
    /// Optional JSON file of replacement biome descriptors.
    #[serde(default)]
    pub overrides: Option<String>,
}

impl SimConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if sim.days < 0 {
            return Err(ConfigError::Invalid(format!(
                "simulation.days must not be negative (got {})",
                sim.days
            )));
        }
        if sim.report_interval <= 0 {
            return Err(ConfigError::Invalid(format!(
                "simulation.report_interval must be positive (got {})",
                sim.report_interval
            )));
        }
        if !(0.0..=1.0).contains(&sim.mating_chance) {
            return Err(ConfigError::Invalid(format!(
                "simulation.mating_chance must be within [0, 1] (got {})",
                sim.mating_chance
            )));
        }
        Ok(())
    }
}
