mod config;
mod simulation;

use config::SimConfig;
use simulation::Simulation;
use tfc_game::species::{SpeciesOverrides, SpeciesRegistry};
use tfc_world::BiomeRegistry;
use tracing::{error, info};

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "sim.toml".into());
    let config = match SimConfig::load(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("tfc-sim v{} starting", env!("CARGO_PKG_VERSION"));

    let mut biomes = BiomeRegistry::new();
    if let Some(overrides) = &config.biomes.overrides {
        match biomes.load_overrides_file(overrides) {
            Ok(n) => info!("Applied {} biome overrides from {}", n, overrides),
            Err(e) => {
                error!("Biome overrides: {e}");
                std::process::exit(1);
            }
        }
    }
    if let Err(e) = biomes.validate() {
        error!("{e}");
        std::process::exit(1);
    }
    info!("Biome registry ready ({} biomes)", biomes.len());

    let mut registry = SpeciesRegistry::new();
    for (type_id, section) in &config.species {
        if let Err(e) = registry.apply_overrides(type_id, &SpeciesOverrides::from(section)) {
            error!("Species config: {e}");
            std::process::exit(1);
        }
    }

    let sim_cfg = &config.simulation;
    info!(
        "Simulating {} x {} for {} days from day {} (seed {})",
        sim_cfg.initial_population, sim_cfg.species, sim_cfg.days, sim_cfg.start_day, sim_cfg.seed
    );

    let mut sim = Simulation::new(registry, sim_cfg);
    let result = sim
        .populate(sim_cfg.initial_population)
        .and_then(|()| sim.run(sim_cfg.days, sim_cfg.report_interval));
    match result {
        Ok(reports) => {
            if let Some(last) = reports.last() {
                info!(
                    "Finished on day {} with {} animals",
                    last.day,
                    last.census.total()
                );
            }
        }
        Err(e) => {
            error!("Simulation failed: {e}");
            std::process::exit(1);
        }
    }
}
