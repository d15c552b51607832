//! Day-stepped population run.

use bevy_ecs::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tfc_game::calendar::{Calendar, DayCounter};
use tfc_game::population::{self, Census, PopulationError};
use tfc_game::species::SpeciesRegistry;
use tracing::info;

use crate::config::SimulationSection;

/// Census taken on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub day: i64,
    pub census: Census,
    pub born_total: usize,
}

pub struct Simulation {
    world: World,
    registry: SpeciesRegistry,
    rng: StdRng,
    species: String,
    mating_chance: f64,
    born_total: usize,
}

impl Simulation {
    pub fn new(registry: SpeciesRegistry, settings: &SimulationSection) -> Self {
        let mut world = World::new();
        world.insert_resource(Calendar::starting_on_day(settings.start_day));
        Self {
            world,
            registry,
            rng: StdRng::seed_from_u64(settings.seed),
            species: settings.species.clone(),
            mating_chance: settings.mating_chance,
            born_total: 0,
        }
    }

    pub fn today(&self) -> i64 {
        self.world.resource::<Calendar>().total_days()
    }

    /// Spawn the initial, parentless population.
    pub fn populate(&mut self, count: usize) -> Result<(), PopulationError> {
        population::system_spawn_population(
            &mut self.world,
            &self.registry,
            &self.species,
            count,
            &mut self.rng,
        )?;
        Ok(())
    }

    /// Run births and matings for today, then advance one day.
    pub fn step(&mut self) -> Result<(), PopulationError> {
        self.born_total += population::system_births(&mut self.world, &self.registry, &mut self.rng)?;
        population::system_mating(&mut self.world, self.mating_chance, &mut self.rng)?;
        self.world.resource::<Calendar>().advance_days(1)?;
        Ok(())
    }

    pub fn report(&mut self) -> Report {
        Report {
            day: self.today(),
            census: population::census(&mut self.world),
            born_total: self.born_total,
        }
    }

    /// Step `days` times, logging and collecting a report every
    /// `report_interval` days and once at the end.
    pub fn run(&mut self, days: i64, report_interval: i64) -> Result<Vec<Report>, PopulationError> {
        let mut reports = Vec::new();
        for step in 1..=days {
            self.step()?;
            if step % report_interval == 0 || step == days {
                let report = self.report();
                info!(
                    "Day {}: {} juveniles, {} adults, {} pregnant ({} born so far)",
                    report.day,
                    report.census.juveniles,
                    report.census.adults,
                    report.census.pregnant,
                    report.born_total
                );
                reports.push(report);
            }
        }
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfc_game::calendar::CalendarError;

    fn settings(seed: u64) -> SimulationSection {
        SimulationSection {
            seed,
            days: 0,
            start_day: 0,
            initial_population: 0,
            species: tfc_game::species::BEAR.into(),
            report_interval: 365,
            mating_chance: 0.05,
        }
    }

    #[test]
    fn run_advances_calendar_and_reports() {
        let mut sim = Simulation::new(SpeciesRegistry::new(), &settings(1));
        sim.populate(30).unwrap();
        let reports = sim.run(730, 365).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].day, 365);
        assert_eq!(reports[1].day, 730);
        assert_eq!(sim.today(), 730);
        assert!(reports[1].census.total() >= 30);
    }

    #[test]
    fn same_seed_same_outcome() {
        let run = |seed| {
            let mut sim = Simulation::new(SpeciesRegistry::new(), &settings(seed));
            sim.populate(40).unwrap();
            sim.run(1000, 1000).unwrap()
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn calendar_overflow_stops_the_run() {
        let mut section = settings(3);
        section.start_day = i64::MAX / tfc_game::calendar::TICKS_IN_DAY;
        let mut sim = Simulation::new(SpeciesRegistry::new(), &section);
        assert!(matches!(
            sim.run(5, 1),
            Err(PopulationError::Calendar(CalendarError::Overflow(1)))
        ));
    }

    #[test]
    fn final_partial_interval_reported() {
        let mut sim = Simulation::new(SpeciesRegistry::new(), &settings(2));
        let reports = sim.run(10, 4).unwrap();
        let days: Vec<i64> = reports.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![4, 8, 10]);
    }
}
