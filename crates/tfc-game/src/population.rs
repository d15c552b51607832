//! Population systems: spawning, mating, births, and census over an ECS world.
//!
//! The world must hold a [`Calendar`] resource; every system reads today's
//! day count from it.

use std::collections::HashMap;

use bevy_ecs::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::ai::brain::BehaviorSet;
use crate::animal::Animal;
use crate::breeding::{self, BreedingError};
use crate::calendar::{Calendar, CalendarError, DayCounter};
use crate::components::{BoundingBox, Health, MovementSpeed};
use crate::gender::Gender;
use crate::growth::Age;
use crate::species::{SpeciesError, SpeciesRegistry};

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error(transparent)]
    Species(#[from] SpeciesError),

    #[error(transparent)]
    Breeding(#[from] BreedingError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Counts of living animals by life stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Census {
    pub juveniles: usize,
    pub adults: usize,
    pub pregnant: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.juveniles + self.adults
    }
}

fn today(world: &World) -> i64 {
    world.resource::<Calendar>().total_days()
}

/// Spawn an animal with its species' stats and behavior list.
pub fn spawn_animal(
    world: &mut World,
    registry: &SpeciesRegistry,
    animal: Animal,
) -> Result<Entity, PopulationError> {
    let def = registry.require(&animal.type_id)?;
    let bundle = (
        BehaviorSet::new(def.behaviors.clone()),
        Health::full(def.max_health),
        BoundingBox {
            width: def.bb_width,
            height: def.bb_height,
        },
        MovementSpeed(def.movement_speed),
    );
    Ok(world.spawn((animal, bundle)).id())
}

/// Spawn `count` parentless animals of one species with randomized ages.
pub fn system_spawn_population<R: Rng + ?Sized>(
    world: &mut World,
    registry: &SpeciesRegistry,
    type_id: &str,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Entity>, PopulationError> {
    let day = today(world);
    let def = registry.require(type_id)?;
    let mut spawned = Vec::with_capacity(count);
    for _ in 0..count {
        let animal = Animal::spawn(def, day, rng);
        debug!(
            "Spawned {} ({:?}) born day {}",
            type_id,
            animal.gender,
            animal.growth.birth_day()
        );
        spawned.push(spawn_animal(world, registry, animal)?);
    }
    info!("Spawned {} x {} on day {}", count, type_id, day);
    Ok(spawned)
}

/// Pair eligible adults within each species; each pair mates with
/// probability `chance`. Returns the number of new pregnancies.
pub fn system_mating<R: Rng + ?Sized>(
    world: &mut World,
    chance: f64,
    rng: &mut R,
) -> Result<usize, PopulationError> {
    let day = today(world);

    // species -> (males, females)
    let mut candidates: HashMap<String, (Vec<Entity>, Vec<Entity>)> = HashMap::new();
    {
        let mut q = world.query::<(Entity, &Animal)>();
        for (entity, animal) in q.iter(world) {
            if !animal.can_reproduce(day) || animal.is_pregnant() {
                continue;
            }
            let entry = candidates.entry(animal.type_id.clone()).or_default();
            match animal.gender {
                Gender::Male => entry.0.push(entity),
                Gender::Female => entry.1.push(entity),
            }
        }
    }

    // Sort for a seed-stable pairing regardless of map order.
    let mut species: Vec<_> = candidates.into_iter().collect();
    species.sort_by(|a, b| a.0.cmp(&b.0));

    let chance = chance.clamp(0.0, 1.0);
    let mut q = world.query::<&mut Animal>();
    let mut conceived = 0;
    for (_, (mut males, mut females)) in species {
        males.shuffle(rng);
        females.shuffle(rng);
        for (male, female) in males.into_iter().zip(females) {
            if !rng.gen_bool(chance) {
                continue;
            }
            let Ok([mut m, mut f]) = q.get_many_mut(world, [male, female]) else {
                continue;
            };
            breeding::mate(&mut m, &mut f, day)?;
            conceived += 1;
        }
    }
    if conceived > 0 {
        debug!("{} pregnancies on day {}", conceived, day);
    }
    Ok(conceived)
}

/// Deliver every due pregnancy and spawn the offspring. Returns the number of
/// animals born.
pub fn system_births<R: Rng + ?Sized>(
    world: &mut World,
    registry: &SpeciesRegistry,
    rng: &mut R,
) -> Result<usize, PopulationError> {
    let day = today(world);

    let due: Vec<Entity> = {
        let mut q = world.query::<(Entity, &Animal)>();
        q.iter(world)
            .filter(|(_, animal)| {
                let gestation = animal.growth.gestation_days();
                animal
                    .pregnancy
                    .is_some_and(|p| p.is_due(day, gestation))
            })
            .map(|(entity, _)| entity)
            .collect()
    };

    let mut born = 0;
    for mother in due {
        let children = {
            let Some(mut animal) = world.get_mut::<Animal>(mother) else {
                continue;
            };
            let def = registry.require(&animal.type_id)?;
            breeding::give_birth(&mut animal, def, day, rng)?
        };
        born += children.len();
        for child in children {
            spawn_animal(world, registry, child)?;
        }
    }
    if born > 0 {
        info!("{} born on day {}", born, day);
    }
    Ok(born)
}

pub fn census(world: &mut World) -> Census {
    let day = today(world);
    let mut census = Census::default();
    let mut q = world.query::<&Animal>();
    for animal in q.iter(world) {
        match animal.age(day) {
            Age::Juvenile => census.juveniles += 1,
            Age::Adult => census.adults += 1,
        }
        if animal.is_pregnant() {
            census.pregnant += 1;
        }
    }
    census
}
