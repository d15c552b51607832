//! Pairing, pregnancy, and birth.
//!
//! Only adults of opposite genders and the same species can mate. The female
//! carries for the species' gestation period and then gives birth to
//! offspring whose birth day is the day of birth.

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::animal::Animal;
use crate::gender::Gender;
use crate::species::SpeciesDefinition;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BreedingError {
    #[error("cannot pair {0} with {1}")]
    SpeciesMismatch(String, String),

    #[error("both partners are {0:?}")]
    SameGender(Gender),

    #[error("partner is not an adult")]
    NotAdult,

    #[error("female is already pregnant")]
    AlreadyPregnant,

    #[error("animal is not pregnant")]
    NotPregnant,

    #[error("pregnancy is not due until day {due_day}")]
    NotDue { due_day: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pregnancy {
    pub conceived_day: i64,
}

impl Pregnancy {
    pub fn due_day(&self, gestation_days: i64) -> i64 {
        self.conceived_day.saturating_add(gestation_days)
    }

    pub fn is_due(&self, total_days: i64, gestation_days: i64) -> bool {
        total_days >= self.due_day(gestation_days)
    }
}

/// Check whether two animals could mate today.
pub fn check_pair(a: &Animal, b: &Animal, total_days: i64) -> Result<(), BreedingError> {
    if a.type_id != b.type_id {
        return Err(BreedingError::SpeciesMismatch(
            a.type_id.clone(),
            b.type_id.clone(),
        ));
    }
    if a.gender == b.gender {
        return Err(BreedingError::SameGender(a.gender));
    }
    if !a.can_reproduce(total_days) || !b.can_reproduce(total_days) {
        return Err(BreedingError::NotAdult);
    }
    let female = if a.gender == Gender::Female { a } else { b };
    if female.is_pregnant() {
        return Err(BreedingError::AlreadyPregnant);
    }
    Ok(())
}

/// Mate two animals; the female becomes pregnant.
pub fn mate(a: &mut Animal, b: &mut Animal, total_days: i64) -> Result<(), BreedingError> {
    check_pair(a, b, total_days)?;
    let female = if a.gender == Gender::Female { a } else { b };
    female.pregnancy = Some(Pregnancy {
        conceived_day: total_days,
    });
    debug!("{} conceived on day {}", female.type_id, total_days);
    Ok(())
}

/// Deliver offspring once the pregnancy is due.
pub fn give_birth<R: Rng + ?Sized>(
    mother: &mut Animal,
    def: &SpeciesDefinition,
    total_days: i64,
    rng: &mut R,
) -> Result<Vec<Animal>, BreedingError> {
    if mother.type_id != def.type_id {
        return Err(BreedingError::SpeciesMismatch(
            mother.type_id.clone(),
            def.type_id.clone(),
        ));
    }
    let pregnancy = mother.pregnancy.ok_or(BreedingError::NotPregnant)?;
    if !pregnancy.is_due(total_days, def.gestation_days) {
        return Err(BreedingError::NotDue {
            due_day: pregnancy.due_day(def.gestation_days),
        });
    }
    mother.pregnancy = None;

    let children: Vec<Animal> = (0..def.offspring_per_birth)
        .map(|_| Animal::born(def, Gender::random(rng), total_days))
        .collect();
    debug!(
        "{} gave birth to {} on day {}",
        def.type_id,
        children.len(),
        total_days
    );
    Ok(children)
}
