//! Animal entity state.

use bevy_ecs::prelude::*;
use rand::Rng;

use crate::breeding::Pregnancy;
use crate::gender::Gender;
use crate::growth::{self, Age, GrowthClock};
use crate::species::SpeciesDefinition;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Animal {
    pub type_id: String,
    pub gender: Gender,
    pub growth: GrowthClock,
    pub pregnancy: Option<Pregnancy>,
}

impl Animal {
    /// An animal placed by the world with no parents: random gender and a
    /// synthetic age anywhere up to four adulthoods old.
    pub fn spawn<R: Rng + ?Sized>(def: &SpeciesDefinition, total_days: i64, rng: &mut R) -> Self {
        let gender = Gender::random(rng);
        let birth_day = growth::randomized_birth_day(total_days, def.adulthood_days, rng);
        Self::with_birth_day(def, gender, birth_day)
    }

    /// A newborn: birth day is today.
    pub fn born(def: &SpeciesDefinition, gender: Gender, total_days: i64) -> Self {
        Self::with_birth_day(def, gender, growth::offspring_birth_day(total_days))
    }

    pub fn with_birth_day(def: &SpeciesDefinition, gender: Gender, birth_day: i64) -> Self {
        Self {
            type_id: def.type_id.clone(),
            gender,
            growth: def.growth_clock(birth_day),
            pregnancy: None,
        }
    }

    pub fn age(&self, total_days: i64) -> Age {
        self.growth.age(total_days)
    }

    pub fn growth_fraction(&self, total_days: i64) -> f32 {
        self.growth.growth_fraction(total_days)
    }

    pub fn can_reproduce(&self, total_days: i64) -> bool {
        self.growth.can_reproduce(total_days)
    }

    pub fn is_pregnant(&self) -> bool {
        self.pregnancy.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn newborn_is_juvenile_at_zero() {
        let bear = SpeciesDefinition::bear();
        let cub = Animal::born(&bear, Gender::Female, 500);
        assert_eq!(cub.growth.birth_day(), 500);
        assert_eq!(cub.growth_fraction(500), 0.0);
        assert_eq!(cub.age(500), Age::Juvenile);
        assert!(!cub.can_reproduce(500));
        assert!(!cub.is_pregnant());
    }

    #[test]
    fn spawned_birth_day_within_spread() {
        let bear = SpeciesDefinition::bear();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let a = Animal::spawn(&bear, 1000, &mut rng);
            assert!((-6199..=1000).contains(&a.growth.birth_day()));
            assert_eq!(a.type_id, "tfc:bear");
        }
    }

    #[test]
    fn grows_up_with_the_calendar() {
        let bear = SpeciesDefinition::bear();
        let cub = Animal::born(&bear, Gender::Male, 0);
        assert_eq!(cub.growth_fraction(900), 0.5);
        assert_eq!(cub.age(1800), Age::Adult);
        assert!(cub.can_reproduce(1800));
    }
}
