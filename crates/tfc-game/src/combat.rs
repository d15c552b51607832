//! Combat values derived from species stats and life stage.

use crate::growth::Age;
use crate::species::SpeciesDefinition;

/// Base attributes registered for an individual of a species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attributes {
    pub max_health: f32,
    pub movement_speed: f32,
    pub attack_damage: f32,
}

impl Attributes {
    pub fn of(def: &SpeciesDefinition) -> Self {
        Self {
            max_health: def.max_health,
            movement_speed: def.movement_speed,
            attack_damage: def.base_attack_damage,
        }
    }
}

/// Damage of one melee hit. Juveniles hit softer.
pub fn melee_damage(def: &SpeciesDefinition, age: Age) -> f32 {
    match age {
        Age::Juvenile => def.juvenile_hit_damage,
        Age::Adult => def.adult_hit_damage,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOutcome {
    pub remaining: f32,
    pub killed: bool,
}

/// Apply `damage` to `health`, flooring at zero.
pub fn apply_hit(health: f32, damage: f32) -> HitOutcome {
    let remaining = (health - damage.max(0.0)).max(0.0);
    HitOutcome {
        remaining,
        killed: remaining <= 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn juvenile_bear_hits_for_two() {
        let bear = SpeciesDefinition::bear();
        assert_eq!(melee_damage(&bear, Age::Juvenile), 2.0);
        assert_eq!(melee_damage(&bear, Age::Adult), 4.0);
    }

    #[test]
    fn bear_attributes() {
        let attrs = Attributes::of(&SpeciesDefinition::bear());
        assert_eq!(attrs.max_health, 60.0);
        assert_eq!(attrs.movement_speed, 0.4);
        assert_eq!(attrs.attack_damage, 3.0);
    }

    #[test]
    fn hits_floor_at_zero() {
        assert_eq!(
            apply_hit(20.0, 4.0),
            HitOutcome {
                remaining: 16.0,
                killed: false
            }
        );
        let dead = apply_hit(3.0, 4.0);
        assert_eq!(dead.remaining, 0.0);
        assert!(dead.killed);
        assert_eq!(apply_hit(10.0, -5.0).remaining, 10.0);
    }
}
