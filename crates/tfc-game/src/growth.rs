//! Growth clock: life stage, growth progress, and reproductive eligibility.
//!
//! Everything here is a pure function of an entity's birth day and the
//! calendar's current total day count. Birth days may be negative (spawned
//! animals "born" before world start) or in the future (calendar resets).

use rand::Rng;

/// Multiple of the adulthood threshold used as the upper bound for the
/// synthetic age of animals spawned without parents.
pub const SPAWN_AGE_SPREAD: i64 = 4;

/// Life stage of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Age {
    Juvenile,
    Adult,
}

/// Birth day for an animal created by the world with no parent.
///
/// Draws a lifetime uniformly from `[0, 4 * adulthood_days)` and subtracts it
/// from today, so a spawned population already covers the whole growth curve.
pub fn randomized_birth_day<R: Rng + ?Sized>(
    current_total_days: i64,
    adulthood_days: i64,
    rng: &mut R,
) -> i64 {
    let bound = adulthood_days.saturating_mul(SPAWN_AGE_SPREAD);
    let lifetime_days = if bound > 0 {
        rng.gen_range(0..bound)
    } else {
        0
    };
    current_total_days.saturating_sub(lifetime_days)
}

/// Birth day for an offspring: always today.
pub fn offspring_birth_day(current_total_days: i64) -> i64 {
    current_total_days
}

/// Days between birth and today, widened so extreme inputs cannot overflow.
fn days_since(birth_day: i64, current_total_days: i64) -> i128 {
    i128::from(current_total_days) - i128::from(birth_day)
}

pub fn current_age(birth_day: i64, current_total_days: i64, adulthood_days: i64) -> Age {
    if days_since(birth_day, current_total_days) >= i128::from(adulthood_days) {
        Age::Adult
    } else {
        Age::Juvenile
    }
}

/// Progress toward adulthood in `[0, 1]`.
///
/// Returns `1.0` without dividing once the animal is adult. A birth day in the
/// future clamps to `0.0`.
pub fn growth_fraction(birth_day: i64, current_total_days: i64, adulthood_days: i64) -> f32 {
    if current_age(birth_day, current_total_days, adulthood_days) == Age::Adult {
        return 1.0;
    }
    let value = days_since(birth_day, current_total_days) as f64 / adulthood_days as f64;
    value.clamp(0.0, 1.0) as f32
}

pub fn can_reproduce(age: Age) -> bool {
    age == Age::Adult
}

/// Per-entity growth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthClock {
    birth_day: i64,
    adulthood_days: i64,
    gestation_days: i64,
}

impl GrowthClock {
    pub fn new(birth_day: i64, adulthood_days: i64, gestation_days: i64) -> Self {
        Self {
            birth_day,
            adulthood_days,
            gestation_days,
        }
    }

    pub fn birth_day(&self) -> i64 {
        self.birth_day
    }

    pub fn adulthood_days(&self) -> i64 {
        self.adulthood_days
    }

    /// Length of a pregnancy for this species, in days.
    pub fn gestation_days(&self) -> i64 {
        self.gestation_days
    }

    pub fn age(&self, total_days: i64) -> Age {
        current_age(self.birth_day, total_days, self.adulthood_days)
    }

    pub fn growth_fraction(&self, total_days: i64) -> f32 {
        growth_fraction(self.birth_day, total_days, self.adulthood_days)
    }

    pub fn can_reproduce(&self, total_days: i64) -> bool {
        can_reproduce(self.age(total_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ADULTHOOD: i64 = 1800;

    #[test]
    fn adult_once_threshold_reached() {
        for total in [1800, 1801, 5000] {
            assert_eq!(current_age(0, total, ADULTHOOD), Age::Adult);
            assert_eq!(growth_fraction(0, total, ADULTHOOD), 1.0);
        }
    }

    #[test]
    fn juvenile_fraction_is_linear() {
        assert_eq!(growth_fraction(0, 0, ADULTHOOD), 0.0);
        assert_eq!(growth_fraction(0, 900, ADULTHOOD), 0.5);
        let f = growth_fraction(0, 1799, ADULTHOOD);
        assert!(f < 1.0 && f > 0.99);
    }

    #[test]
    fn future_birth_day_clamps_to_zero() {
        assert_eq!(growth_fraction(500, 100, ADULTHOOD), 0.0);
        assert_eq!(current_age(500, 100, ADULTHOOD), Age::Juvenile);
    }

    #[test]
    fn fraction_is_monotonic() {
        let mut last = 0.0f32;
        for total in (-300..4000).step_by(7) {
            let f = growth_fraction(-100, total, ADULTHOOD);
            assert!(f >= last, "fraction dropped at day {total}");
            last = f;
        }
    }

    #[test]
    fn adult_never_reverts() {
        let clock = GrowthClock::new(10, ADULTHOOD, 210);
        let became_adult = (0..4000).find(|&t| clock.age(t) == Age::Adult).unwrap();
        assert_eq!(became_adult, 1810);
        assert!((became_adult..6000).all(|t| clock.age(t) == Age::Adult));
    }

    #[test]
    fn randomized_birth_day_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let day = randomized_birth_day(1000, ADULTHOOD, &mut rng);
            assert!((-6199..=1000).contains(&day), "out of range: {day}");
        }
    }

    #[test]
    fn randomized_birth_day_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(17);
        let days: Vec<i64> = (0..50_000)
            .map(|_| randomized_birth_day(0, 2, &mut rng))
            .collect();
        // lifetime drawn from [0, 8): today is reachable, eight days ago is not
        assert!(days.contains(&0));
        assert!(days.contains(&-7));
        assert!(days.iter().all(|d| (-7..=0).contains(d)));
    }

    #[test]
    fn randomized_birth_day_saturates_near_min() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let day = randomized_birth_day(i64::MIN + 10, ADULTHOOD, &mut rng);
            // no wrap-around to a far-future day
            assert!(day <= i64::MIN + 10);
        }
    }

    #[test]
    fn extreme_days_do_not_overflow() {
        assert_eq!(current_age(i64::MIN, 0, ADULTHOOD), Age::Adult);
        assert_eq!(growth_fraction(i64::MIN, i64::MAX, ADULTHOOD), 1.0);
        assert_eq!(current_age(i64::MAX, -10, ADULTHOOD), Age::Juvenile);
        assert_eq!(growth_fraction(i64::MAX, -10, ADULTHOOD), 0.0);
        assert_eq!(growth_fraction(i64::MAX, i64::MIN, ADULTHOOD), 0.0);
        assert_eq!(current_age(0, i64::MAX, i64::MAX), Age::Adult);
        assert_eq!(current_age(1, i64::MAX, i64::MAX), Age::Juvenile);
    }

    #[test]
    fn randomized_birth_day_covers_adults_and_juveniles() {
        let mut rng = StdRng::seed_from_u64(99);
        let ages: Vec<Age> = (0..500)
            .map(|_| current_age(randomized_birth_day(0, ADULTHOOD, &mut rng), 0, ADULTHOOD))
            .collect();
        assert!(ages.contains(&Age::Adult));
        assert!(ages.contains(&Age::Juvenile));
    }

    #[test]
    fn randomized_birth_day_is_seed_deterministic() {
        let a = randomized_birth_day(50, ADULTHOOD, &mut StdRng::seed_from_u64(3));
        let b = randomized_birth_day(50, ADULTHOOD, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_adulthood_spawns_today() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(randomized_birth_day(42, 0, &mut rng), 42);
    }

    #[test]
    fn offspring_starts_at_zero_growth() {
        let birth = offspring_birth_day(500);
        assert_eq!(birth, 500);
        assert_eq!(growth_fraction(birth, 500, ADULTHOOD), 0.0);
    }

    #[test]
    fn scenario_half_grown_then_adult() {
        let clock = GrowthClock::new(0, ADULTHOOD, 210);
        assert_eq!(clock.growth_fraction(900), 0.5);
        assert_eq!(clock.age(900), Age::Juvenile);
        assert!(!clock.can_reproduce(900));

        assert_eq!(clock.growth_fraction(1800), 1.0);
        assert_eq!(clock.age(1800), Age::Adult);
        assert!(clock.can_reproduce(1800));
    }

    #[test]
    fn negative_birth_day_scenario() {
        let f = growth_fraction(-100, 0, ADULTHOOD);
        assert!((f - 100.0 / 1800.0).abs() < 1e-6);
    }

    #[test]
    fn can_reproduce_only_adults() {
        assert!(can_reproduce(Age::Adult));
        assert!(!can_reproduce(Age::Juvenile));
    }
}
