//! Data-driven behavior descriptors for animal AI.
//!
//! An animal's AI is a list of descriptors (priority, slot, capability) that a
//! scheduler interprets. Nothing here executes movement; see `brain` for the
//! selection of which descriptors would run on a given tick.

/// Which task list a descriptor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSlot {
    /// Regular goals (moving, attacking, looking around).
    Goal,
    /// Target selection (choosing who to attack).
    Target,
}

/// Kinds of entity a behavior can focus on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Player,
}

/// What kind of output a behavior produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorType {
    /// Controls movement (only one active at a time).
    Movement,
    /// Non-movement (e.g., look at player). Multiple can co-exist.
    Passive,
    /// Target selector (picks who to attack). Only one active at a time.
    TargetSelector,
}

/// A single capability with its tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Capability {
    /// Stay afloat in water.
    Swim,
    /// Seek a partner and breed.
    Mate { speed: f64 },
    MeleeAttack { speed: f64, long_memory: bool },
    WanderAvoidWater { speed: f64 },
    WatchClosest { target: TargetKind, max_distance: f32 },
    LookIdle,
    NearestAttackableTarget { target: TargetKind, check_sight: bool },
}

impl Capability {
    pub fn behavior_type(&self) -> BehaviorType {
        match self {
            Capability::Swim
            | Capability::Mate { .. }
            | Capability::MeleeAttack { .. }
            | Capability::WanderAvoidWater { .. } => BehaviorType::Movement,
            Capability::WatchClosest { .. } | Capability::LookIdle => BehaviorType::Passive,
            Capability::NearestAttackableTarget { .. } => BehaviorType::TargetSelector,
        }
    }

    /// Short identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Swim => "swim",
            Capability::Mate { .. } => "mate",
            Capability::MeleeAttack { .. } => "melee_attack",
            Capability::WanderAvoidWater { .. } => "wander_avoid_water",
            Capability::WatchClosest { .. } => "watch_closest",
            Capability::LookIdle => "look_idle",
            Capability::NearestAttackableTarget { .. } => "nearest_attackable_target",
        }
    }

    /// Can this capability run given the current snapshot?
    pub fn applies(&self, ctx: &BehaviorContext) -> bool {
        match self {
            Capability::Swim => ctx.in_water,
            Capability::Mate { .. } => ctx.can_reproduce && ctx.has_mate_nearby,
            Capability::MeleeAttack { .. } => ctx.has_target,
            Capability::WanderAvoidWater { .. } | Capability::LookIdle => true,
            Capability::WatchClosest { target, max_distance } => match target {
                TargetKind::Player => ctx
                    .nearest_player_distance
                    .is_some_and(|d| d <= *max_distance),
            },
            Capability::NearestAttackableTarget { target, .. } => match target {
                TargetKind::Player => !ctx.has_target && ctx.nearest_player_distance.is_some(),
            },
        }
    }
}

/// One entry in an animal's behavior list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorDescriptor {
    /// Lower runs first.
    pub priority: u32,
    pub slot: TaskSlot,
    pub capability: Capability,
}

impl BehaviorDescriptor {
    pub fn goal(priority: u32, capability: Capability) -> Self {
        Self {
            priority,
            slot: TaskSlot::Goal,
            capability,
        }
    }

    pub fn target(priority: u32, capability: Capability) -> Self {
        Self {
            priority,
            slot: TaskSlot::Target,
            capability,
        }
    }

    pub fn behavior_type(&self) -> BehaviorType {
        self.capability.behavior_type()
    }
}

/// Read-only snapshot of the world state relevant to one animal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BehaviorContext {
    pub in_water: bool,
    /// Adult per its growth clock.
    pub can_reproduce: bool,
    pub has_mate_nearby: bool,
    /// Whether a target is already selected.
    pub has_target: bool,
    /// Distance to the nearest player, if any is tracked.
    pub nearest_player_distance: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_by_capability() {
        assert_eq!(Capability::Swim.behavior_type(), BehaviorType::Movement);
        assert_eq!(Capability::LookIdle.behavior_type(), BehaviorType::Passive);
        assert_eq!(
            Capability::NearestAttackableTarget {
                target: TargetKind::Player,
                check_sight: true
            }
            .behavior_type(),
            BehaviorType::TargetSelector
        );
    }

    #[test]
    fn mate_requires_adult_and_partner() {
        let mate = Capability::Mate { speed: 1.0 };
        let mut ctx = BehaviorContext {
            has_mate_nearby: true,
            ..Default::default()
        };
        assert!(!mate.applies(&ctx));
        ctx.can_reproduce = true;
        assert!(mate.applies(&ctx));
        ctx.has_mate_nearby = false;
        assert!(!mate.applies(&ctx));
    }

    #[test]
    fn watch_closest_respects_distance() {
        let watch = Capability::WatchClosest {
            target: TargetKind::Player,
            max_distance: 6.0,
        };
        let near = BehaviorContext {
            nearest_player_distance: Some(5.5),
            ..Default::default()
        };
        let far = BehaviorContext {
            nearest_player_distance: Some(6.5),
            ..Default::default()
        };
        assert!(watch.applies(&near));
        assert!(!watch.applies(&far));
        assert!(!watch.applies(&BehaviorContext::default()));
    }

    #[test]
    fn descriptor_constructors_set_slot() {
        assert_eq!(BehaviorDescriptor::goal(3, Capability::LookIdle).slot, TaskSlot::Goal);
        assert_eq!(
            BehaviorDescriptor::target(
                2,
                Capability::NearestAttackableTarget {
                    target: TargetKind::Player,
                    check_sight: false
                }
            )
            .slot,
            TaskSlot::Target
        );
    }
}
