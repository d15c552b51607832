//! Per-species behavior lists.

use super::behavior::{BehaviorDescriptor, Capability, TargetKind};

/// Behavior list for the bear: a melee predator that hunts players on sight.
pub fn bear_behaviors() -> Vec<BehaviorDescriptor> {
    vec![
        BehaviorDescriptor::goal(0, Capability::Swim),
        BehaviorDescriptor::goal(1, Capability::Mate { speed: 1.0 }),
        BehaviorDescriptor::goal(
            2,
            Capability::MeleeAttack {
                speed: 1.0,
                long_memory: false,
            },
        ),
        BehaviorDescriptor::goal(3, Capability::WanderAvoidWater { speed: 1.0 }),
        BehaviorDescriptor::goal(
            4,
            Capability::WatchClosest {
                target: TargetKind::Player,
                max_distance: 6.0,
            },
        ),
        BehaviorDescriptor::goal(5, Capability::LookIdle),
        BehaviorDescriptor::target(
            2,
            Capability::NearestAttackableTarget {
                target: TargetKind::Player,
                check_sight: true,
            },
        ),
    ]
}
