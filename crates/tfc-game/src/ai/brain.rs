//! BehaviorSet ECS component — holds an animal's behavior descriptors.

use bevy_ecs::prelude::*;

use super::behavior::{BehaviorContext, BehaviorDescriptor, BehaviorType, TaskSlot};

/// Which descriptors would run for one snapshot (indices into the set).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BehaviorPlan {
    /// Highest-priority applicable movement behavior.
    pub movement: Option<usize>,
    /// Highest-priority applicable target selector.
    pub target_selector: Option<usize>,
    /// All applicable passive behaviors, in priority order.
    pub passives: Vec<usize>,
}

/// An animal's behavior list, kept sorted by priority.
#[derive(Component, Debug, Clone, Default)]
pub struct BehaviorSet {
    descriptors: Vec<BehaviorDescriptor>,
}

impl BehaviorSet {
    /// Create a set from descriptors; ties keep their given order.
    pub fn new(mut descriptors: Vec<BehaviorDescriptor>) -> Self {
        descriptors.sort_by_key(|d| d.priority);
        Self { descriptors }
    }

    pub fn descriptors(&self) -> &[BehaviorDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, index: usize) -> Option<&BehaviorDescriptor> {
        self.descriptors.get(index)
    }

    /// Descriptors of one slot, in priority order.
    pub fn in_slot(&self, slot: TaskSlot) -> impl Iterator<Item = &BehaviorDescriptor> {
        self.descriptors.iter().filter(move |d| d.slot == slot)
    }

    /// Count behaviors by type.
    pub fn count_by_type(&self, bt: BehaviorType) -> usize {
        self.descriptors
            .iter()
            .filter(|d| d.behavior_type() == bt)
            .count()
    }

    /// Select the descriptors that would be active for this snapshot.
    pub fn plan(&self, ctx: &BehaviorContext) -> BehaviorPlan {
        let mut plan = BehaviorPlan::default();
        for (i, d) in self.descriptors.iter().enumerate() {
            if !d.capability.applies(ctx) {
                continue;
            }
            match d.behavior_type() {
                BehaviorType::Movement => {
                    if plan.movement.is_none() {
                        plan.movement = Some(i);
                    }
                }
                BehaviorType::TargetSelector => {
                    if plan.target_selector.is_none() {
                        plan.target_selector = Some(i);
                    }
                }
                BehaviorType::Passive => plan.passives.push(i),
            }
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::behavior::{Capability, TargetKind};

    fn sample() -> BehaviorSet {
        BehaviorSet::new(vec![
            BehaviorDescriptor::goal(3, Capability::WanderAvoidWater { speed: 1.0 }),
            BehaviorDescriptor::goal(0, Capability::Swim),
            BehaviorDescriptor::goal(5, Capability::LookIdle),
            BehaviorDescriptor::target(
                2,
                Capability::NearestAttackableTarget {
                    target: TargetKind::Player,
                    check_sight: true,
                },
            ),
        ])
    }

    #[test]
    fn sorted_by_priority() {
        let set = sample();
        let priorities: Vec<u32> = set.descriptors().iter().map(|d| d.priority).collect();
        assert_eq!(priorities, vec![0, 2, 3, 5]);
    }

    #[test]
    fn swim_wins_in_water() {
        let set = sample();
        let plan = set.plan(&BehaviorContext {
            in_water: true,
            ..Default::default()
        });
        let movement = set.get(plan.movement.unwrap()).unwrap();
        assert_eq!(movement.capability, Capability::Swim);
    }

    #[test]
    fn wander_on_land_with_idle_passive() {
        let set = sample();
        let plan = set.plan(&BehaviorContext::default());
        let movement = set.get(plan.movement.unwrap()).unwrap();
        assert_eq!(movement.capability.name(), "wander_avoid_water");
        assert_eq!(plan.passives.len(), 1);
        assert!(plan.target_selector.is_none());
    }

    #[test]
    fn target_selector_when_player_seen() {
        let set = sample();
        let plan = set.plan(&BehaviorContext {
            nearest_player_distance: Some(10.0),
            ..Default::default()
        });
        assert!(plan.target_selector.is_some());
    }

    #[test]
    fn counts_and_slots() {
        let set = sample();
        assert_eq!(set.count_by_type(BehaviorType::Movement), 2);
        assert_eq!(set.in_slot(TaskSlot::Target).count(), 1);
    }
}
