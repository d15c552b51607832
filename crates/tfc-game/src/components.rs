//! ECS components attached to animals alongside [`Animal`](crate::animal::Animal).

use bevy_ecs::prelude::*;

/// Health points.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }
}

/// Axis-aligned bounding box dimensions.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub width: f32,
    pub height: f32,
}

/// Base movement speed (copied from the species at spawn time).
#[derive(Component, Debug, Clone, Copy)]
pub struct MovementSpeed(pub f32);
