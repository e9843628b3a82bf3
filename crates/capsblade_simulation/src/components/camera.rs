//! Follow camera rig

use bevy::prelude::*;

/// Camera that trails a target entity at a fixed offset.
///
/// Позицию сглаживаем lerp'ом (rate × delta), рендер читает `Transform`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct FollowCamera {
    pub target: Entity,
    pub offset: Vec3,
    pub follow_rate: f32,
}
