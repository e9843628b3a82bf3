//! Enemy markers и wander state

use bevy::prelude::*;

/// Marker: entity is an enemy (destroy actions only touch these)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Enemy;

/// Marker: basic melee dummy (единственный тип врага сейчас)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct BasicEnemy;

/// Wander steering timer.
///
/// Когда `timer` доходит до 0, `TargetVelocity` перекидывается
/// в случайное направление (DeterministicRng).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Wander {
    pub timer: f32,
}
