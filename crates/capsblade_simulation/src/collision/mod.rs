//! Collision module: circular colliders for melee hit detection
//!
//! ECS ответственность:
//! - `Collider` component на entity (id, radius, layer, solid, hit response)
//! - `CollisionRegistry` resource — плоская таблица для overlap queries
//! - Sync: mount/unmount entity → register/unregister
//!
//! Hit resolution (sword hitbox → `SwordHit`) живёт в `combat`.

use bevy::prelude::*;

pub mod layers;
pub mod registry;
pub mod systems;

#[cfg(test)]
mod registry_tests;

pub use layers::*;
pub use registry::{
    circles_overlap, Collider, ColliderEntry, ColliderId, CollisionError, CollisionRegistry, HitResponse,
};
pub use systems::sync_collider_registry;

/// System set: registry synced with the world.
///
/// Всё, что делает queries по registry, должно идти `.after(CollisionSet::Sync)`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CollisionSet {
    Sync,
}

/// Collision Plugin
pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollisionRegistry>()
            .register_type::<Collider>()
            .add_systems(FixedUpdate, sync_collider_registry.in_set(CollisionSet::Sync));
    }
}
