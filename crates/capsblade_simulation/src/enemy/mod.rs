//! Enemy module: spawning, lifecycle, wander steering
//!
//! ECS ответственность:
//! - Actions: spawn / wave / destroy / damage (`actions`)
//! - Host `EnemyCommand` events → actions
//! - `SwordHit` → health → `DamageDealt` / `EnemyDied` → despawn
//! - Despawn снимает `Collider` → registry unregister в следующем sync

use bevy::prelude::*;

pub mod actions;
pub mod components;
pub mod events;
pub mod systems;

#[cfg(test)]
mod actions_tests;

pub use actions::{
    damage_enemy, destroy_all_enemies, destroy_enemy, spawn_enemy, spawn_enemy_wave, wave_positions, SpawnEnemy,
};
pub use components::{BasicEnemy, Enemy, Wander};
pub use events::{EnemyCommand, EnemyDied};
pub use systems::{apply_sword_hits, move_enemies, process_enemy_commands, spawn_initial_wave, steer_enemies};

use crate::collision::CollisionSet;
use crate::SimulationSet;

/// Enemy Plugin
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<EnemyCommand>()
            .add_event::<EnemyDied>()
            .register_type::<Enemy>()
            .register_type::<BasicEnemy>()
            .register_type::<Wander>();

        app.add_systems(Startup, spawn_initial_wave);

        app.add_systems(
            FixedUpdate,
            (
                process_enemy_commands.in_set(SimulationSet::Input),
                (steer_enemies, move_enemies)
                    .chain()
                    .in_set(SimulationSet::Movement)
                    .before(CollisionSet::Sync),
                apply_sword_hits.in_set(SimulationSet::Resolve),
            ),
        );
    }
}
