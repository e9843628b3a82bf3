//! Player / camera spawn helpers

use bevy::prelude::*;

use crate::collision::{Collider, ColliderLayer};
use crate::combat::{AttackStateMachine, Dash};
use crate::components::{FollowCamera, Health, Player, PlayerMotion};
use crate::config::CombatConfig;

pub const PLAYER_COLLIDER_ID: &str = "player";

/// Spawn the player-controlled character.
pub fn spawn_player(commands: &mut Commands, position: Vec3, config: &CombatConfig) -> Entity {
    let entity = commands
        .spawn((
            Player,
            Transform::from_translation(position),
            PlayerMotion::default(),
            AttackStateMachine::default(),
            Dash::default(),
            Health::new(config.player.max_health),
            Collider::new(PLAYER_COLLIDER_ID, config.player.collider_radius, ColliderLayer::Player),
        ))
        .id();

    crate::logger::log_info(&format!("🧍 Player spawned at {:?} (entity: {:?})", position, entity));
    entity
}

/// Spawn a camera rig trailing `target`.
pub fn spawn_follow_camera(commands: &mut Commands, target: Entity, config: &CombatConfig) -> Entity {
    let offset = Vec3::from_array(config.camera.offset);

    commands
        .spawn((
            Transform::from_translation(offset),
            FollowCamera {
                target,
                offset,
                follow_rate: config.camera.follow_rate,
            },
        ))
        .id()
}
