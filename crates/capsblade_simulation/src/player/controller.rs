//! Player locomotion systems.
//!
//! # Архитектура
//! - Input → `PlayerMotion` (direction, target yaw) → `Transform`
//! - Пока идёт dash tween, обычное движение выключено
//! - Solid colliders (враги, окружение) выталкивают игрока после шага

use bevy::prelude::*;

use crate::collision::{Collider, CollisionRegistry, COLLISION_MASK_PLAYER_BLOCKERS};
use crate::combat::{AttackStateMachine, Dash};
use crate::components::{facing_direction, lerp, FollowCamera, Player, PlayerMotion};
use crate::config::CombatConfig;
use crate::input::PlayerInput;

/// System: apply host input to the player.
///
/// Shift dash летит по направлению движения, без движения — куда смотрим.
pub fn apply_player_input(
    mut inputs: EventReader<PlayerInput>,
    mut players: Query<(Entity, &mut PlayerMotion, &mut Dash, &Transform), With<Player>>,
    config: Res<CombatConfig>,
) {
    let Ok((entity, mut motion, mut dash, transform)) = players.single_mut() else {
        inputs.clear();
        return;
    };

    for input in inputs.read() {
        motion.move_direction = PlayerMotion::direction_from_axes(input.move_direction);
        motion.target_yaw = PlayerMotion::yaw_from_pointer(input.pointer);

        if !input.dash {
            continue;
        }

        let direction = if motion.move_direction.length_squared() > 0.0 {
            motion.move_direction
        } else {
            facing_direction(transform)
        };

        if dash.try_dash(transform.translation, direction, config.dash.distance, config.dash.duration) {
            crate::logger::log(&format!("💨 Dash (entity: {:?}, dir: {:?})", entity, direction));
        }
    }
}

/// System: ease the speed multiplier toward 0 while charging / spin attacking, else toward 1.
pub fn update_speed_multiplier(
    mut players: Query<(&mut PlayerMotion, &AttackStateMachine), With<Player>>,
    config: Res<CombatConfig>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut motion, state) in players.iter_mut() {
        let slow_down = state.is_charging() || state.is_spin_attacking();
        motion.speed_multiplier = if slow_down {
            lerp(motion.speed_multiplier, 0.0, delta * config.player.slowdown_rate)
        } else {
            lerp(motion.speed_multiplier, 1.0, delta * config.player.recover_rate)
        };
    }
}

/// System: integrate player position (skipped while dashing).
pub fn move_player(
    mut players: Query<(&mut Transform, &PlayerMotion, &Dash, Option<&Collider>), With<Player>>,
    registry: Res<CollisionRegistry>,
    config: Res<CombatConfig>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut transform, motion, dash, collider) in players.iter_mut() {
        if dash.is_dashing() || motion.move_direction == Vec3::ZERO {
            continue;
        }

        let speed = config.player.move_speed * motion.speed_multiplier;
        let next = transform.translation + motion.move_direction * speed * delta;

        let Some(collider) = collider else {
            transform.translation = next;
            continue;
        };

        let resolved = registry.resolve_solid(
            Vec2::new(next.x, next.z),
            collider.radius,
            COLLISION_MASK_PLAYER_BLOCKERS,
            Some(&collider.id),
        );
        transform.translation = Vec3::new(resolved.x, next.y, resolved.y);
    }
}

/// System: turn the player toward the pointer yaw.
pub fn rotate_player(
    mut players: Query<(&mut Transform, &PlayerMotion), With<Player>>,
    config: Res<CombatConfig>,
    time: Res<Time<Fixed>>,
) {
    let t = (time.delta_secs() * config.player.turn_rate).clamp(0.0, 1.0);

    for (mut transform, motion) in players.iter_mut() {
        let target = Quat::from_rotation_y(motion.target_yaw);
        transform.rotation = transform.rotation.slerp(target, t);
    }
}

/// System: trail cameras behind their targets.
pub fn follow_camera(
    mut cameras: Query<(&mut Transform, &FollowCamera)>,
    targets: Query<&Transform, Without<FollowCamera>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut transform, camera) in cameras.iter_mut() {
        let Ok(target) = targets.get(camera.target) else {
            continue;
        };

        let desired = target.translation + camera.offset;
        let t = (camera.follow_rate * delta).clamp(0.0, 1.0);
        transform.translation = transform.translation.lerp(desired, t);
    }
}
