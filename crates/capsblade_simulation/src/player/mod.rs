//! Player controller: locomotion, facing, shift dash, follow camera.

use bevy::prelude::*;

pub mod controller;
pub mod spawn;

#[cfg(test)]
mod controller_tests;

pub use controller::{apply_player_input, follow_camera, move_player, rotate_player, update_speed_multiplier};
pub use spawn::{spawn_follow_camera, spawn_player, PLAYER_COLLIDER_ID};

use crate::collision::CollisionSet;
use crate::combat::advance_dashes;
use crate::components::{FollowCamera, Player, PlayerMotion};
use crate::input::PlayerInput;
use crate::SimulationSet;

/// Player Plugin
///
/// Порядок выполнения:
/// 1. apply_player_input — direction, target yaw, shift dash
/// 2. update_speed_multiplier — замедление при charge/spin
/// 3. move_player → rotate_player → follow_camera (после dash tween)
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerInput>()
            .register_type::<Player>()
            .register_type::<PlayerMotion>()
            .register_type::<FollowCamera>();

        app.add_systems(
            FixedUpdate,
            (
                apply_player_input.in_set(SimulationSet::Input),
                update_speed_multiplier.in_set(SimulationSet::Actions),
                (move_player, rotate_player, follow_camera)
                    .chain()
                    .after(advance_dashes)
                    .in_set(SimulationSet::Movement)
                    .before(CollisionSet::Sync),
            ),
        );
    }
}
