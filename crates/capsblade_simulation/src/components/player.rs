//! Player control marker и локомоция

use bevy::prelude::*;

/// Marker component для player-controlled entity
///
/// Input systems используют `With<Player>` filter.
/// В прототипе ровно один такой entity.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Locomotion state of the player.
///
/// `speed_multiplier` плавно уходит в 0 пока игрок заряжает удар
/// или крутит spin attack, и возвращается к 1 после.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerMotion {
    /// Normalized XZ input direction (ZERO когда клавиши не нажаты)
    pub move_direction: Vec3,
    pub speed_multiplier: f32,
    /// Yaw the player turns toward (radians)
    pub target_yaw: f32,
}

impl Default for PlayerMotion {
    fn default() -> Self {
        Self {
            move_direction: Vec3::ZERO,
            speed_multiplier: 1.0,
            target_yaw: 0.0,
        }
    }
}

impl PlayerMotion {
    /// WASD-style axis input → normalized XZ direction.
    ///
    /// `x`: -1 (left) → +1 (right), `y`: -1 (up/forward, -Z) → +1 (down, +Z).
    pub fn direction_from_axes(axes: Vec2) -> Vec3 {
        Vec3::new(axes.x, 0.0, axes.y).normalize_or_zero()
    }

    /// Pointer in normalized device coords → yaw (`atan2(x, -y)`).
    pub fn yaw_from_pointer(pointer: Vec2) -> f32 {
        pointer.x.atan2(-pointer.y)
    }
}

/// Forward direction of a transform on the XZ plane.
///
/// Модель повёрнута на 180°, поэтому "вперёд" это +Z локально.
pub fn facing_direction(transform: &Transform) -> Vec3 {
    let forward = transform.rotation * Vec3::Z;
    let flat = Vec3::new(forward.x, 0.0, forward.z);
    if flat.length_squared() > f32::EPSILON {
        flat.normalize()
    } else {
        Vec3::NEG_Z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_axes_normalizes_diagonal() {
        let dir = PlayerMotion::direction_from_axes(Vec2::new(1.0, -1.0));
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!(dir.x > 0.0 && dir.z < 0.0);
        assert_eq!(PlayerMotion::direction_from_axes(Vec2::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_facing_direction_identity() {
        let dir = facing_direction(&Transform::IDENTITY);
        assert!((dir - Vec3::Z).length() < 1e-5);
    }
}
