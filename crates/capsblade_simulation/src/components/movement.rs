//! Movement компоненты: скорость и steering

use bevy::prelude::*;

/// Текущая скорость (world units/sec, XZ плоскость, y всегда 0)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec3);

/// Куда steering тянет `Velocity` (плавный разворот вместо рывков)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TargetVelocity(pub Vec3);

/// Множитель скорости entity
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

/// Frame-rate dependent lerp (как `MathUtils.lerp(a, b, dt * rate)` в прототипе).
///
/// `t` клампится в [0, 1], чтобы большой delta не перелетал цель.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Flatten a vector onto the XZ plane.
pub fn planar(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_clamps_factor() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 3.0), 10.0);
        assert_eq!(lerp(4.0, 10.0, -1.0), 4.0);
    }

    #[test]
    fn test_planar_drops_height() {
        assert_eq!(planar(Vec3::new(1.0, 5.0, -2.0)), Vec3::new(1.0, 0.0, -2.0));
    }
}
