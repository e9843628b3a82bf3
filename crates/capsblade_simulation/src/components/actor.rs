//! Базовые компоненты живых entity: Health, Tint

use bevy::prelude::*;

/// Здоровье
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Saturating: health never goes below zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}

/// Linear RGB tint (0..1). Renderer decides how to use it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for Tint {
    fn default() -> Self {
        Self { r: 1.0, g: 0.2, b: 0.2 }
    }
}

impl Tint {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<[f32; 3]> for Tint {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage() {
        let mut health = Health::new(100);
        assert_eq!(health.current, 100);

        health.take_damage(30);
        assert_eq!(health.current, 70);
        assert!(health.is_alive());

        health.take_damage(100); // Saturating sub
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());
    }
}
