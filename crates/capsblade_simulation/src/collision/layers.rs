//! Collision layer bitmasks
//!
//! ## Архитектура:
//! - **Layer:** на каком слое находится collider (ровно один бит)
//! - **Mask:** какие слои участвуют в query (OR нескольких битов)
//!
//! ```rust
//! use capsblade_simulation::collision::layers::*;
//!
//! // Sword hitbox бьёт только врагов
//! let mask = COLLISION_LAYER_ENEMY;
//!
//! // Игрок упирается во врагов и окружение
//! let blockers = COLLISION_MASK_PLAYER_BLOCKERS;
//! # assert_eq!(mask | blockers, blockers);
//! ```

use bevy::prelude::*;

/// Layer 1: Player
pub const COLLISION_LAYER_PLAYER: u32 = 0b1;

/// Layer 2: Enemies
pub const COLLISION_LAYER_ENEMY: u32 = 0b10;

/// Layer 3: Environment (walls, props)
pub const COLLISION_LAYER_ENVIRONMENT: u32 = 0b100;

/// Mask: что блокирует движение игрока
pub const COLLISION_MASK_PLAYER_BLOCKERS: u32 = COLLISION_LAYER_ENEMY | COLLISION_LAYER_ENVIRONMENT;

/// Mask: все слои
pub const COLLISION_MASK_ALL: u32 = COLLISION_LAYER_PLAYER | COLLISION_LAYER_ENEMY | COLLISION_LAYER_ENVIRONMENT;

/// Layer a collider lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ColliderLayer {
    Player,
    Enemy,
    Environment,
}

impl ColliderLayer {
    pub fn bits(self) -> u32 {
        match self {
            ColliderLayer::Player => COLLISION_LAYER_PLAYER,
            ColliderLayer::Enemy => COLLISION_LAYER_ENEMY,
            ColliderLayer::Environment => COLLISION_LAYER_ENVIRONMENT,
        }
    }

    pub fn in_mask(self, mask: u32) -> bool {
        self.bits() & mask != 0
    }

    /// Название слоя для debug логов
    pub fn name(self) -> &'static str {
        match self {
            ColliderLayer::Player => "Player",
            ColliderLayer::Enemy => "Enemy",
            ColliderLayer::Environment => "Environment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_are_disjoint() {
        assert_eq!(COLLISION_LAYER_PLAYER & COLLISION_LAYER_ENEMY, 0);
        assert_eq!(COLLISION_LAYER_ENEMY & COLLISION_LAYER_ENVIRONMENT, 0);
        assert_eq!(COLLISION_LAYER_PLAYER & COLLISION_LAYER_ENVIRONMENT, 0);
    }

    #[test]
    fn test_in_mask() {
        assert!(ColliderLayer::Enemy.in_mask(COLLISION_MASK_PLAYER_BLOCKERS));
        assert!(ColliderLayer::Environment.in_mask(COLLISION_MASK_PLAYER_BLOCKERS));
        assert!(!ColliderLayer::Player.in_mask(COLLISION_MASK_PLAYER_BLOCKERS));
    }
}
