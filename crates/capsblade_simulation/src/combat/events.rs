//! Combat events

use bevy::prelude::*;

use crate::collision::ColliderId;
use super::components::ActionClip;

/// One-shot clip reached its end.
///
/// Симуляция сама считает playback, но хост с настоящим animation mixer
/// может писать этот event тоже — устаревшие finish'и игнорируются.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub clip: ActionClip,
}

/// Attack clip started (quick, buffered follow-up or spin).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackStarted {
    pub entity: Entity,
    pub clip: ActionClip,
}

/// Full charge released.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinAttackTriggered {
    pub entity: Entity,
}

/// Sword hitbox overlapped a collider that reacts to hits.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SwordHit {
    pub attacker: Entity,
    pub target: Entity,
    pub collider: ColliderId,
    pub clip: ActionClip,
    pub damage: u32,
}

/// Damage applied to a target.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageDealt {
    pub attacker: Option<Entity>,
    pub target: Entity,
    pub damage: u32,
    /// Health left after the hit
    pub remaining: u32,
}
