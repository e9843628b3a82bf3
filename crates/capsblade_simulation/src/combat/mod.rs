//! Combat module: attack state machine, dashes, sword hits
//!
//! ECS ответственность:
//! - `AttackStateMachine`: charge / quick attack / queued follow-up / spin attack
//! - `Dash`: shift dash, spin dash, attack lunge (eased tweens + cooldown)
//! - Sword hitbox → `CollisionRegistry` query → `SwordHit`
//!
//! Хост ответственность:
//! - AttackButton / PlayerInput events
//! - Проигрывание клипов по `current_animation`, glow по `glow`
//!
//! # Attack Flow
//!
//! ```text
//! AttackButton::Up → AttackStateMachine::release
//!   ↓
//! AttackStarted → trigger_attack_dashes (lunge / spin dash)
//!   ↓
//! clip playback in hit window → detect_sword_hits → SwordHit
//!   ↓
//! enemy::apply_sword_hits → DamageDealt / EnemyDied
//!   ↓
//! clip end → AnimationFinished → Idle (или buffered follow-up)
//! ```

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::*;
pub use events::{AnimationFinished, AttackStarted, DamageDealt, SpinAttackTriggered, SwordHit};
pub use systems::{
    advance_dashes, detect_sword_hits, handle_animation_finished, process_attack_buttons,
    tick_attack_state_machines, trigger_attack_dashes, SwordHitbox,
};

use crate::collision::CollisionSet;
use crate::input::AttackButton;
use crate::SimulationSet;

/// Combat Plugin
///
/// Регистрирует combat системы в FixedUpdate (60Hz).
///
/// Порядок выполнения:
/// 1. process_attack_buttons — input → state machine
/// 2. tick_attack_state_machines → handle_animation_finished → trigger_attack_dashes
/// 3. advance_dashes — tween позиции
/// 4. detect_sword_hits — после sync registry
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<AttackButton>()
            .add_event::<AnimationFinished>()
            .add_event::<AttackStarted>()
            .add_event::<SpinAttackTriggered>()
            .add_event::<SwordHit>()
            .add_event::<DamageDealt>();

        app.register_type::<AttackStateMachine>().register_type::<Dash>();

        app.add_systems(
            FixedUpdate,
            (
                process_attack_buttons.in_set(SimulationSet::Input),
                (
                    tick_attack_state_machines,
                    handle_animation_finished,
                    trigger_attack_dashes,
                )
                    .chain()
                    .in_set(SimulationSet::Actions),
                advance_dashes.in_set(SimulationSet::Movement),
                detect_sword_hits
                    .in_set(SimulationSet::Hits)
                    .after(CollisionSet::Sync),
            ),
        );
    }
}
