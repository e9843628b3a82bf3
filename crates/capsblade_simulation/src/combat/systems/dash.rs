//! Dash systems.

use bevy::prelude::*;

use crate::combat::{ActionClip, AttackStarted, Dash};
use crate::components::facing_direction;
use crate::config::CombatConfig;

/// System: attack starts kick off their dashes.
///
/// - spin-attack → spin dash вперёд (игнорирует cooldown)
/// - attack01/attack02 → короткий lunge (только если `dash.lunge_enabled`)
pub fn trigger_attack_dashes(
    mut started_events: EventReader<AttackStarted>,
    mut query: Query<(&mut Dash, &Transform)>,
    config: Res<CombatConfig>,
) {
    let dash_config = &config.dash;

    for event in started_events.read() {
        let Ok((mut dash, transform)) = query.get_mut(event.entity) else {
            continue;
        };

        let forward = facing_direction(transform);
        let origin = transform.translation;

        match event.clip {
            ActionClip::SpinAttack => {
                dash.spin_dash(origin, forward, dash_config.spin_distance, dash_config.spin_duration);
            }
            ActionClip::Attack01 | ActionClip::Attack02 if dash_config.lunge_enabled => {
                dash.lunge(origin, forward, dash_config.lunge_distance, dash_config.lunge_duration);
            }
            _ => {}
        }
    }
}

/// System: advance dash tweens and cooldowns, write tweened positions.
pub fn advance_dashes(
    mut query: Query<(Entity, &mut Dash, &mut Transform)>,
    config: Res<CombatConfig>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut dash, mut transform) in query.iter_mut() {
        let Some(step) = dash.tick(delta, config.dash.cooldown) else {
            continue;
        };

        transform.translation = step.position;

        if let Some(kind) = step.completed {
            crate::logger::log(&format!("💨 {:?} complete (entity: {:?})", kind, entity));
        }
    }
}
