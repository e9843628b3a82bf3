//! Attack state machine systems.

use bevy::prelude::*;

use crate::combat::{
    AnimationFinished, AttackStarted, AttackStateMachine, AttackTimings, ReleaseOutcome, SpinAttackTriggered,
};
use crate::components::Player;
use crate::config::CombatConfig;
use crate::input::AttackButton;

/// System: route attack button edges into the player's state machine.
///
/// Down → press (charge если не в ударе), Up → release (quick / spin / queue).
pub fn process_attack_buttons(
    mut buttons: EventReader<AttackButton>,
    mut players: Query<(Entity, &mut AttackStateMachine), With<Player>>,
    config: Res<CombatConfig>,
    time: Res<Time<Fixed>>,
    mut started_events: EventWriter<AttackStarted>,
    mut spin_events: EventWriter<SpinAttackTriggered>,
) {
    // Guard: нет player entity — input теряется
    let Ok((entity, mut state)) = players.single_mut() else {
        buttons.clear();
        return;
    };

    let timings = AttackTimings::from_config(&config);
    let now = time.elapsed_secs();

    for button in buttons.read() {
        match button {
            AttackButton::Down => {
                state.press(now, &timings);
                if state.is_charging() {
                    crate::logger::log(&format!("🔋 Charging started (entity: {:?})", entity));
                }
            }
            AttackButton::Up => match state.release(now, &timings) {
                ReleaseOutcome::QuickAttack(clip) => {
                    started_events.write(AttackStarted { entity, clip });
                    crate::logger::log(&format!("⚔️ Quick attack {} (entity: {:?})", clip.name(), entity));
                }
                ReleaseOutcome::SpinAttack => {
                    started_events.write(AttackStarted {
                        entity,
                        clip: crate::combat::ActionClip::SpinAttack,
                    });
                    spin_events.write(SpinAttackTriggered { entity });
                    crate::logger::log(&format!("🌀 Spin attack released (entity: {:?})", entity));
                }
                ReleaseOutcome::Queued => {
                    crate::logger::log(&format!("⏳ Attack queued mid-swing (entity: {:?})", entity));
                }
                ReleaseOutcome::Ignored => {}
            },
        }
    }
}

/// System: advance charge, glow and clip playback.
///
/// Reports finished clips as `AnimationFinished`, buffered attacks as `AttackStarted`.
pub fn tick_attack_state_machines(
    mut query: Query<(Entity, &mut AttackStateMachine)>,
    config: Res<CombatConfig>,
    time: Res<Time<Fixed>>,
    mut finished_events: EventWriter<AnimationFinished>,
    mut started_events: EventWriter<AttackStarted>,
) {
    let delta = time.delta_secs();
    let timings = AttackTimings::from_config(&config);

    for (entity, mut state) in query.iter_mut() {
        let outcome = state.tick(delta, &timings);

        if let Some(clip) = outcome.started {
            started_events.write(AttackStarted { entity, clip });
            crate::logger::log(&format!("⚔️ Buffered attack {} (entity: {:?})", clip.name(), entity));
        }

        if let Some(clip) = outcome.finished {
            finished_events.write(AnimationFinished { entity, clip });
        }
    }
}

/// System: apply `AnimationFinished` to the state machine.
pub fn handle_animation_finished(
    mut finished_events: EventReader<AnimationFinished>,
    mut query: Query<&mut AttackStateMachine>,
) {
    for event in finished_events.read() {
        let Ok(mut state) = query.get_mut(event.entity) else {
            continue;
        };

        if state.on_animation_finished(event.clip) {
            crate::logger::log(&format!(
                "✅ {} finished (entity: {:?}, follow-up: {})",
                event.clip.name(),
                event.entity,
                state.deferred_attack
            ));
        }
    }
}
