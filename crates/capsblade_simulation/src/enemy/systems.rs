//! Enemy systems: commands, steering, movement, damage.

use bevy::prelude::*;
use rand::Rng;

use super::actions::{destroy_all_enemies, destroy_enemy, damage_enemy, spawn_enemy, spawn_enemy_wave, SpawnEnemy};
use super::components::{Enemy, Wander};
use super::events::{EnemyCommand, EnemyDied};
use crate::combat::{DamageDealt, SwordHit};
use crate::components::{lerp, planar, Health, MovementSpeed, TargetVelocity, Velocity};
use crate::config::CombatConfig;
use crate::DeterministicRng;

/// Startup system: initial ring of enemies.
pub fn spawn_initial_wave(mut commands: Commands, config: Res<CombatConfig>) {
    let enemy = &config.enemy;
    if enemy.initial_count == 0 {
        return;
    }

    spawn_enemy_wave(
        &mut commands,
        enemy.initial_count,
        enemy.spawn_radius,
        &SpawnEnemy::from_config(enemy),
        enemy.collider_radius,
    );
}

/// System: execute host `EnemyCommand`s.
pub fn process_enemy_commands(
    mut commands: Commands,
    mut events: EventReader<EnemyCommand>,
    markers: Query<(), With<Enemy>>,
    all_enemies: Query<Entity, With<Enemy>>,
    mut healths: Query<&mut Health, With<Enemy>>,
    config: Res<CombatConfig>,
    mut damage_events: EventWriter<DamageDealt>,
    mut died_events: EventWriter<EnemyDied>,
) {
    let enemy = &config.enemy;

    for event in events.read() {
        match event {
            EnemyCommand::Spawn(options) => {
                let entity = spawn_enemy(&mut commands, options, enemy.collider_radius);
                crate::logger::log(&format!("👾 Enemy spawned at {:?} (entity: {:?})", options.position, entity));
            }
            EnemyCommand::SpawnWave { count, radius } => {
                spawn_enemy_wave(
                    &mut commands,
                    *count,
                    *radius,
                    &SpawnEnemy::from_config(enemy),
                    enemy.collider_radius,
                );
            }
            EnemyCommand::Destroy(entity) => {
                if !destroy_enemy(&mut commands, &markers, *entity) {
                    crate::logger::log_warning(&format!("Destroy ignored: {:?} is not an enemy", entity));
                }
            }
            EnemyCommand::DestroyAll => {
                let count = destroy_all_enemies(&mut commands, &all_enemies);
                crate::logger::log_info(&format!("🧹 Destroyed all enemies ({})", count));
            }
            EnemyCommand::Damage { entity, amount } => {
                let Ok(mut health) = healths.get_mut(*entity) else {
                    continue;
                };
                if !health.is_alive() {
                    continue;
                }

                let remaining = damage_enemy(&mut commands, *entity, &mut health, *amount);
                damage_events.write(DamageDealt {
                    attacker: None,
                    target: *entity,
                    damage: *amount,
                    remaining,
                });
                if remaining == 0 {
                    died_events.write(EnemyDied {
                        entity: *entity,
                        killer: None,
                    });
                }
            }
        }
    }
}

/// System: apply sword hits to enemy health.
///
/// Враг, убитый раньше в этом же tick'е (health 0, ещё не despawned), пропускается.
pub fn apply_sword_hits(
    mut commands: Commands,
    mut hits: EventReader<SwordHit>,
    mut enemies: Query<&mut Health, With<Enemy>>,
    mut damage_events: EventWriter<DamageDealt>,
    mut died_events: EventWriter<EnemyDied>,
) {
    for hit in hits.read() {
        let Ok(mut health) = enemies.get_mut(hit.target) else {
            continue;
        };
        if !health.is_alive() {
            continue;
        }

        let remaining = damage_enemy(&mut commands, hit.target, &mut health, hit.damage);
        damage_events.write(DamageDealt {
            attacker: Some(hit.attacker),
            target: hit.target,
            damage: hit.damage,
            remaining,
        });

        if remaining == 0 {
            died_events.write(EnemyDied {
                entity: hit.target,
                killer: Some(hit.attacker),
            });
            crate::logger::log_info(&format!(
                "☠️ Enemy {:?} destroyed by {:?} ({})",
                hit.target,
                hit.attacker,
                hit.clip.name()
            ));
        }
    }
}

/// System: re-roll wander targets, ease velocity toward them.
pub fn steer_enemies(
    mut enemies: Query<(&mut Wander, &mut Velocity, &mut TargetVelocity, &MovementSpeed), With<Enemy>>,
    mut rng: ResMut<DeterministicRng>,
    config: Res<CombatConfig>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();
    let enemy = &config.enemy;

    for (mut wander, mut velocity, mut target, speed) in enemies.iter_mut() {
        wander.timer -= delta;
        if wander.timer <= 0.0 {
            wander.timer = enemy.wander_interval;

            let angle = rng.rng.gen_range(0.0..std::f32::consts::TAU);
            let magnitude = rng.rng.gen_range(0.0..=1.0) * speed.speed;
            target.0 = Vec3::new(angle.cos(), 0.0, angle.sin()) * magnitude;
        }

        let t = delta * enemy.steering_rate;
        velocity.0 = Vec3::new(
            lerp(velocity.0.x, target.0.x, t),
            0.0,
            lerp(velocity.0.z, target.0.z, t),
        );
    }
}

/// System: integrate enemy position, face the direction of travel.
pub fn move_enemies(mut enemies: Query<(&mut Transform, &Velocity), With<Enemy>>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for (mut transform, velocity) in enemies.iter_mut() {
        let step = planar(velocity.0);
        if step.length_squared() <= f32::EPSILON {
            continue;
        }

        transform.translation += step * delta;
        transform.rotation = Quat::from_rotation_y(step.x.atan2(step.z));
    }
}
