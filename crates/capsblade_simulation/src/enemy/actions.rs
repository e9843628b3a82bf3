//! Enemy actions: spawn, wave, destroy, damage.
//!
//! Все функции работают через `Commands` — структурные изменения
//! применяются в конце system'ы, registry подхватит их в `CollisionSet::Sync`.

use std::f32::consts::TAU;

use bevy::prelude::*;

use super::components::{BasicEnemy, Enemy, Wander};
use crate::collision::{Collider, ColliderLayer, HitResponse};
use crate::components::{Health, MovementSpeed, TargetVelocity, Tint, Velocity};
use crate::config::EnemyConfig;

/// Spawn options for a single enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnEnemy {
    pub position: Vec3,
    pub velocity: Vec3,
    pub health: u32,
    pub speed: f32,
    pub color: [f32; 3],
    pub scale: f32,
}

impl Default for SpawnEnemy {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            health: 100,
            speed: 1.0,
            color: [1.0, 0.2, 0.2],
            scale: 1.0,
        }
    }
}

impl SpawnEnemy {
    /// Defaults taken from the enemy config section.
    pub fn from_config(config: &EnemyConfig) -> Self {
        Self {
            health: config.health,
            speed: config.speed,
            color: config.color,
            ..Default::default()
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health;
        self
    }
}

/// Spawn one enemy.
///
/// Collider id = `enemy-<entity>`, solid, owner получает `SwordHit`.
pub fn spawn_enemy(commands: &mut Commands, options: &SpawnEnemy, collider_radius: f32) -> Entity {
    let entity = commands
        .spawn((
            Enemy,
            BasicEnemy,
            Transform::from_translation(options.position).with_scale(Vec3::splat(options.scale)),
            Velocity(options.velocity),
            // Steering стартует с текущей скорости, без рывка
            TargetVelocity(options.velocity),
            MovementSpeed { speed: options.speed },
            Health::new(options.health),
            Tint::from(options.color),
            Wander::default(),
        ))
        .id();

    commands.entity(entity).insert(
        Collider::new(format!("enemy-{}", entity), collider_radius, ColliderLayer::Enemy)
            .solid()
            .with_hit_response(HitResponse::NotifyOwner),
    );

    entity
}

/// Evenly spaced points on a circle: angle = i / count · 2π.
pub fn wave_positions(count: usize, radius: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

/// Spawn `count` enemies on a ring of `radius`.
pub fn spawn_enemy_wave(
    commands: &mut Commands,
    count: usize,
    radius: f32,
    template: &SpawnEnemy,
    collider_radius: f32,
) -> Vec<Entity> {
    let entities: Vec<Entity> = wave_positions(count, radius)
        .into_iter()
        .map(|position| spawn_enemy(commands, &template.clone().at(position), collider_radius))
        .collect();

    crate::logger::log_info(&format!("👾 Spawned wave: {} enemies (radius {:.1})", count, radius));
    entities
}

/// Despawn `entity` if it is an enemy.
pub fn destroy_enemy(commands: &mut Commands, enemies: &Query<(), With<Enemy>>, entity: Entity) -> bool {
    if !enemies.contains(entity) {
        return false;
    }

    if let Ok(mut entity_commands) = commands.get_entity(entity) {
        entity_commands.try_despawn();
    }
    true
}

/// Despawn every enemy, returns how many were removed.
pub fn destroy_all_enemies(commands: &mut Commands, enemies: &Query<Entity, With<Enemy>>) -> usize {
    let mut count = 0;
    for entity in enemies.iter() {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.try_despawn();
            count += 1;
        }
    }
    count
}

/// Subtract `amount` (clamped at 0), despawn on zero. Returns remaining health.
pub fn damage_enemy(commands: &mut Commands, entity: Entity, health: &mut Health, amount: u32) -> u32 {
    health.take_damage(amount);

    if !health.is_alive() {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.try_despawn();
        }
    }

    health.current
}
