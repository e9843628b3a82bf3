//! Capsblade Simulation Core
//!
//! Headless combat ядро на Bevy 0.16: attack/charge/spin state machine,
//! dash controller, collision registry, enemy lifecycle.
//!
//! Хост (renderer) кормит input events и читает component state:
//! - Input: `AttackButton`, `PlayerInput`, `EnemyCommand`
//! - Output: `Transform`, `AttackStateMachine` (clip, glow), `Health`, events
//!   (`SwordHit`, `DamageDealt`, `EnemyDied`, `SpinAttackTriggered`)

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod collision;
pub mod combat;
pub mod components;
pub mod config;
pub mod enemy;
pub mod input;
pub mod logger;
pub mod player;

// Re-export базовых типов для удобства
pub use collision::{Collider, ColliderId, ColliderLayer, CollisionError, CollisionPlugin, CollisionRegistry, CollisionSet};
pub use combat::{
    ActionClip, AnimationFinished, AttackAction, AttackStateMachine, CombatPlugin, DamageDealt, Dash, SpinAttackTriggered,
    SwordHit,
};
pub use components::*;
pub use config::{CombatConfig, ConfigError};
pub use enemy::{Enemy, EnemyCommand, EnemyDied, EnemyPlugin, SpawnEnemy};
pub use input::{AttackButton, PlayerInput};
pub use logger::init_logger;
pub use player::{spawn_follow_camera, spawn_player, PlayerPlugin};

/// Tick rate of the simulation (FixedUpdate)
pub const SIMULATION_HZ: f64 = 60.0;

/// Фазы одного fixed tick'а.
///
/// ```text
/// Input → Actions → Movement → CollisionSet::Sync → Hits → Resolve
/// ```
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Host events → state (attack buttons, movement input, enemy commands)
    Input,
    /// State machines tick (charge, clips, dash triggers)
    Actions,
    /// Transforms change (dashes, locomotion, enemy steering)
    Movement,
    /// Registry queries (sword hitboxes)
    Hits,
    /// Consequences (damage, death, despawn)
    Resolve,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            // Хост может вставить свой config до plugin'а
            .init_resource::<CombatConfig>();

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Input,
                SimulationSet::Actions,
                SimulationSet::Movement,
                CollisionSet::Sync,
                SimulationSet::Hits,
                SimulationSet::Resolve,
            )
                .chain(),
        );

        app.add_plugins((CollisionPlugin, CombatPlugin, PlayerPlugin, EnemyPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ)); // 60Hz FixedUpdate

    app
}

/// Headless app где каждый `app.update()` = ровно один fixed tick.
///
/// Первый `update()` только стартует часы (delta = 0), FixedUpdate не бежит.
pub fn create_stepped_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / SIMULATION_HZ,
    )));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
