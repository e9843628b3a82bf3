//! Enemy events

use bevy::prelude::*;

use super::actions::SpawnEnemy;

/// Host-issued enemy actions.
///
/// Обрабатываются в `SimulationSet::Input`, до combat систем.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum EnemyCommand {
    Spawn(SpawnEnemy),
    /// Ring of default enemies around the origin
    SpawnWave { count: usize, radius: f32 },
    /// Ignored for entities without the `Enemy` marker
    Destroy(Entity),
    DestroyAll,
    Damage { entity: Entity, amount: u32 },
}

/// Enemy health reached zero (entity despawned at the end of the tick).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyDied {
    pub entity: Entity,
    /// None when the damage came from `EnemyCommand::Damage`
    pub killer: Option<Entity>,
}
