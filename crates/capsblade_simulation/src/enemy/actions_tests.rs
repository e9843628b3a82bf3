//! Enemy action tests

use bevy::prelude::*;

use crate::collision::{Collider, CollisionRegistry, HitResponse};
use crate::components::{Health, MovementSpeed, TargetVelocity, Tint, Velocity};
use crate::config::CombatConfig;
use crate::enemy::{
    spawn_enemy, wave_positions, BasicEnemy, Enemy, EnemyCommand, EnemyDied, SpawnEnemy,
};
use crate::{create_stepped_app, DamageDealt, SimulationPlugin};

fn enemy_count(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<Enemy>>();
    query.iter(world).count()
}

fn quiet_app() -> App {
    let mut config = CombatConfig::default();
    config.enemy.initial_count = 0;

    let mut app = create_stepped_app(11);
    app.insert_resource(config).add_plugins(SimulationPlugin);
    app.update();
    app
}

#[test]
fn test_spawn_enemy_defaults() {
    let mut world = World::new();
    let options = SpawnEnemy::default();
    let entity = spawn_enemy(&mut world.commands(), &options, 0.5);
    world.flush();

    let entity_ref = world.entity(entity);
    assert!(entity_ref.contains::<Enemy>());
    assert!(entity_ref.contains::<BasicEnemy>());
    assert_eq!(entity_ref.get::<Health>(), Some(&Health { current: 100, max: 100 }));
    assert_eq!(entity_ref.get::<MovementSpeed>(), Some(&MovementSpeed { speed: 1.0 }));
    assert_eq!(entity_ref.get::<Tint>(), Some(&Tint::new(1.0, 0.2, 0.2)));
    assert_eq!(entity_ref.get::<Velocity>(), Some(&Velocity(Vec3::ZERO)));
    assert_eq!(entity_ref.get::<TargetVelocity>(), Some(&TargetVelocity(Vec3::ZERO)));

    let transform = entity_ref.get::<Transform>().expect("transform");
    assert_eq!(transform.translation, Vec3::ZERO);
    assert_eq!(transform.scale, Vec3::ONE);

    let collider = entity_ref.get::<Collider>().expect("collider");
    assert_eq!(collider.id.as_str(), format!("enemy-{}", entity));
    assert!(collider.solid);
    assert_eq!(collider.on_hit, HitResponse::NotifyOwner);
}

#[test]
fn test_spawn_enemy_options() {
    let mut world = World::new();
    let options = SpawnEnemy {
        position: Vec3::new(1.0, 0.0, -2.0),
        velocity: Vec3::new(0.5, 0.0, 0.0),
        health: 40,
        speed: 2.0,
        color: [0.0, 1.0, 0.0],
        scale: 1.5,
    };
    let entity = spawn_enemy(&mut world.commands(), &options, 0.5);
    world.flush();

    let entity_ref = world.entity(entity);
    assert_eq!(entity_ref.get::<Health>(), Some(&Health { current: 40, max: 40 }));
    assert_eq!(entity_ref.get::<TargetVelocity>(), Some(&TargetVelocity(Vec3::new(0.5, 0.0, 0.0))));
    assert_eq!(entity_ref.get::<Transform>().map(|t| t.scale), Some(Vec3::splat(1.5)));
}

#[test]
fn test_wave_positions_on_circle() {
    let positions = wave_positions(4, 6.0);
    assert_eq!(positions.len(), 4);

    // angle = i / count · 2π → (r, 0), (0, r), (-r, 0), (0, -r)
    assert!((positions[0] - Vec3::new(6.0, 0.0, 0.0)).length() < 1e-4);
    assert!((positions[1] - Vec3::new(0.0, 0.0, 6.0)).length() < 1e-4);
    assert!((positions[2] - Vec3::new(-6.0, 0.0, 0.0)).length() < 1e-4);
    assert!((positions[3] - Vec3::new(0.0, 0.0, -6.0)).length() < 1e-4);

    for position in &positions {
        assert!((position.length() - 6.0).abs() < 1e-4);
    }
    assert!(wave_positions(0, 6.0).is_empty());
}

#[test]
fn test_initial_wave_spawned_on_startup() {
    let mut app = create_stepped_app(3);
    app.add_plugins(SimulationPlugin);
    app.update();
    app.update();

    assert_eq!(enemy_count(&mut app), 10);
    assert_eq!(app.world().resource::<CollisionRegistry>().len(), 10);
}

#[test]
fn test_damage_command_clamps_and_destroys() {
    let mut app = quiet_app();
    let enemy = spawn_enemy(
        &mut app.world_mut().commands(),
        &SpawnEnemy::default().with_health(30).with_speed(0.0),
        0.5,
    );
    app.world_mut().flush();
    app.update();

    app.world_mut().send_event(EnemyCommand::Damage { entity: enemy, amount: 10 });
    app.update();
    assert_eq!(app.world().get::<Health>(enemy).map(|h| h.current), Some(20));

    // Overkill → health 0, entity despawned
    app.world_mut().send_event(EnemyCommand::Damage { entity: enemy, amount: 50 });
    app.update();
    assert!(app.world().get_entity(enemy).is_err());

    let damage: Vec<DamageDealt> = app
        .world_mut()
        .resource_mut::<Events<DamageDealt>>()
        .drain()
        .collect();
    assert_eq!(damage.last().map(|d| d.remaining), Some(0));

    let died: Vec<EnemyDied> = app.world_mut().resource_mut::<Events<EnemyDied>>().drain().collect();
    assert_eq!(died, vec![EnemyDied { entity: enemy, killer: None }]);
}

#[test]
fn test_destroy_ignores_non_enemies() {
    let mut app = quiet_app();
    let bystander = app.world_mut().spawn(Transform::IDENTITY).id();
    let enemy = spawn_enemy(&mut app.world_mut().commands(), &SpawnEnemy::default(), 0.5);
    app.world_mut().flush();
    app.update();

    app.world_mut().send_event(EnemyCommand::Destroy(bystander));
    app.world_mut().send_event(EnemyCommand::Destroy(enemy));
    app.update();

    assert!(app.world().get_entity(bystander).is_ok());
    assert!(app.world().get_entity(enemy).is_err());
}

#[test]
fn test_destroy_all_and_wave_commands() {
    let mut app = quiet_app();

    app.world_mut().send_event(EnemyCommand::SpawnWave { count: 5, radius: 3.0 });
    app.update();
    assert_eq!(enemy_count(&mut app), 5);

    app.world_mut().send_event(EnemyCommand::DestroyAll);
    app.update();
    assert_eq!(enemy_count(&mut app), 0);

    // Registry чистится в sync следующего tick'а
    app.update();
    assert!(app.world().resource::<CollisionRegistry>().is_empty());
}
