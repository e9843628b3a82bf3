//! Player controller tests (stepped headless app, 1 update = 1 tick)

use bevy::prelude::*;

use crate::combat::Dash;
use crate::components::{FollowCamera, PlayerMotion};
use crate::config::CombatConfig;
use crate::enemy::{spawn_enemy, SpawnEnemy};
use crate::input::{AttackButton, PlayerInput};
use crate::player::{spawn_follow_camera, spawn_player};
use crate::{create_stepped_app, SimulationPlugin};

fn quiet_config() -> CombatConfig {
    let mut config = CombatConfig::default();
    config.enemy.initial_count = 0;
    config
}

fn setup(config: &CombatConfig) -> (App, Entity) {
    let mut app = create_stepped_app(7);
    app.insert_resource(config.clone()).add_plugins(SimulationPlugin);

    let player = spawn_player(&mut app.world_mut().commands(), Vec3::ZERO, config);
    app.world_mut().flush();

    // Warm-up: первый update без fixed tick'а
    app.update();
    (app, player)
}

fn step(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

fn position(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<Transform>(entity).expect("transform").translation
}

#[test]
fn test_player_runs_at_move_speed() {
    let config = quiet_config();
    let (mut app, player) = setup(&config);

    app.world_mut().send_event(PlayerInput {
        move_direction: Vec2::new(1.0, 0.0),
        pointer: Vec2::new(0.0, -1.0),
        dash: false,
    });
    step(&mut app, 60);

    // 6 units/sec × 1 sec
    let pos = position(&app, player);
    assert!((pos.x - 6.0).abs() < 0.05, "x = {}", pos.x);
    assert!(pos.z.abs() < 1e-4);
}

#[test]
fn test_shift_dash_moves_and_then_cools_down() {
    let config = quiet_config();
    let (mut app, player) = setup(&config);

    // Без движения dash летит туда, куда смотрим (+Z при identity)
    app.world_mut().send_event(PlayerInput {
        move_direction: Vec2::ZERO,
        pointer: Vec2::new(0.0, -1.0),
        dash: true,
    });
    step(&mut app, 20);

    let after_dash = position(&app, player);
    assert!((after_dash.z - 3.0).abs() < 1e-3, "z = {}", after_dash.z);

    let dash = app.world().get::<Dash>(player).expect("dash");
    assert!(!dash.is_dashing());
    assert!(dash.cooldown > 0.0);

    // Cooldown ещё идёт → второй dash отклонён
    app.world_mut().send_event(PlayerInput {
        move_direction: Vec2::ZERO,
        pointer: Vec2::new(0.0, -1.0),
        dash: true,
    });
    step(&mut app, 15);
    assert_eq!(position(&app, player), after_dash);

    // После cooldown'а dash снова доступен
    step(&mut app, 20);
    app.world_mut().send_event(PlayerInput {
        move_direction: Vec2::ZERO,
        pointer: Vec2::new(0.0, -1.0),
        dash: true,
    });
    step(&mut app, 20);
    assert!((position(&app, player).z - 6.0).abs() < 1e-3);
}

#[test]
fn test_charging_slows_player_down() {
    let config = quiet_config();
    let (mut app, player) = setup(&config);

    app.world_mut().send_event(AttackButton::Down);
    step(&mut app, 30);

    let motion = app.world().get::<PlayerMotion>(player).expect("motion");
    assert!(motion.speed_multiplier < 0.5, "multiplier = {}", motion.speed_multiplier);
}

#[test]
fn test_solid_enemy_blocks_player() {
    let config = quiet_config();
    let mut app = create_stepped_app(7);
    app.insert_resource(config.clone()).add_plugins(SimulationPlugin);

    let player = spawn_player(&mut app.world_mut().commands(), Vec3::ZERO, &config);
    spawn_enemy(
        &mut app.world_mut().commands(),
        &SpawnEnemy::default().at(Vec3::new(2.0, 0.0, 0.0)).with_speed(0.0),
        config.enemy.collider_radius,
    );
    app.world_mut().flush();
    app.update();

    app.world_mut().send_event(PlayerInput {
        move_direction: Vec2::new(1.0, 0.0),
        pointer: Vec2::new(0.0, -1.0),
        dash: false,
    });
    step(&mut app, 60);

    // Радиусы 0.5 + 0.5 → игрок останавливается в 1.0 от центра врага
    let pos = position(&app, player);
    assert!(pos.x <= 1.0 + 1e-3, "x = {}", pos.x);
    assert!(pos.x > 0.9);
}

#[test]
fn test_camera_trails_player() {
    let config = quiet_config();
    let (mut app, player) = setup(&config);

    let camera = spawn_follow_camera(&mut app.world_mut().commands(), player, &config);
    app.world_mut().flush();

    app.world_mut().send_event(PlayerInput {
        move_direction: Vec2::new(0.0, -1.0),
        pointer: Vec2::new(0.0, 1.0),
        dash: false,
    });
    step(&mut app, 120);

    let player_pos = position(&app, player);
    let camera_pos = position(&app, camera);
    let rig = app.world().get::<FollowCamera>(camera).expect("rig");

    // Камера отстаёт, но двигается в ту же сторону
    assert!(camera_pos.z < rig.offset.z);
    assert!(camera_pos.z > player_pos.z + rig.offset.z);
    assert!((camera_pos.y - 6.0).abs() < 1e-3);
}
