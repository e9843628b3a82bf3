//! Headless симуляция Capsblade
//!
//! Скриптованный бой без рендера: игрок бьёт волну врагов,
//! в конце печатаем сколько осталось.
//!
//! Usage: `capsblade_simulation [config.ron]`

use bevy::prelude::*;
use capsblade_simulation::logger::{log_error, log_info};
use capsblade_simulation::{
    create_stepped_app, spawn_follow_camera, spawn_player, AttackButton, CombatConfig, Enemy, PlayerInput,
    SimulationPlugin,
};

const SEED: u64 = 42;
const TICKS: u32 = 1200;

fn main() {
    let mut app = create_stepped_app(SEED);

    let config = match std::env::args().nth(1) {
        Some(path) => match CombatConfig::load_from_file(&path) {
            Ok(config) => {
                log_info(&format!("Loaded config from {}", path));
                config
            }
            Err(err) => {
                log_error(&format!("Failed to load config {}: {}", path, err));
                std::process::exit(1);
            }
        },
        None => CombatConfig::default(),
    };

    log_info(&format!("Starting Capsblade headless simulation (seed: {})", SEED));

    app.insert_resource(config.clone()).add_plugins(SimulationPlugin);

    let player = spawn_player(&mut app.world_mut().commands(), Vec3::ZERO, &config);
    spawn_follow_camera(&mut app.world_mut().commands(), player, &config);
    app.world_mut().flush();

    // Warm-up: первый update стартует часы и спавнит волну
    app.update();

    for tick in 0..TICKS {
        drive_player(&mut app, tick);
        app.update();

        if tick % 120 == 0 {
            let enemies = count_enemies(&mut app);
            log_info(&format!("Tick {}: {} enemies alive", tick, enemies));
        }
    }

    log_info(&format!(
        "Simulation complete! {} enemies left after {} ticks",
        count_enemies(&mut app),
        TICKS
    ));
}

/// Скрипт: бежим по кругу, каждые 40 тиков quick attack, каждые 240 — spin.
fn drive_player(app: &mut App, tick: u32) {
    let angle = tick as f32 * 0.01;
    let world = app.world_mut();

    world.send_event(PlayerInput {
        move_direction: Vec2::new(angle.cos(), angle.sin()),
        pointer: Vec2::new(angle.sin(), -angle.cos()),
        dash: tick % 300 == 150,
    });

    match tick % 240 {
        0 => {
            world.send_event(AttackButton::Down);
        }
        // > charge time → spin attack
        40 => {
            world.send_event(AttackButton::Up);
        }
        t if t > 60 && t % 40 == 0 => {
            world.send_event(AttackButton::Down);
        }
        t if t > 60 && t % 40 == 2 => {
            world.send_event(AttackButton::Up);
        }
        _ => {}
    }
}

fn count_enemies(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<Enemy>>();
    query.iter(world).count()
}
