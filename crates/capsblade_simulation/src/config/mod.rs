//! Combat tuning configuration.
//!
//! Все game-feel константы (скорости, тайминги, радиусы) живут в одном
//! `CombatConfig` resource. Дефолты совпадают с прототипом, override через RON:
//!
//! ```ron
//! (
//!     attack: (charge_time: 0.6, spin_damage: 40),
//!     enemy: (initial_count: 4),
//! )
//! ```

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// RON parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Value out of range
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Root config resource.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CombatConfig {
    pub player: PlayerConfig,
    pub attack: AttackConfig,
    pub dash: DashConfig,
    pub enemy: EnemyConfig,
    pub camera: CameraConfig,
}

/// Locomotion tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Base run speed (units/sec)
    pub move_speed: f32,
    /// Lerp rate of the speed multiplier toward 0 while charging/spinning
    pub slowdown_rate: f32,
    /// Lerp rate of the speed multiplier back toward 1
    pub recover_rate: f32,
    /// Slerp rate of facing toward the pointer
    pub turn_rate: f32,
    pub collider_radius: f32,
    pub max_health: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            slowdown_rate: 3.0,
            recover_rate: 6.0,
            turn_rate: 10.0,
            collider_radius: 0.5,
            max_health: 100,
        }
    }
}

/// Attack state machine and hitbox tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackConfig {
    /// Playback speed of attack01/attack02
    pub attack_time_scale: f32,
    /// Playback speed of spin-attack
    pub spin_time_scale: f32,
    /// Hold time for a full charge (seconds)
    pub charge_time: f32,
    /// Unscaled clip length of attack01/attack02 (seconds)
    pub attack_clip_length: f32,
    /// Unscaled clip length of spin-attack (seconds)
    pub spin_clip_length: f32,
    /// Glow fade-out rate when idle
    pub glow_fade_rate: f32,
    /// Normalized clip time where the hitbox turns on
    pub hit_window_start: f32,
    /// Normalized clip time where the hitbox turns off
    pub hit_window_end: f32,
    pub quick_damage: u32,
    pub spin_damage: u32,
    /// Forward offset of the quick-attack hitbox center
    pub quick_reach: f32,
    pub quick_radius: f32,
    pub spin_radius: f32,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            attack_time_scale: 2.5,
            spin_time_scale: 1.5,
            charge_time: 0.5,
            attack_clip_length: 1.0,
            spin_clip_length: 1.2,
            glow_fade_rate: 4.0,
            hit_window_start: 0.2,
            hit_window_end: 0.8,
            quick_damage: 10,
            spin_damage: 25,
            quick_reach: 1.0,
            quick_radius: 1.2,
            spin_radius: 2.0,
        }
    }
}

/// Dash, spin-dash and attack lunge tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    pub distance: f32,
    pub duration: f32,
    /// Delay after a dash completes before the next one is allowed
    pub cooldown: f32,
    pub spin_distance: f32,
    pub spin_duration: f32,
    /// Short step forward on every quick attack (off by default)
    pub lunge_enabled: bool,
    pub lunge_distance: f32,
    pub lunge_duration: f32,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            distance: 3.0,
            duration: 0.2,
            cooldown: 0.4,
            spin_distance: 2.0,
            spin_duration: 0.4,
            lunge_enabled: false,
            lunge_distance: 1.2,
            lunge_duration: 0.15,
        }
    }
}

/// Enemy spawning and steering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Wave spawned on startup
    pub initial_count: usize,
    pub spawn_radius: f32,
    pub health: u32,
    pub speed: f32,
    pub collider_radius: f32,
    pub color: [f32; 3],
    /// Seconds between target velocity re-rolls
    pub wander_interval: f32,
    /// Velocity → target velocity lerp rate
    pub steering_rate: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            initial_count: 10,
            spawn_radius: 6.0,
            health: 100,
            speed: 1.0,
            collider_radius: 0.5,
            color: [1.0, 0.2, 0.2],
            wander_interval: 3.0,
            steering_rate: 2.0,
        }
    }
}

/// Follow camera rig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub offset: [f32; 3],
    pub follow_rate: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: [0.0, 6.0, 10.0],
            follow_rate: 4.0,
        }
    }
}

impl CombatConfig {
    /// Load and validate a RON config file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player.move_speed", self.player.move_speed),
            ("player.collider_radius", self.player.collider_radius),
            ("attack.attack_time_scale", self.attack.attack_time_scale),
            ("attack.spin_time_scale", self.attack.spin_time_scale),
            ("attack.charge_time", self.attack.charge_time),
            ("attack.attack_clip_length", self.attack.attack_clip_length),
            ("attack.spin_clip_length", self.attack.spin_clip_length),
            ("attack.quick_radius", self.attack.quick_radius),
            ("attack.spin_radius", self.attack.spin_radius),
            ("dash.duration", self.dash.duration),
            ("dash.spin_duration", self.dash.spin_duration),
            ("dash.lunge_duration", self.dash.lunge_duration),
            ("enemy.collider_radius", self.enemy.collider_radius),
            ("enemy.wander_interval", self.enemy.wander_interval),
        ];

        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{} must be > 0 (got {})", name, value)));
            }
        }

        let attack = &self.attack;
        if !(0.0..=1.0).contains(&attack.hit_window_start)
            || !(0.0..=1.0).contains(&attack.hit_window_end)
            || attack.hit_window_start >= attack.hit_window_end
        {
            return Err(ConfigError::Invalid(format!(
                "attack hit window must satisfy 0 <= start < end <= 1 (got {}..{})",
                attack.hit_window_start, attack.hit_window_end
            )));
        }

        if self.dash.cooldown < 0.0 {
            return Err(ConfigError::Invalid("dash.cooldown must be >= 0".to_string()));
        }

        Ok(())
    }

    /// Scaled (wall-clock) duration of a quick attack clip.
    pub fn attack_clip_duration(&self) -> f32 {
        self.attack.attack_clip_length / self.attack.attack_time_scale
    }

    /// Scaled (wall-clock) duration of the spin-attack clip.
    pub fn spin_clip_duration(&self) -> f32 {
        self.attack.spin_clip_length / self.attack.spin_time_scale
    }
}
