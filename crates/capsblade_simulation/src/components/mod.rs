//! ECS Components, общие для нескольких доменов
//!
//! - actor: здоровье и цвет (Health, Tint)
//! - movement: скорость и steering (Velocity, TargetVelocity, MovementSpeed)
//! - player: маркер игрока и локомоция (Player, PlayerMotion)
//! - camera: follow camera rig (FollowCamera)

pub mod actor;
pub mod movement;
pub mod player;
pub mod camera;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
pub use player::*;
pub use camera::*;
