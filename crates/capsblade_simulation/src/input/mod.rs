//! Host input events
//!
//! Хост (renderer / браузер / тест) переводит устройства в эти events,
//! симуляция сама никакие устройства не читает.

pub mod events;

pub use events::{AttackButton, PlayerInput};
