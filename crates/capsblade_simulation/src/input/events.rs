//! Player input events

use bevy::prelude::{Event, Vec2};

/// Per-frame locomotion input.
///
/// # Fields
/// - `move_direction`: WASD axes, `x`: -1 (left) → +1 (right), `y`: -1 (up, -Z) → +1 (down, +Z)
/// - `pointer`: cursor in normalized device coords (-1..1), player faces it
/// - `dash`: Shift (just_pressed)
#[derive(Event, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    pub move_direction: Vec2,
    pub pointer: Vec2,
    pub dash: bool,
}

/// Attack button edge (mouse down / mouse up).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackButton {
    Down,
    Up,
}
