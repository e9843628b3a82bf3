//! Dash controller: eased position tweens gated by a cooldown.

use bevy::prelude::*;

/// Easing curves used by dashes.
///
/// `Power2Out` / `Power3In` повторяют GSAP кривые (cubic out, quartic in).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum Easing {
    Linear,
    Power2Out,
    Power3In,
}

impl Easing {
    /// Map linear progress `t` (clamped to 0..1) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3In => t.powi(4),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum DashKind {
    /// Shift dash (puts the dash on cooldown when it completes)
    Dash,
    /// Forward burst released with a spin attack
    SpinDash,
    /// Short step into a quick attack
    Lunge,
}

/// In-flight dash tween.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct DashMotion {
    pub kind: DashKind,
    pub start: Vec3,
    pub target: Vec3,
    pub elapsed: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl DashMotion {
    pub fn new(kind: DashKind, start: Vec3, direction: Vec3, distance: f32, duration: f32, easing: Easing) -> Self {
        Self {
            kind,
            start,
            target: start + direction.normalize_or_zero() * distance,
            elapsed: 0.0,
            duration,
            easing,
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn position(&self) -> Vec3 {
        self.start.lerp(self.target, self.easing.apply(self.progress()))
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// One step of `Dash::tick`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashStep {
    /// Where the dash puts the entity this tick
    pub position: Vec3,
    /// Set on the tick the tween finishes
    pub completed: Option<DashKind>,
}

/// Dash state of an entity.
///
/// `motion.is_some()` = is dashing; locomotion пропускается пока tween идёт.
#[derive(Component, Clone, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct Dash {
    pub motion: Option<DashMotion>,
    /// Seconds until the next shift dash is allowed
    pub cooldown: f32,
}

impl Dash {
    pub fn is_dashing(&self) -> bool {
        self.motion.is_some()
    }

    pub fn can_dash(&self) -> bool {
        !self.is_dashing() && self.cooldown <= 0.0
    }

    /// Shift dash. Refused while dashing, on cooldown or without a direction.
    pub fn try_dash(&mut self, origin: Vec3, direction: Vec3, distance: f32, duration: f32) -> bool {
        if !self.can_dash() || direction.length_squared() == 0.0 {
            return false;
        }

        self.motion = Some(DashMotion::new(
            DashKind::Dash,
            origin,
            direction,
            distance,
            duration,
            Easing::Power2Out,
        ));
        true
    }

    /// Spin dash ignores the cooldown and overrides any active tween.
    pub fn spin_dash(&mut self, origin: Vec3, direction: Vec3, distance: f32, duration: f32) -> bool {
        if direction.length_squared() == 0.0 {
            return false;
        }

        self.motion = Some(DashMotion::new(
            DashKind::SpinDash,
            origin,
            direction,
            distance,
            duration,
            Easing::Power3In,
        ));
        true
    }

    /// Attack lunge. Skipped while another dash is running.
    pub fn lunge(&mut self, origin: Vec3, direction: Vec3, distance: f32, duration: f32) -> bool {
        if self.is_dashing() || direction.length_squared() == 0.0 {
            return false;
        }

        self.motion = Some(DashMotion::new(
            DashKind::Lunge,
            origin,
            direction,
            distance,
            duration,
            Easing::Power2Out,
        ));
        true
    }

    /// Advance cooldown and the active tween.
    ///
    /// `cooldown_after` применяется только к завершённому shift dash.
    pub fn tick(&mut self, delta: f32, cooldown_after: f32) -> Option<DashStep> {
        self.cooldown = (self.cooldown - delta).max(0.0);

        let motion = self.motion.as_mut()?;
        motion.elapsed += delta;

        let position = motion.position();
        if !motion.is_complete() {
            return Some(DashStep { position, completed: None });
        }

        let kind = motion.kind;
        self.motion = None;
        if kind == DashKind::Dash {
            self.cooldown = cooldown_after;
        }

        Some(DashStep {
            position,
            completed: Some(kind),
        })
    }
}
