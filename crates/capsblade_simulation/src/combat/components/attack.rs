//! Player attack state machine.
//!
//! Tracks hold-to-charge, quick attack alternation, queued follow-ups
//! and the spin attack released from a full charge.
//!
//! # Flow
//!
//! ```text
//! press (idle)      → Charging (stance clip, charge ramps 0 → 1)
//! release < charge  → Attacking (attack01 / attack02, alternating)
//! release ≥ charge  → SpinAttack (spin-attack clip + spin dash)
//! release mid-swing → queue one follow-up, starts the tick after the clip ends
//! clip finished     → Idle (stance)
//! ```

use bevy::prelude::*;

use crate::components::lerp;
use crate::config::CombatConfig;

// ============================================================================
// Clips & Actions
// ============================================================================

/// Animation clips the state machine drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum ActionClip {
    Stance,
    Attack01,
    Attack02,
    SpinAttack,
}

impl ActionClip {
    /// Clip name as exported by the character asset.
    pub fn name(self) -> &'static str {
        match self {
            ActionClip::Stance => "stance",
            ActionClip::Attack01 => "attack01",
            ActionClip::Attack02 => "attack02",
            ActionClip::SpinAttack => "spin-attack",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "stance" => Some(ActionClip::Stance),
            "attack01" => Some(ActionClip::Attack01),
            "attack02" => Some(ActionClip::Attack02),
            "spin-attack" => Some(ActionClip::SpinAttack),
            _ => None,
        }
    }

    /// One-shot clips that lock the state machine while playing.
    pub fn is_attack(self) -> bool {
        !matches!(self, ActionClip::Stance)
    }

    /// attack01 ↔ attack02
    pub fn alternate(self) -> Self {
        match self {
            ActionClip::Attack01 => ActionClip::Attack02,
            ActionClip::Attack02 => ActionClip::Attack01,
            other => other,
        }
    }
}

/// High-level action of the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Reflect)]
pub enum AttackAction {
    /// Stance, ничего не происходит
    #[default]
    Idle,
    /// Button held, charge ramping up
    Charging,
    /// attack01/attack02 playing
    Attacking,
    /// spin-attack playing
    SpinAttack,
}

/// Progress of the one-shot clip currently playing.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct ClipPlayback {
    pub clip: ActionClip,
    /// Seconds since the clip started (wall clock, time scale applied)
    pub elapsed: f32,
    /// Scaled clip duration (seconds)
    pub duration: f32,
    /// Finish already reported
    pub finished: bool,
}

impl ClipPlayback {
    pub fn new(clip: ActionClip, duration: f32) -> Self {
        Self {
            clip,
            elapsed: 0.0,
            duration,
            finished: false,
        }
    }

    /// 0.0 at clip start → 1.0 at clip end.
    pub fn normalized_time(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}

/// Timing constants pulled from `CombatConfig` once per system run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackTimings {
    /// Scaled attack01/attack02 duration
    pub attack_duration: f32,
    /// Scaled spin-attack duration
    pub spin_duration: f32,
    pub charge_time: f32,
    pub glow_fade_rate: f32,
}

impl Default for AttackTimings {
    fn default() -> Self {
        Self::from_config(&CombatConfig::default())
    }
}

impl AttackTimings {
    pub fn from_config(config: &CombatConfig) -> Self {
        Self {
            attack_duration: config.attack_clip_duration(),
            spin_duration: config.spin_clip_duration(),
            charge_time: config.attack.charge_time,
            glow_fade_rate: config.attack.glow_fade_rate,
        }
    }

    pub fn clip_duration(&self, clip: ActionClip) -> f32 {
        match clip {
            ActionClip::Attack01 | ActionClip::Attack02 => self.attack_duration,
            ActionClip::SpinAttack => self.spin_duration,
            ActionClip::Stance => 0.0,
        }
    }
}

/// Result of a button release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Release without a matching press
    Ignored,
    /// Quick attack started with this clip
    QuickAttack(ActionClip),
    /// Full charge released
    SpinAttack,
    /// Swing in progress, follow-up buffered
    Queued,
}

/// Result of one `tick`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Clip that reached its end this tick
    pub finished: Option<ActionClip>,
    /// Buffered attack that started this tick
    pub started: Option<ActionClip>,
}

// ============================================================================
// State Machine Component
// ============================================================================

/// Attack state machine of the player.
#[derive(Component, Clone, Debug, Reflect)]
#[reflect(Component)]
pub struct AttackStateMachine {
    pub action: AttackAction,
    /// Clip currently driving the character
    pub current_animation: ActionClip,
    /// Quick attack that plays next (alternates)
    pub next_attack: ActionClip,
    /// A one-shot attack clip is playing (locks input)
    pub is_animating: bool,
    pub is_holding: bool,
    pub is_charging: bool,
    /// Simulation time of the last press (seconds)
    pub hold_start: f32,
    /// 0.0 → 1.0 while charging
    pub charge_progress: f32,
    /// Release arrived mid-swing
    pub queued_attack: bool,
    /// Queued attack waits one tick after the finishing clip
    pub deferred_attack: bool,
    /// Sword glow intensity 0.0 → 1.0
    pub glow: f32,
    pub playback: Option<ClipPlayback>,
    /// Entities already hit during this swing (prevents multiple hits)
    pub hit_entities: Vec<Entity>,
}

impl Default for AttackStateMachine {
    fn default() -> Self {
        Self {
            action: AttackAction::Idle,
            current_animation: ActionClip::Stance,
            next_attack: ActionClip::Attack01,
            is_animating: false,
            is_holding: false,
            is_charging: false,
            hold_start: 0.0,
            charge_progress: 0.0,
            queued_attack: false,
            deferred_attack: false,
            glow: 0.0,
            playback: None,
            hit_entities: Vec::new(),
        }
    }
}

impl AttackStateMachine {
    /// Switch to `clip`.
    ///
    /// Attack clips are refused while another attack clip plays
    /// (a swing cannot be interrupted) and when the same clip is already current.
    /// `Stance` always plays and drops any swing in progress.
    pub fn play(&mut self, clip: ActionClip, timings: &AttackTimings) -> bool {
        if clip.is_attack() && (self.current_animation == clip || self.is_animating) {
            return false;
        }

        match clip {
            ActionClip::Stance => {
                self.playback = None;
                // Cross-fade в stance обрывает swing целиком
                if self.is_animating {
                    self.is_animating = false;
                    self.action = AttackAction::Idle;
                    self.queued_attack = false;
                    self.deferred_attack = false;
                }
            }
            ActionClip::Attack01 | ActionClip::Attack02 => {
                self.playback = Some(ClipPlayback::new(clip, timings.clip_duration(clip)));
                self.is_animating = true;
                self.action = AttackAction::Attacking;
                self.hit_entities.clear();
            }
            ActionClip::SpinAttack => {
                self.playback = Some(ClipPlayback::new(clip, timings.clip_duration(clip)));
                self.is_animating = true;
                self.action = AttackAction::SpinAttack;
                self.hit_entities.clear();
            }
        }

        self.current_animation = clip;
        true
    }

    /// Attack button pressed at simulation time `now`.
    pub fn press(&mut self, now: f32, timings: &AttackTimings) {
        self.is_holding = true;
        self.hold_start = now;

        // Заряжаем только если не в середине удара
        if !self.is_animating {
            self.is_charging = true;
            self.action = AttackAction::Charging;
            self.play(ActionClip::Stance, timings);
        }
    }

    /// Attack button released at simulation time `now`.
    pub fn release(&mut self, now: f32, timings: &AttackTimings) -> ReleaseOutcome {
        if !self.is_holding {
            return ReleaseOutcome::Ignored;
        }

        self.is_holding = false;
        let was_charging = self.is_charging;
        self.is_charging = false;
        if self.action == AttackAction::Charging {
            self.action = AttackAction::Idle;
        }

        let hold_duration = now - self.hold_start;
        let fully_charged = was_charging && hold_duration >= timings.charge_time;

        if fully_charged {
            if self.play(ActionClip::SpinAttack, timings) {
                return ReleaseOutcome::SpinAttack;
            }
            return ReleaseOutcome::Ignored;
        }

        if !self.is_animating {
            let clip = self.next_attack;
            if self.play(clip, timings) {
                self.next_attack = clip.alternate();
                return ReleaseOutcome::QuickAttack(clip);
            }
            return ReleaseOutcome::Ignored;
        }

        self.queued_attack = true;
        ReleaseOutcome::Queued
    }

    /// Advance timers by `delta` seconds.
    pub fn tick(&mut self, delta: f32, timings: &AttackTimings) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        // Буферизованный удар стартует через tick после конца предыдущего
        if self.deferred_attack {
            self.deferred_attack = false;
            if !self.is_animating {
                let clip = self.next_attack;
                if self.play(clip, timings) {
                    self.next_attack = clip.alternate();
                    outcome.started = Some(clip);
                }
            }
        }

        if self.is_charging && self.is_holding {
            self.charge_progress = (self.charge_progress + delta / timings.charge_time).min(1.0);
            self.glow = self.charge_progress;
        } else if self.is_animating {
            self.glow = 1.0;
            self.charge_progress = 0.0;
        } else {
            self.charge_progress = 0.0;
            self.glow = lerp(self.glow, 0.0, delta * timings.glow_fade_rate);
        }

        if let Some(playback) = self.playback.as_mut() {
            if !playback.finished {
                playback.elapsed += delta;
                if playback.elapsed >= playback.duration {
                    playback.finished = true;
                    outcome.finished = Some(playback.clip);
                }
            }
        }

        outcome
    }

    /// Handle an "animation finished" notification.
    ///
    /// Stale or non-attack clips are ignored; returns whether state changed.
    pub fn on_animation_finished(&mut self, clip: ActionClip) -> bool {
        if !clip.is_attack() || !self.is_animating || self.current_animation != clip {
            return false;
        }

        self.is_animating = false;
        self.playback = None;
        self.current_animation = ActionClip::Stance;
        self.action = AttackAction::Idle;

        if self.queued_attack {
            self.queued_attack = false;
            self.deferred_attack = true;
        }

        true
    }

    pub fn is_spin_attacking(&self) -> bool {
        self.action == AttackAction::SpinAttack
    }

    /// Charging slows the player down (button held, no swing).
    pub fn is_charging(&self) -> bool {
        self.is_charging
    }

    /// Normalized time of the current swing within `[start, end]`.
    pub fn in_hit_window(&self, start: f32, end: f32) -> bool {
        let Some(playback) = self.playback.as_ref() else {
            return false;
        };
        if !playback.clip.is_attack() {
            return false;
        }
        let t = playback.normalized_time();
        t >= start && t <= end
    }

    /// Register a hit; false when `target` was already hit this swing.
    pub fn record_hit(&mut self, target: Entity) -> bool {
        if self.hit_entities.contains(&target) {
            return false;
        }
        self.hit_entities.push(target);
        true
    }
}
