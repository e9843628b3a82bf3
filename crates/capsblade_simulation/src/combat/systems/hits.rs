//! Sword hit detection against the collision registry.

use bevy::prelude::*;

use crate::collision::{CollisionRegistry, HitResponse, COLLISION_LAYER_ENEMY};
use crate::combat::{ActionClip, AttackStateMachine, SwordHit};
use crate::components::facing_direction;
use crate::config::CombatConfig;

/// Sword hitbox circle on the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwordHitbox {
    pub center: Vec2,
    pub radius: f32,
    pub damage: u32,
}

impl SwordHitbox {
    /// Quick attacks hit in front of the player, spin attack all around.
    pub fn for_clip(clip: ActionClip, transform: &Transform, config: &CombatConfig) -> Option<Self> {
        let origin = Vec2::new(transform.translation.x, transform.translation.z);
        let attack = &config.attack;

        match clip {
            ActionClip::Attack01 | ActionClip::Attack02 => {
                let forward = facing_direction(transform);
                Some(Self {
                    center: origin + Vec2::new(forward.x, forward.z) * attack.quick_reach,
                    radius: attack.quick_radius,
                    damage: attack.quick_damage,
                })
            }
            ActionClip::SpinAttack => Some(Self {
                center: origin,
                radius: attack.spin_radius,
                damage: attack.spin_damage,
            }),
            ActionClip::Stance => None,
        }
    }
}

/// System: query enemy colliders under the active sword hitbox.
///
/// Hitbox живёт только в окне `[hit_window_start, hit_window_end]` клипа,
/// каждый враг получает не больше одного `SwordHit` за swing.
pub fn detect_sword_hits(
    mut attackers: Query<(Entity, &Transform, &mut AttackStateMachine)>,
    registry: Res<CollisionRegistry>,
    config: Res<CombatConfig>,
    mut hit_events: EventWriter<SwordHit>,
) {
    let window = (config.attack.hit_window_start, config.attack.hit_window_end);

    for (attacker, transform, mut state) in attackers.iter_mut() {
        if !state.in_hit_window(window.0, window.1) {
            continue;
        }

        let Some(clip) = state.playback.map(|playback| playback.clip) else {
            continue;
        };
        let Some(hitbox) = SwordHitbox::for_clip(clip, transform, &config) else {
            continue;
        };

        for entry in registry.query_circle(hitbox.center, hitbox.radius, COLLISION_LAYER_ENEMY) {
            if entry.on_hit != HitResponse::NotifyOwner {
                continue;
            }
            let Some(target) = entry.owner else {
                continue;
            };
            if target == attacker || !state.record_hit(target) {
                continue;
            }

            hit_events.write(SwordHit {
                attacker,
                target,
                collider: entry.id.clone(),
                clip,
                damage: hitbox.damage,
            });

            crate::logger::log(&format!(
                "💥 {} hit '{}' (attacker: {:?}, damage: {})",
                clip.name(),
                entry.id,
                attacker,
                hitbox.damage
            ));
        }
    }
}
