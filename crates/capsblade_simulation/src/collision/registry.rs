//! CollisionRegistry — world-wide table of circular colliders
//!
//! # Architecture
//! - Entity владеет `Collider` component, registry хранит копию (id → entry)
//! - `sync_collider_registry` регистрирует новые, обновляет позиции, удаляет despawned
//! - Запросы плоские O(n) по XZ плоскости (десятки colliders, spatial index не нужен)
//! - BTreeMap → детерминированный порядок результатов

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use bevy::prelude::*;

use super::layers::ColliderLayer;

/// Registry errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    #[error("collider '{0}' is already registered")]
    DuplicateCollider(ColliderId),

    #[error("collider '{0}' is not registered")]
    UnknownCollider(ColliderId),

    #[error("entity {0:?} already owns collider '{1}'")]
    OwnerAlreadyRegistered(Entity, ColliderId),
}

/// Stable string id of a collider (`"enemy-12v0"`, `"player"`, ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect)]
pub struct ColliderId(pub String);

impl ColliderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What happens when a sword hitbox overlaps the collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum HitResponse {
    /// Hitbox проходит насквозь
    #[default]
    Ignore,
    /// Owner получает `SwordHit` event
    NotifyOwner,
}

/// Collider component (source of truth lives on the entity).
///
/// Позиция берётся из `Transform.translation` (x, z) каждый tick.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Collider {
    pub id: ColliderId,
    pub radius: f32,
    pub layer: ColliderLayer,
    /// Solid colliders выталкивают движущихся игроков
    pub solid: bool,
    pub on_hit: HitResponse,
}

impl Collider {
    pub fn new(id: impl Into<String>, radius: f32, layer: ColliderLayer) -> Self {
        Self {
            id: ColliderId::new(id),
            radius,
            layer,
            solid: false,
            on_hit: HitResponse::Ignore,
        }
    }

    pub fn solid(mut self) -> Self {
        self.solid = true;
        self
    }

    pub fn with_hit_response(mut self, on_hit: HitResponse) -> Self {
        self.on_hit = on_hit;
        self
    }
}

/// Registry row.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderEntry {
    pub id: ColliderId,
    /// Entity, владеющая collider'ом (None для статичных, зарегистрированных вручную)
    pub owner: Option<Entity>,
    /// XZ позиция центра
    pub position: Vec2,
    pub radius: f32,
    pub layer: ColliderLayer,
    pub solid: bool,
    pub on_hit: HitResponse,
}

impl ColliderEntry {
    pub fn from_component(owner: Entity, collider: &Collider, translation: Vec3) -> Self {
        Self {
            id: collider.id.clone(),
            owner: Some(owner),
            position: Vec2::new(translation.x, translation.z),
            radius: collider.radius,
            layer: collider.layer,
            solid: collider.solid,
            on_hit: collider.on_hit,
        }
    }

    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        circles_overlap(self.position, self.radius, center, radius)
    }
}

/// Strict circle–circle overlap (касание не считается).
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

#[derive(Resource, Debug, Default)]
pub struct CollisionRegistry {
    entries: BTreeMap<ColliderId, ColliderEntry>,
    owners: HashMap<Entity, ColliderId>,
}

impl CollisionRegistry {
    pub fn register(&mut self, entry: ColliderEntry) -> Result<(), CollisionError> {
        if self.entries.contains_key(&entry.id) {
            return Err(CollisionError::DuplicateCollider(entry.id));
        }

        // Один owner → одна запись, иначе unregister_owner потеряет старую
        if let Some(owner) = entry.owner {
            if let Some(existing) = self.owners.get(&owner) {
                return Err(CollisionError::OwnerAlreadyRegistered(owner, existing.clone()));
            }
            self.owners.insert(owner, entry.id.clone());
        }
        self.entries.insert(entry.id.clone(), entry);
        Ok(())
    }

    pub fn unregister(&mut self, id: &ColliderId) -> Option<ColliderEntry> {
        let entry = self.entries.remove(id)?;
        if let Some(owner) = entry.owner {
            self.owners.remove(&owner);
        }
        Some(entry)
    }

    pub fn unregister_owner(&mut self, owner: Entity) -> Option<ColliderEntry> {
        let id = self.owners.remove(&owner)?;
        self.entries.remove(&id)
    }

    pub fn update_position(&mut self, id: &ColliderId, position: Vec2) -> Result<(), CollisionError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| CollisionError::UnknownCollider(id.clone()))?;
        entry.position = position;
        Ok(())
    }

    pub fn get(&self, id: &ColliderId) -> Option<&ColliderEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &ColliderId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn id_of(&self, owner: Entity) -> Option<&ColliderId> {
        self.owners.get(&owner)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColliderEntry> {
        self.entries.values()
    }

    /// All colliders on `mask` layers overlapping the circle, in id order.
    pub fn query_circle(&self, center: Vec2, radius: f32, mask: u32) -> Vec<&ColliderEntry> {
        self.entries
            .values()
            .filter(|entry| entry.layer.in_mask(mask))
            .filter(|entry| entry.overlaps_circle(center, radius))
            .collect()
    }

    /// Push a moving circle out of every solid collider on `mask` layers.
    ///
    /// Один проход: для плотной толпы позиция может остаться чуть внутри,
    /// следующий tick дотолкнёт.
    pub fn resolve_solid(
        &self,
        position: Vec2,
        radius: f32,
        mask: u32,
        ignore: Option<&ColliderId>,
    ) -> Vec2 {
        let mut resolved = position;

        for entry in self.entries.values() {
            if !entry.solid || !entry.layer.in_mask(mask) || Some(&entry.id) == ignore {
                continue;
            }

            if !entry.overlaps_circle(resolved, radius) {
                continue;
            }

            let offset = resolved - entry.position;
            let distance = offset.length();
            let push_dir = if distance > 1e-4 { offset / distance } else { Vec2::X };
            resolved = entry.position + push_dir * (entry.radius + radius);
        }

        resolved
    }
}
