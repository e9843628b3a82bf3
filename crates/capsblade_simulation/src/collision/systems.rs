//! Registry maintenance systems.

use bevy::prelude::*;

use super::registry::{Collider, ColliderEntry, CollisionRegistry};

/// System: держит `CollisionRegistry` в синхроне с `Collider` components.
///
/// Порядок внутри tick:
/// 1. Removed/despawned → unregister (освобождает id для повторного использования)
/// 2. Added → register (повторная вставка заменяет старую запись owner'а)
/// 3. Changed<Transform> → update position записи, которой владеет entity
pub fn sync_collider_registry(
    mut registry: ResMut<CollisionRegistry>,
    mut removed: RemovedComponents<Collider>,
    added: Query<(Entity, &Collider, &Transform), Added<Collider>>,
    moved: Query<(Entity, &Transform), (With<Collider>, Changed<Transform>)>,
) {
    for entity in removed.read() {
        if let Some(entry) = registry.unregister_owner(entity) {
            crate::logger::log(&format!(
                "🗑️ Unregistered collider '{}' (owner: {:?})",
                entry.id, entity
            ));
        }
    }

    for (entity, collider, transform) in added.iter() {
        registry.unregister_owner(entity);

        let entry = ColliderEntry::from_component(entity, collider, transform.translation);
        match registry.register(entry) {
            Ok(()) => crate::logger::log(&format!(
                "📋 Registered collider '{}' ({}, r={:.2}, owner: {:?})",
                collider.id,
                collider.layer.name(),
                collider.radius,
                entity
            )),
            Err(err) => crate::logger::log_warning(&format!("Collider registration skipped: {}", err)),
        }
    }

    for (entity, transform) in moved.iter() {
        // Entry ищем по owner'у: id мог достаться другому entity
        let Some(id) = registry.id_of(entity).cloned() else {
            continue;
        };

        let position = Vec2::new(transform.translation.x, transform.translation.z);
        if let Err(err) = registry.update_position(&id, position) {
            crate::logger::log_warning(&format!("Collider position sync failed: {}", err));
        }
    }
}
