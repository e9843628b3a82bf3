//! Tests for CollisionRegistry.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::collision::layers::*;
    use crate::collision::registry::*;

    fn entry(id: &str, x: f32, z: f32, radius: f32, layer: ColliderLayer, solid: bool) -> ColliderEntry {
        ColliderEntry {
            id: ColliderId::new(id),
            owner: None,
            position: Vec2::new(x, z),
            radius,
            layer,
            solid,
            on_hit: HitResponse::NotifyOwner,
        }
    }

    #[test]
    fn test_register_and_duplicate() {
        let mut registry = CollisionRegistry::default();

        assert!(registry.register(entry("a", 0.0, 0.0, 0.5, ColliderLayer::Enemy, true)).is_ok());
        assert_eq!(registry.len(), 1);

        let err = registry
            .register(entry("a", 1.0, 1.0, 0.5, ColliderLayer::Enemy, true))
            .unwrap_err();
        assert_eq!(err, CollisionError::DuplicateCollider(ColliderId::new("a")));

        // Первая запись не перезаписана
        assert_eq!(registry.get(&ColliderId::new("a")).unwrap().position, Vec2::ZERO);
    }

    #[test]
    fn test_unregister_by_owner() {
        let mut registry = CollisionRegistry::default();
        let owner = Entity::from_raw(7);

        let mut e = entry("enemy-7", 0.0, 0.0, 0.5, ColliderLayer::Enemy, true);
        e.owner = Some(owner);
        registry.register(e).unwrap();
        assert_eq!(registry.id_of(owner), Some(&ColliderId::new("enemy-7")));

        let removed = registry.unregister_owner(owner).expect("registered");
        assert_eq!(removed.id, ColliderId::new("enemy-7"));
        assert!(registry.is_empty());
        assert!(registry.id_of(owner).is_none());
        assert!(registry.unregister_owner(owner).is_none());
    }

    #[test]
    fn test_update_unknown_collider() {
        let mut registry = CollisionRegistry::default();
        let result = registry.update_position(&ColliderId::new("ghost"), Vec2::ONE);
        assert_eq!(result, Err(CollisionError::UnknownCollider(ColliderId::new("ghost"))));
    }

    #[test]
    fn test_query_circle_filters_layer_and_distance() {
        let mut registry = CollisionRegistry::default();
        registry.register(entry("near", 1.0, 0.0, 0.5, ColliderLayer::Enemy, true)).unwrap();
        registry.register(entry("far", 5.0, 0.0, 0.5, ColliderLayer::Enemy, true)).unwrap();
        registry.register(entry("wall", 0.5, 0.0, 0.5, ColliderLayer::Environment, true)).unwrap();

        let hits = registry.query_circle(Vec2::ZERO, 1.0, COLLISION_LAYER_ENEMY);
        let ids: Vec<&str> = hits.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["near"]);

        let all = registry.query_circle(Vec2::ZERO, 1.0, COLLISION_MASK_ALL);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_touching_circles_do_not_overlap() {
        assert!(!circles_overlap(Vec2::ZERO, 1.0, Vec2::new(2.0, 0.0), 1.0));
        assert!(circles_overlap(Vec2::ZERO, 1.0, Vec2::new(1.99, 0.0), 1.0));
    }

    #[test]
    fn test_resolve_solid_pushes_out() {
        let mut registry = CollisionRegistry::default();
        registry.register(entry("rock", 0.0, 0.0, 1.0, ColliderLayer::Environment, true)).unwrap();
        registry.register(entry("ghost", 0.0, 0.0, 1.0, ColliderLayer::Enemy, false)).unwrap();

        let resolved = registry.resolve_solid(Vec2::new(0.5, 0.0), 0.5, COLLISION_MASK_PLAYER_BLOCKERS, None);
        assert!((resolved - Vec2::new(1.5, 0.0)).length() < 1e-5);

        // Вне collider'а — позиция не меняется
        let untouched = registry.resolve_solid(Vec2::new(3.0, 0.0), 0.5, COLLISION_MASK_PLAYER_BLOCKERS, None);
        assert_eq!(untouched, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_resolve_solid_ignores_self() {
        let mut registry = CollisionRegistry::default();
        registry.register(entry("player", 0.0, 0.0, 0.5, ColliderLayer::Enemy, true)).unwrap();

        let id = ColliderId::new("player");
        let resolved = registry.resolve_solid(Vec2::ZERO, 0.5, COLLISION_MASK_ALL, Some(&id));
        assert_eq!(resolved, Vec2::ZERO);
    }

    #[test]
    fn test_owner_cannot_hold_two_entries() {
        let mut registry = CollisionRegistry::default();
        let owner = Entity::from_raw(5);

        let mut first = entry("first", 0.0, 0.0, 0.5, ColliderLayer::Enemy, true);
        first.owner = Some(owner);
        let mut second = entry("second", 2.0, 0.0, 0.5, ColliderLayer::Enemy, true);
        second.owner = Some(owner);

        registry.register(first).unwrap();
        let err = registry.register(second).unwrap_err();
        assert_eq!(
            err,
            CollisionError::OwnerAlreadyRegistered(owner, ColliderId::new("first"))
        );

        // Старая запись по-прежнему снимается через owner
        assert_eq!(registry.unregister_owner(owner).map(|e| e.id), Some(ColliderId::new("first")));
        assert!(registry.is_empty());
    }
}
