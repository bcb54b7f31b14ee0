//! Conversion between ECS entities and the `UnitId` handles that cross the
//! core crate boundary.
//!
//! `UnitId` wraps the entity's generational bits, so a handle held across
//! ticks can never silently alias a recycled slot: resolution fails instead.

use hecs::{Entity, World};

use vanguard_core::types::UnitId;

/// The stable handle for an entity.
pub fn id_of(entity: Entity) -> UnitId {
    UnitId(entity.to_bits().get())
}

/// Resolve a handle back to a live entity, or None if it despawned.
pub fn resolve(world: &World, id: UnitId) -> Option<Entity> {
    Entity::from_bits(id.0).filter(|entity| world.contains(*entity))
}
