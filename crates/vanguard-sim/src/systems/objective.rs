//! Objective seeking for enemies with no combat target.
//!
//! Runs after combat: an enemy the targeting pass left Idle steers toward the
//! base core, falling back to the nearest allied structure and finally to a
//! fixed waypoint. Once the destination is inside attack range the seeker
//! promotes it to the unit's combat target. Every handle is re-resolved here;
//! a destroyed destination means re-resolution, never a stale dereference.

use glam::Vec2;
use hecs::{Entity, World};

use vanguard_core::components::{
    CombatState, Objective, ObjectiveRef, ObjectiveStatus, Structure, TargetRef, Unit, UnitStats,
};
use vanguard_core::enums::{Team, UnitState};
use vanguard_core::types::{Position, UnitId, Velocity};

use vanguard_unit_ai::fsm::step_toward;

use crate::handles;

enum Destination {
    Core(Vec2),
    Structure(UnitId, Vec2),
    Waypoint(Vec2),
}

struct SeekerUpdate {
    entity: Entity,
    velocity: Vec2,
    promote: Option<TargetRef>,
    cache: Option<UnitId>,
}

/// Steer idle enemies toward the objective.
pub fn run(world: &mut World, current_tick: u64) {
    let core = core_position(world);
    let structures = ally_structures(world);

    let mut updates: Vec<SeekerUpdate> = Vec::new();
    {
        let mut query =
            world.query::<(&Unit, &UnitStats, &CombatState, &Position, &ObjectiveRef)>();
        for (entity, (unit, stats, combat, position, seek)) in query.iter() {
            if unit.team != Team::Enemy || combat.state != UnitState::Idle {
                continue;
            }
            if combat.target.is_some() {
                continue;
            }

            let destination = resolve_destination(world, core, &structures, position.0, seek);

            let (dest_pos, promote) = match destination {
                Destination::Core(pos) => (pos, Some(TargetRef::Objective)),
                Destination::Structure(id, pos) => (pos, Some(TargetRef::Unit(id))),
                Destination::Waypoint(pos) => (pos, None),
            };

            let in_range = position.0.distance(dest_pos) <= stats.attack_range;
            let cache = match destination {
                Destination::Structure(id, _) => Some(id),
                _ => None,
            };
            if in_range {
                updates.push(SeekerUpdate {
                    entity,
                    velocity: Vec2::ZERO,
                    promote,
                    cache,
                });
            } else {
                updates.push(SeekerUpdate {
                    entity,
                    velocity: step_toward(position.0, dest_pos, stats.move_speed),
                    promote: None,
                    cache,
                });
            }
        }
    }

    for update in updates {
        if let Some(target) = update.promote {
            if let Ok(mut combat) = world.get::<&mut CombatState>(update.entity) {
                combat.target = Some(target);
                combat.state = UnitState::Attacking;
                combat.state_since_tick = current_tick;
            }
        }
        if let Ok(mut velocity) = world.get::<&mut Velocity>(update.entity) {
            velocity.0 = update.velocity;
        }
        if let Ok(mut seek) = world.get::<&mut ObjectiveRef>(update.entity) {
            seek.target = update.cache;
        }
    }
}

/// Destination priority: living core, then the cached (or nearest) allied
/// structure, then the fixed waypoint.
fn resolve_destination(
    world: &World,
    core: Option<Vec2>,
    structures: &[(Entity, Vec2)],
    seeker_pos: Vec2,
    seek: &ObjectiveRef,
) -> Destination {
    if let Some(pos) = core {
        return Destination::Core(pos);
    }
    if let Some(id) = seek.target {
        if let Some(entity) = handles::resolve(world, id) {
            if let Some(&(_, pos)) = structures.iter().find(|(e, _)| *e == entity) {
                return Destination::Structure(id, pos);
            }
        }
    }
    let nearest = structures.iter().min_by(|(_, a), (_, b)| {
        seeker_pos
            .distance_squared(*a)
            .total_cmp(&seeker_pos.distance_squared(*b))
    });
    if let Some(&(entity, pos)) = nearest {
        return Destination::Structure(handles::id_of(entity), pos);
    }
    Destination::Waypoint(seek.waypoint.map(|p| p.0).unwrap_or(Vec2::ZERO))
}

fn core_position(world: &World) -> Option<Vec2> {
    world
        .query::<(&Objective, &ObjectiveStatus, &Position)>()
        .iter()
        .next()
        .filter(|(_, (_, status, _))| !status.destroyed)
        .map(|(_, (_, _, position))| position.0)
}

/// Living allied structures, as seeker fallback destinations.
fn ally_structures(world: &World) -> Vec<(Entity, Vec2)> {
    world
        .query::<(&Unit, &CombatState, &Position)>()
        .with::<&Structure>()
        .iter()
        .filter(|(_, (unit, combat, _))| {
            unit.team == Team::Ally && combat.state != UnitState::Dead
        })
        .map(|(entity, (_, _, position))| (entity, position.0))
        .collect()
}
