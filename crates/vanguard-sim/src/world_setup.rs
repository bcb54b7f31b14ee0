//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the base core and unit entities with component bundles built
//! from archetype profiles.

use glam::Vec2;
use hecs::World;

use vanguard_core::components::{
    CombatState, Health, Objective, ObjectiveRef, ObjectiveStatus, Production, Structure, Unit,
    UnitStats,
};
use vanguard_core::constants::OBJECTIVE_MAX_HEALTH;
use vanguard_core::enums::{ArchetypeId, Team};
use vanguard_core::types::{Position, Velocity};

use vanguard_unit_ai::profiles::get_profile;

/// Set up a fresh defense session: just the base core. Defenders arrive by
/// placement, enemies by the wave orchestrator.
pub fn setup_session(world: &mut World) {
    spawn_objective(world);
}

/// Spawn the defended base core at the origin.
pub fn spawn_objective(world: &mut World) -> hecs::Entity {
    world.spawn((
        Objective,
        Position::new(0.0, 0.0),
        Health {
            current: OBJECTIVE_MAX_HEALTH,
        },
        ObjectiveStatus::default(),
    ))
}

/// Spawn a unit of the given archetype. Enemies get an objective-seeker
/// reference; structures get their marker and any production line.
pub fn spawn_unit(world: &mut World, archetype: ArchetypeId, position: Vec2) -> hecs::Entity {
    let profile = get_profile(archetype);
    let stats = UnitStats {
        max_health: profile.max_health,
        attack_damage: profile.attack_damage,
        attack_range: profile.attack_range,
        attack_cooldown_secs: profile.attack_cooldown_secs,
        move_speed: profile.move_speed,
        priority: profile.priority,
    };

    let entity = world.spawn((
        Unit {
            archetype,
            team: profile.team,
        },
        stats,
        Health {
            current: profile.max_health,
        },
        CombatState::default(),
        Position(position),
        Velocity::zero(),
    ));

    if profile.is_structure {
        let _ = world.insert_one(entity, Structure);
    }
    if let Some((interval_secs, cost)) = profile.production {
        let _ = world.insert_one(
            entity,
            Production {
                output: ArchetypeId::ComradeRecruit,
                interval_secs,
                cost,
                timer_secs: 0.0,
                produced: 0,
                limit: None,
                active: true,
            },
        );
    }
    if profile.team == Team::Enemy {
        // The core site at spawn time becomes the seeker's last-resort waypoint.
        let waypoint = world
            .query::<(&Objective, &Position)>()
            .iter()
            .next()
            .map(|(_, (_, position))| *position);
        let _ = world.insert_one(
            entity,
            ObjectiveRef {
                target: None,
                waypoint,
            },
        );
    }

    entity
}
