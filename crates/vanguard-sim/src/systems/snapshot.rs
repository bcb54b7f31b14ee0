//! Snapshot system: queries the ECS world and builds a complete GameSnapshot.
//!
//! This system is read-only — it never modifies the world. Unit views are
//! sorted by id so the snapshot stream is byte-stable for a given seed.

use hecs::World;

use vanguard_core::components::{CombatState, Health, Objective, ObjectiveStatus, Unit, UnitStats};
use vanguard_core::constants::OBJECTIVE_MAX_HEALTH;
use vanguard_core::enums::{GamePhase, SessionOutcome};
use vanguard_core::events::SimEvent;
use vanguard_core::state::{GameSnapshot, ObjectiveView, UnitView, WaveView};
use vanguard_core::types::{Position, SimTime};

use crate::handles;

/// Build a complete GameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    outcome: Option<SessionOutcome>,
    wave: WaveView,
    recruitment: u32,
    events: Vec<SimEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        outcome,
        units: build_units(world),
        objective: build_objective(world),
        wave,
        recruitment,
        events,
    }
}

fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&Unit, &UnitStats, &Health, &CombatState, &Position)>()
        .iter()
        .map(|(entity, (unit, stats, health, combat, position))| UnitView {
            id: handles::id_of(entity),
            archetype: unit.archetype,
            team: unit.team,
            position: position.0,
            state: combat.state,
            health: health.current,
            max_health: stats.max_health,
        })
        .collect();
    units.sort_by_key(|unit| unit.id.0);
    units
}

fn build_objective(world: &World) -> Option<ObjectiveView> {
    world
        .query::<(&Objective, &Position, &Health, &ObjectiveStatus)>()
        .iter()
        .next()
        .map(|(_, (_, position, health, status))| ObjectiveView {
            position: position.0,
            health: health.current,
            max_health: OBJECTIVE_MAX_HEALTH,
            destroyed: status.destroyed,
        })
}
