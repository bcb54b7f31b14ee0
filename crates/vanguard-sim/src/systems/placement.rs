//! Placement economy: recruitment points, placement validation, build timers.
//!
//! A placement spends its cost up front, then sits in a pending-build list
//! with a tick-accumulated timer; the unit spawns when the timer expires.
//! Validation uses the spatial grid: the footprint must be clear and the
//! surrounding zone must not already be saturated with mobile units.

use glam::Vec2;
use hecs::{Entity, World};
use thiserror::Error;

use vanguard_core::components::{CombatState, Structure, Unit};
use vanguard_core::constants::{
    DEFAULT_BUILD_TIME_SECS, DT, PLACEMENT_FOOTPRINT_RADIUS, PLACEMENT_ZONE_CAP,
    PLACEMENT_ZONE_RADIUS,
};
use vanguard_core::enums::{ArchetypeId, Team, UnitState};
use vanguard_core::events::SimEvent;

use vanguard_unit_ai::profiles::get_profile;

use crate::handles;
use crate::systems::spatial::SpatialQuery;
use crate::world_setup;

/// Why a placement was refused. Refusals never spend points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("archetype is not player-placeable")]
    NotPlaceable,
    #[error("costs {cost} recruitment, only {available} available")]
    Unaffordable { cost: u32, available: u32 },
    #[error("footprint is blocked")]
    Blocked,
    #[error("placement zone is full")]
    ZoneFull,
}

/// Recruitment point balance.
#[derive(Debug, Default, Clone, Copy)]
pub struct Recruitment {
    points: u32,
}

impl Recruitment {
    pub fn new(points: u32) -> Self {
        Self { points }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.points >= cost
    }

    /// Deduct `cost` if affordable. Returns whether the spend happened.
    pub fn spend(&mut self, cost: u32) -> bool {
        if self.points >= cost {
            self.points -= cost;
            true
        } else {
            false
        }
    }
}

/// A placement under construction.
pub struct PendingBuild {
    pub archetype: ArchetypeId,
    pub position: Vec2,
    pub timer_secs: f32,
}

/// Validate a placement and, if accepted, spend its cost and queue the build.
pub fn try_place(
    world: &World,
    grid: &dyn SpatialQuery,
    recruitment: &mut Recruitment,
    pending: &mut Vec<PendingBuild>,
    archetype: ArchetypeId,
    position: Vec2,
) -> Result<(), PlacementError> {
    let profile = get_profile(archetype);
    if profile.team != Team::Ally {
        return Err(PlacementError::NotPlaceable);
    }
    if !recruitment.can_afford(profile.cost) {
        return Err(PlacementError::Unaffordable {
            cost: profile.cost,
            available: recruitment.points(),
        });
    }

    let mut nearby: Vec<Entity> = Vec::new();
    grid.query_radius(position, PLACEMENT_FOOTPRINT_RADIUS, &mut nearby);
    if !nearby.is_empty() {
        return Err(PlacementError::Blocked);
    }

    if !profile.is_structure {
        grid.query_radius(position, PLACEMENT_ZONE_RADIUS, &mut nearby);
        let mobile = nearby
            .iter()
            .filter(|&&entity| is_live_mobile_unit(world, entity))
            .count();
        if mobile >= PLACEMENT_ZONE_CAP {
            return Err(PlacementError::ZoneFull);
        }
    }

    recruitment.spend(profile.cost);
    pending.push(PendingBuild {
        archetype,
        position,
        timer_secs: 0.0,
    });
    Ok(())
}

/// Advance build timers; spawn finished builds.
pub fn run_builds(world: &mut World, pending: &mut Vec<PendingBuild>, events: &mut Vec<SimEvent>) {
    let mut index = 0;
    while index < pending.len() {
        pending[index].timer_secs += DT;
        if pending[index].timer_secs >= DEFAULT_BUILD_TIME_SECS {
            let build = pending.remove(index);
            let entity = world_setup::spawn_unit(world, build.archetype, build.position);
            events.push(SimEvent::UnitSpawned {
                unit: handles::id_of(entity),
                team: Team::Ally,
                archetype: build.archetype,
            });
        } else {
            index += 1;
        }
    }
}

fn is_live_mobile_unit(world: &World, entity: Entity) -> bool {
    if world.get::<&Structure>(entity).is_ok() {
        return false;
    }
    if world.get::<&Unit>(entity).is_err() {
        return false;
    }
    world
        .get::<&CombatState>(entity)
        .map(|combat| combat.state != UnitState::Dead)
        .unwrap_or(false)
}
