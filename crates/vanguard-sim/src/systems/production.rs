//! Factory production: structures with a `Production` component spawn units
//! on an interval, spending recruitment per unit.
//!
//! An unaffordable interval is skipped, not an error: the timer holds at the
//! interval and the structure produces as soon as the balance recovers.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use vanguard_core::components::{CombatState, Production};
use vanguard_core::constants::{DT, PRODUCTION_SPAWN_RADIUS};
use vanguard_core::enums::{ArchetypeId, UnitState};
use vanguard_core::events::SimEvent;
use vanguard_core::types::Position;

use vanguard_unit_ai::profiles::get_profile;

use crate::handles;
use crate::systems::placement::Recruitment;
use crate::world_setup;

/// Advance production timers and spawn affordable output.
pub fn run(
    world: &mut World,
    recruitment: &mut Recruitment,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
) {
    let mut spawns: Vec<(ArchetypeId, Vec2)> = Vec::new();
    for (_entity, (production, position, combat)) in
        world.query_mut::<(&mut Production, &Position, &CombatState)>()
    {
        if !production.active || combat.state == UnitState::Dead {
            continue;
        }
        if let Some(limit) = production.limit {
            if production.produced >= limit {
                production.active = false;
                continue;
            }
        }
        production.timer_secs = (production.timer_secs + DT).min(production.interval_secs);
        if production.timer_secs >= production.interval_secs {
            if recruitment.spend(production.cost) {
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let offset = Vec2::new(angle.cos(), angle.sin()) * PRODUCTION_SPAWN_RADIUS;
                spawns.push((production.output, position.0 + offset));
                production.produced += 1;
                production.timer_secs = 0.0;
            }
        }
    }

    for (archetype, position) in spawns {
        let entity = world_setup::spawn_unit(world, archetype, position);
        events.push(SimEvent::UnitSpawned {
            unit: handles::id_of(entity),
            team: get_profile(archetype).team,
            archetype,
        });
    }
}
