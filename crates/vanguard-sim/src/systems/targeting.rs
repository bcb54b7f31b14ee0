//! Target validation and acquisition.
//!
//! Each tick, every living combatant's target reference is liveness-checked;
//! stale references are dropped. Units without a valid target scan the
//! spatial grid within their detection radius and pick the best-scoring
//! opposing candidate under their priority policy.

use std::collections::HashMap;

use hecs::{Entity, World};

use vanguard_core::components::{
    CombatState, Health, Objective, ObjectiveStatus, Structure, TargetRef, Unit, UnitStats,
};
use vanguard_core::constants::{ALLY_DETECTION_FACTOR, ENEMY_DETECTION_FACTOR};
use vanguard_core::enums::{Team, UnitState};
use vanguard_core::types::Position;

use vanguard_unit_ai::policies::{score, CandidateInfo};

use crate::handles;
use crate::systems::spatial::SpatialQuery;

struct Candidate {
    team: Team,
    info: CandidateInfo,
}

/// Run target validation + acquisition for all living combatants.
/// `scratch` is a reusable buffer for grid query results.
pub fn run(world: &mut World, grid: &dyn SpatialQuery, scratch: &mut Vec<Entity>) {
    let candidates = collect_candidates(world);
    let objective_alive = objective_alive(world);

    // Collect new assignments in a buffer to avoid borrow issues with hecs.
    let mut assignments: Vec<(Entity, Option<TargetRef>)> = Vec::new();
    {
        let mut query = world
            .query::<(&Unit, &UnitStats, &CombatState, &Position)>()
            .without::<&Structure>();
        for (entity, (unit, stats, combat, position)) in query.iter() {
            if combat.state == UnitState::Dead {
                continue;
            }

            let current_valid = match combat.target {
                Some(TargetRef::Unit(id)) => handles::resolve(world, id)
                    .is_some_and(|target| candidates.contains_key(&target)),
                Some(TargetRef::Objective) => objective_alive,
                None => false,
            };
            if current_valid {
                continue;
            }

            let factor = match unit.team {
                Team::Ally => ALLY_DETECTION_FACTOR,
                Team::Enemy => ENEMY_DETECTION_FACTOR,
            };
            let radius = stats.attack_range * factor;
            grid.query_radius(position.0, radius, scratch);

            let mut best: Option<(f32, Entity)> = None;
            for &candidate_entity in scratch.iter() {
                if candidate_entity == entity {
                    continue;
                }
                let Some(candidate) = candidates.get(&candidate_entity) else {
                    continue;
                };
                if !unit.team.opposes(candidate.team) {
                    continue;
                }
                let candidate_score = score(stats.priority, position.0, &candidate.info);
                // Strict comparison: ties break to the first candidate seen.
                if best.is_none_or(|(best_score, _)| candidate_score < best_score) {
                    best = Some((candidate_score, candidate_entity));
                }
            }

            let new_target = best.map(|(_, target)| TargetRef::Unit(handles::id_of(target)));
            assignments.push((entity, new_target));
        }
    }

    for (entity, target) in assignments {
        if let Ok(mut combat) = world.get::<&mut CombatState>(entity) {
            combat.target = target;
        }
    }
}

/// Everything still targetable: living units, structures included.
fn collect_candidates(world: &World) -> HashMap<Entity, Candidate> {
    let mut candidates = HashMap::new();
    for (entity, (unit, stats, health, combat, position)) in world
        .query::<(&Unit, &UnitStats, &Health, &CombatState, &Position)>()
        .iter()
    {
        if combat.state == UnitState::Dead || health.current <= 0.0 {
            continue;
        }
        candidates.insert(
            entity,
            Candidate {
                team: unit.team,
                info: CandidateInfo {
                    position: position.0,
                    health: health.current,
                    attack_damage: stats.attack_damage,
                },
            },
        );
    }
    candidates
}

/// True while the base core exists and has not been destroyed.
pub fn objective_alive(world: &World) -> bool {
    world
        .query::<(&Objective, &ObjectiveStatus)>()
        .iter()
        .next()
        .is_some_and(|(_, (_, status))| !status.destroyed)
}
