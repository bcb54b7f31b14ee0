//! Combat system: evaluates the per-unit FSM and executes attacks.
//!
//! Builds a `CombatContext` for each living combatant, applies the FSM's
//! state/velocity updates, then resolves this tick's strikes — damage
//! transforms, health clamping, death transitions, and the matching events.

use glam::Vec2;
use hecs::{Entity, World};

use vanguard_core::components::{
    CombatState, Health, Objective, ObjectiveStatus, Structure, TargetRef, Unit, UnitStats,
};
use vanguard_core::constants::{DEATH_LINGER_SECS, OBJECTIVE_REMOVAL_DELAY_SECS};
use vanguard_core::enums::UnitState;
use vanguard_core::events::SimEvent;
use vanguard_core::types::{Position, Velocity};

use vanguard_unit_ai::fsm::{evaluate, CombatContext, CombatUpdate, TargetInfo};
use vanguard_unit_ai::policies::transform_incoming;
use vanguard_unit_ai::profiles::get_profile;

use crate::handles;
use crate::systems::lifecycle::{secs_to_ticks, RemovalQueue};

struct Strike {
    attacker: Entity,
    damage: f32,
    target: TargetRef,
}

/// Run the combat system for one tick.
pub fn run(
    world: &mut World,
    current_tick: u64,
    events: &mut Vec<SimEvent>,
    removals: &mut RemovalQueue,
) {
    let objective = objective_position(world);

    // Collect updates in a buffer to avoid borrow issues with hecs.
    let mut updates: Vec<(Entity, CombatUpdate)> = Vec::new();
    let mut strikes: Vec<Strike> = Vec::new();
    {
        let mut query = world
            .query::<(&UnitStats, &CombatState, &Position)>()
            .with::<&Unit>()
            .without::<&Structure>();
        for (entity, (stats, combat, position)) in query.iter() {
            if combat.state == UnitState::Dead {
                continue;
            }

            let target = combat.target.and_then(|target_ref| match target_ref {
                TargetRef::Unit(id) => handles::resolve(world, id).and_then(|target| {
                    world
                        .get::<&Position>(target)
                        .ok()
                        .map(|pos| TargetInfo { position: pos.0 })
                }),
                TargetRef::Objective => objective.map(|position| TargetInfo { position }),
            });

            let ctx = CombatContext {
                state: combat.state,
                position: position.0,
                move_speed: stats.move_speed,
                attack_range: stats.attack_range,
                attack_cooldown_secs: stats.attack_cooldown_secs,
                last_attack_tick: combat.last_attack_tick,
                current_tick,
                target,
            };
            let update = evaluate(&ctx);

            if update.attack {
                if let Some(target_ref) = combat.target {
                    strikes.push(Strike {
                        attacker: entity,
                        damage: stats.attack_damage,
                        target: target_ref,
                    });
                }
            }
            updates.push((entity, update));
        }
    }

    for (entity, update) in updates {
        if let Ok(mut combat) = world.get::<&mut CombatState>(entity) {
            if combat.state != update.new_state {
                combat.state = update.new_state;
                combat.state_since_tick = current_tick;
            }
            if update.drop_target {
                combat.target = None;
            }
        }
        if let Ok(mut velocity) = world.get::<&mut Velocity>(entity) {
            velocity.0 = update.velocity;
        }
    }

    for strike in strikes {
        if let Ok(mut combat) = world.get::<&mut CombatState>(strike.attacker) {
            combat.last_attack_tick = Some(current_tick);
        }
        events.push(SimEvent::AttackLanded {
            attacker: handles::id_of(strike.attacker),
        });
        match strike.target {
            TargetRef::Unit(id) => {
                if let Some(target) = handles::resolve(world, id) {
                    apply_damage(world, target, strike.damage, current_tick, events, removals);
                }
            }
            TargetRef::Objective => {
                damage_objective(world, strike.damage, current_tick, events, removals);
            }
        }
    }
}

/// Apply damage to a unit, running its archetype transform first.
///
/// No-op on Dead units: a corpse accepts no damage and emits no signals.
/// Death is entered exactly once, here.
pub fn apply_damage(
    world: &mut World,
    target: Entity,
    amount: f32,
    current_tick: u64,
    events: &mut Vec<SimEvent>,
    removals: &mut RemovalQueue,
) {
    let Ok(unit) = world.get::<&Unit>(target).map(|unit| *unit) else {
        return;
    };
    let state = match world.get::<&CombatState>(target) {
        Ok(combat) => combat.state,
        Err(_) => return,
    };
    if state == UnitState::Dead {
        return;
    }

    let profile = get_profile(unit.archetype);
    let taken = transform_incoming(&profile, state, amount);

    let mut died = false;
    if let Ok(mut health) = world.get::<&mut Health>(target) {
        health.current = (health.current - taken).max(0.0);
        died = health.current <= 0.0;
    }
    events.push(SimEvent::UnitDamaged {
        unit: handles::id_of(target),
        amount: taken,
    });

    if died {
        if let Ok(mut combat) = world.get::<&mut CombatState>(target) {
            combat.state = UnitState::Dead;
            combat.target = None;
            combat.state_since_tick = current_tick;
        }
        if let Ok(mut velocity) = world.get::<&mut Velocity>(target) {
            velocity.0 = Vec2::ZERO;
        }
        events.push(SimEvent::UnitDied {
            unit: handles::id_of(target),
            team: unit.team,
        });
        removals.schedule(target, current_tick + secs_to_ticks(DEATH_LINGER_SECS));
    }
}

/// Damage the base core. Destruction is terminal and emitted exactly once.
pub fn damage_objective(
    world: &mut World,
    amount: f32,
    current_tick: u64,
    events: &mut Vec<SimEvent>,
    removals: &mut RemovalQueue,
) {
    let mut destroyed_now: Option<Entity> = None;
    for (entity, (_objective, status, health)) in
        world.query_mut::<(&Objective, &mut ObjectiveStatus, &mut Health)>()
    {
        if status.destroyed {
            return;
        }
        health.current = (health.current - amount).max(0.0);
        events.push(SimEvent::ObjectiveDamaged { amount });
        if health.current <= 0.0 {
            status.destroyed = true;
            destroyed_now = Some(entity);
        }
        break;
    }
    if let Some(entity) = destroyed_now {
        events.push(SimEvent::ObjectiveDestroyed);
        removals.schedule(
            entity,
            current_tick + secs_to_ticks(OBJECTIVE_REMOVAL_DELAY_SECS),
        );
    }
}

/// Position of the base core, if it still stands.
fn objective_position(world: &World) -> Option<Vec2> {
    world
        .query::<(&Objective, &ObjectiveStatus, &Position)>()
        .iter()
        .next()
        .filter(|(_, (_, status, _))| !status.destroyed)
        .map(|(_, (_, _, position))| position.0)
}
