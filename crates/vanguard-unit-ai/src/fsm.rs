//! Combat finite state machine.
//!
//! Pure function that computes the Idle/Moving/Attacking transition, movement
//! intent, and attack eligibility for one unit per tick, based on its stats
//! and the (already liveness-checked) target. The sim crate resolves targets,
//! applies updates, and executes attacks.

use glam::Vec2;

use vanguard_core::constants::DT;
use vanguard_core::enums::UnitState;

/// A resolved, live target. The caller must not pass a dead or stale target.
#[derive(Debug, Clone, Copy)]
pub struct TargetInfo {
    pub position: Vec2,
}

/// Input to the combat FSM for a single unit.
#[derive(Debug, Clone, Copy)]
pub struct CombatContext {
    pub state: UnitState,
    pub position: Vec2,
    pub move_speed: f32,
    pub attack_range: f32,
    pub attack_cooldown_secs: f32,
    /// Tick of the last executed attack, None before the first.
    pub last_attack_tick: Option<u64>,
    pub current_tick: u64,
    /// None means the target was lost (or never acquired).
    pub target: Option<TargetInfo>,
}

/// Output from the combat FSM.
#[derive(Debug, Clone, Copy)]
pub struct CombatUpdate {
    pub new_state: UnitState,
    /// Movement intent for this tick, integrated by the movement system.
    pub velocity: Vec2,
    /// Execute an attack against the current target this tick.
    pub attack: bool,
    /// Clear the unit's target reference (target lost).
    pub drop_target: bool,
}

impl CombatUpdate {
    fn hold(state: UnitState) -> Self {
        Self {
            new_state: state,
            velocity: Vec2::ZERO,
            attack: false,
            drop_target: false,
        }
    }
}

/// Evaluate the FSM for one unit. Dead is terminal: no transitions, no intent.
pub fn evaluate(ctx: &CombatContext) -> CombatUpdate {
    if ctx.state == UnitState::Dead {
        return CombatUpdate::hold(UnitState::Dead);
    }

    let Some(target) = ctx.target else {
        // Target lost mid-move or mid-attack: fall back to Idle.
        return CombatUpdate {
            new_state: UnitState::Idle,
            velocity: Vec2::ZERO,
            attack: false,
            drop_target: ctx.state != UnitState::Idle,
        };
    };

    let distance = ctx.position.distance(target.position);

    match ctx.state {
        // Range check is inclusive: standing exactly at attack range attacks.
        UnitState::Idle | UnitState::Moving => {
            if distance <= ctx.attack_range {
                CombatUpdate::hold(UnitState::Attacking)
            } else {
                CombatUpdate {
                    new_state: UnitState::Moving,
                    velocity: step_toward(ctx.position, target.position, ctx.move_speed),
                    attack: false,
                    drop_target: false,
                }
            }
        }
        UnitState::Attacking => {
            if distance > ctx.attack_range {
                CombatUpdate {
                    new_state: UnitState::Moving,
                    velocity: step_toward(ctx.position, target.position, ctx.move_speed),
                    attack: false,
                    drop_target: false,
                }
            } else {
                CombatUpdate {
                    new_state: UnitState::Attacking,
                    velocity: Vec2::ZERO,
                    attack: cooldown_ready(ctx),
                    drop_target: false,
                }
            }
        }
        UnitState::Dead => CombatUpdate::hold(UnitState::Dead),
    }
}

/// Velocity toward a destination at full move speed, clamped so one tick's
/// step never overshoots the destination.
pub fn step_toward(from: Vec2, to: Vec2, move_speed: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance < f32::EPSILON {
        return Vec2::ZERO;
    }
    let speed = move_speed.min(distance / DT);
    delta / distance * speed
}

fn cooldown_ready(ctx: &CombatContext) -> bool {
    match ctx.last_attack_tick {
        None => true,
        Some(last) => {
            let elapsed = ctx.current_tick.saturating_sub(last) as f32 * DT;
            elapsed >= ctx.attack_cooldown_secs
        }
    }
}
