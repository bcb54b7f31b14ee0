//! ECS components for simulation entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{ArchetypeId, Team, UnitState};
use crate::types::{Position, UnitId};

/// Marks an entity as a combatant and names its archetype and side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Unit {
    pub archetype: ArchetypeId,
    pub team: Team,
}

/// Immutable-post-spawn stat block, built from an archetype profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitStats {
    pub max_health: f32,
    pub attack_damage: f32,
    pub attack_range: f32,
    pub attack_cooldown_secs: f32,
    pub move_speed: f32,
    pub priority: crate::enums::TargetPriority,
}

/// Current hit points. Always in [0, max_health].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
}

/// What a unit is currently fighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRef {
    /// Another combatant, by generational handle.
    Unit(UnitId),
    /// The defended base core.
    Objective,
}

/// Mutable combat state advanced by the combat system each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CombatState {
    pub state: UnitState,
    pub target: Option<TargetRef>,
    /// Tick of the last executed attack, None before the first.
    pub last_attack_tick: Option<u64>,
    /// Tick at which the current state was entered.
    pub state_since_tick: u64,
}

/// Marks an entity as a placed structure (zero mobility, objective-seeker bait).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Structure;

/// Marks the defended base core.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Objective;

/// Terminal flag for the objective. Set exactly once.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ObjectiveStatus {
    pub destroyed: bool,
}

/// An enemy's structure target: where to walk when no combat target exists.
///
/// The handle may go stale between ticks; the objective-seeker system
/// re-resolves it rather than trusting it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ObjectiveRef {
    pub target: Option<UnitId>,
    /// Fixed waypoint fallback when no structures remain.
    pub waypoint: Option<Position>,
}

/// Timed unit production attached to a structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Production {
    pub output: ArchetypeId,
    pub interval_secs: f32,
    pub cost: u32,
    /// Accumulated time toward the next production.
    pub timer_secs: f32,
    pub produced: u32,
    /// None = unlimited.
    pub limit: Option<u32>,
    pub active: bool,
}
