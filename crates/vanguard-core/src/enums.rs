//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side a combatant fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Player-placed comrade units and structures.
    Ally,
    /// Wave-spawned attackers.
    Enemy,
}

impl Team {
    /// True if `other` is a valid combat target for this team.
    pub fn opposes(self, other: Team) -> bool {
        self != other
    }
}

/// Per-unit combat lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitState {
    /// Holding position, scanning for targets.
    #[default]
    Idle,
    /// Closing on the current target.
    Moving,
    /// In range, trading blows on a cooldown.
    Attacking,
    /// Terminal. Inert until the linger timer removes the corpse.
    Dead,
}

/// Named unit configuration: a stat block plus a behavior tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchetypeId {
    /// Basic allied infantry: cheap, balanced.
    ComradeRecruit,
    /// Allied melee militia: tough, short reach, defensive stance.
    WorkerBrigade,
    /// Basic enemy foot soldier.
    Reactionary,
    /// Heavy enemy armor: slow, hard-hitting, damage reduction.
    OppressorTank,
    /// Allied structure that produces recruits over time.
    Workshop,
}

/// Target-ranking policy. Lower score wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetPriority {
    /// Score = distance to candidate.
    #[default]
    Closest,
    /// Score = candidate's current health.
    LowestHealth,
    /// Score = negated candidate attack damage.
    HighestDamage,
}

/// Wave orchestrator lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Counting up to the next wave.
    #[default]
    Waiting,
    /// Emitting the current wave's spawn groups.
    Spawning,
    /// All spawned; waiting for the field to clear.
    Fighting,
    /// Wave sequence exhausted or objective lost. Terminal.
    Complete,
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Setup,
    Active,
    Paused,
    Ended,
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// Every wave eliminated.
    Victory,
    /// The objective was destroyed.
    Defeat,
}
