//! Events emitted by the simulation for UI and audio collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::{ArchetypeId, SessionOutcome, Team};
use crate::types::UnitId;

/// Simulation events. Emitted during a tick, carried on the snapshot, and
/// dispatched through the signal bus. The core has no dependency on who listens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A wave began spawning (1-based index).
    WaveStarted { wave: u32 },
    /// A wave's enemies were all eliminated (1-based index).
    WaveCompleted { wave: u32 },
    /// The last wave was eliminated. Victory.
    AllWavesComplete,
    /// The session ended.
    GameOver { outcome: SessionOutcome },
    /// A unit entered the field (wave spawn, placement, or production).
    UnitSpawned {
        unit: UnitId,
        team: Team,
        archetype: ArchetypeId,
    },
    /// A unit took damage (post-transform amount).
    UnitDamaged { unit: UnitId, amount: f32 },
    /// A unit died. Emitted exactly once per unit.
    UnitDied { unit: UnitId, team: Team },
    /// An attack landed (for hit flashes / audio).
    AttackLanded { attacker: UnitId },
    /// The base core took damage.
    ObjectiveDamaged { amount: f32 },
    /// The base core was destroyed. Terminal.
    ObjectiveDestroyed,
}
