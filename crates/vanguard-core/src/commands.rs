//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::ArchetypeId;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start the defense session: spawn the objective and arm the wave plan.
    StartDefense,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Skip the remaining inter-wave delay.
    ForceNextWave,
    /// Place a unit or structure. Spends recruitment, then builds over time.
    Place {
        archetype: ArchetypeId,
        position: Vec2,
    },
}
