//! Game state snapshot — the complete visible state produced each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{SimTime, UnitId};

/// Complete session state built after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub outcome: Option<SessionOutcome>,
    pub units: Vec<UnitView>,
    pub objective: Option<ObjectiveView>,
    pub wave: WaveView,
    /// Recruitment points available for placement.
    pub recruitment: u32,
    /// Events emitted during this tick.
    pub events: Vec<SimEvent>,
}

/// One visible combatant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub archetype: ArchetypeId,
    pub team: Team,
    pub position: Vec2,
    pub state: UnitState,
    pub health: f32,
    pub max_health: f32,
}

/// Base core status for health bars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveView {
    pub position: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub destroyed: bool,
}

/// Wave system status for the wave HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub phase: WavePhase,
    /// 1-based wave currently in progress (0 before the first wave).
    pub current_wave: u32,
    pub total_waves: u32,
    pub enemies_alive: u32,
    /// Seconds until the next wave while Waiting, else 0.
    pub time_until_next_wave: f32,
}
