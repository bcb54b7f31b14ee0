//! Wave plan configuration surface.
//!
//! Deserializable per-session configuration: wave composition, timing, and
//! spawn point selection. Validated before the orchestrator will start.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_TIME_BETWEEN_SPAWNS, DEFAULT_TIME_BETWEEN_WAVES};
use crate::enums::ArchetypeId;

/// One (archetype, count) spawn group within a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnGroup {
    pub archetype: ArchetypeId,
    pub count: u32,
}

/// An ordered batch of enemy spawn groups released together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveConfig {
    pub wave_name: String,
    pub spawn_groups: Vec<SpawnGroup>,
}

/// The complete wave plan for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WavePlan {
    pub waves: Vec<WaveConfig>,
    pub time_between_waves: f32,
    pub time_between_spawns: f32,
    /// true = uniform random spawn point; false = round-robin keyed by live count.
    pub use_random_spawn_points: bool,
    pub spawn_points: Vec<Vec2>,
}

/// Configuration problems that prevent the wave system from starting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no waves configured")]
    NoWaves,
    #[error("no spawn points configured")]
    NoSpawnPoints,
    #[error("wave {index} ({name:?}) has no spawn groups")]
    EmptyWave { index: usize, name: String },
    #[error("wave {index} ({name:?}) has a zero-count spawn group")]
    ZeroCountGroup { index: usize, name: String },
    /// A spawn group names an archetype that does not fight for the enemy.
    /// Raised by the orchestrator, which knows archetype teams.
    #[error("wave {index} ({name:?}) spawns non-enemy archetype {archetype:?}")]
    NonEnemyGroup {
        index: usize,
        name: String,
        archetype: ArchetypeId,
    },
}

impl Default for WavePlan {
    fn default() -> Self {
        Self {
            waves: Vec::new(),
            time_between_waves: DEFAULT_TIME_BETWEEN_WAVES,
            time_between_spawns: DEFAULT_TIME_BETWEEN_SPAWNS,
            use_random_spawn_points: true,
            spawn_points: Vec::new(),
        }
    }
}

impl WavePlan {
    /// Check the plan is startable. Missing configuration is fatal-to-feature,
    /// not fatal-to-session: callers log and refuse to start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.waves.is_empty() {
            return Err(ConfigError::NoWaves);
        }
        if self.spawn_points.is_empty() {
            return Err(ConfigError::NoSpawnPoints);
        }
        for (index, wave) in self.waves.iter().enumerate() {
            if wave.spawn_groups.is_empty() {
                return Err(ConfigError::EmptyWave {
                    index,
                    name: wave.wave_name.clone(),
                });
            }
            if wave.spawn_groups.iter().any(|g| g.count == 0) {
                return Err(ConfigError::ZeroCountGroup {
                    index,
                    name: wave.wave_name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Total number of enemies across all waves.
    pub fn total_enemies(&self) -> u32 {
        self.waves
            .iter()
            .flat_map(|w| w.spawn_groups.iter())
            .map(|g| g.count)
            .sum()
    }
}
