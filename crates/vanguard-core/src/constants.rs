//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Targeting ---

/// Detection radius multiplier over attack range for allied units.
/// Deliberately much larger than the enemy factor: placed defenders are
/// sparse and must react to threats well outside weapon reach.
pub const ALLY_DETECTION_FACTOR: f32 = 4.0;

/// Detection radius multiplier over attack range for enemy units.
pub const ENEMY_DETECTION_FACTOR: f32 = 1.5;

// --- Lifecycle ---

/// Seconds a dead unit lingers (inert) before removal, for fade-out collaborators.
pub const DEATH_LINGER_SECS: f32 = 0.5;

/// Seconds between objective destruction and its removal.
pub const OBJECTIVE_REMOVAL_DELAY_SECS: f32 = 1.0;

// --- Objective ---

/// Base core hit points.
pub const OBJECTIVE_MAX_HEALTH: f32 = 500.0;

// --- Waves ---

/// Default delay between waves (seconds).
pub const DEFAULT_TIME_BETWEEN_WAVES: f32 = 10.0;

/// Default delay between individual spawns within a wave (seconds).
pub const DEFAULT_TIME_BETWEEN_SPAWNS: f32 = 0.5;

/// Random positional jitter applied to each spawn (± world units per axis).
pub const SPAWN_JITTER: f32 = 0.5;

/// Ticks between authoritative live-enemy recounts while Fighting.
pub const RECONCILE_INTERVAL_TICKS: u64 = 60;

// --- Placement economy ---

/// Recruitment points at session start.
pub const STARTING_RECRUITMENT: u32 = 10;

/// Seconds a placement spends under construction before the unit spawns.
pub const DEFAULT_BUILD_TIME_SECS: f32 = 2.0;

/// Collision footprint radius checked before placement.
pub const PLACEMENT_FOOTPRINT_RADIUS: f32 = 0.6;

/// Radius of the zone-population cap check.
pub const PLACEMENT_ZONE_RADIUS: f32 = 2.0;

/// Maximum mobile units allowed inside one placement zone.
pub const PLACEMENT_ZONE_CAP: usize = 6;

// --- Production ---

/// Seconds between workshop productions.
pub const PRODUCTION_INTERVAL_SECS: f32 = 10.0;

/// Recruitment cost per produced unit.
pub const PRODUCTION_COST: u32 = 5;

/// Radius around a workshop where produced units appear.
pub const PRODUCTION_SPAWN_RADIUS: f32 = 1.5;

// --- Spatial index ---

/// Uniform grid cell size for proximity queries.
pub const SPATIAL_CELL_SIZE: f32 = 4.0;
