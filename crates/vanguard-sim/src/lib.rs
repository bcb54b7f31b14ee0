//! Simulation engine for VANGUARD.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameSnapshots for the frontend.

pub mod engine;
pub mod handles;
pub mod scenario;
pub mod signals;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use vanguard_core as core;
