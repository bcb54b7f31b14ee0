//! Unit behavior for VANGUARD.
//!
//! Pure functions that compute combat state transitions, movement intent,
//! target scoring, and damage transforms for combat units.
//! No ECS dependency — operates on plain data.

pub mod fsm;
pub mod policies;
pub mod profiles;

#[cfg(test)]
mod tests;
