//! Target-priority scoring and damage transforms.
//!
//! Pure functions keyed by enum tag; the selector and the damage path pick
//! the behavior variant without dynamic dispatch.

use glam::Vec2;

use vanguard_core::enums::{TargetPriority, UnitState};

use crate::profiles::ArchetypeProfile;

/// Everything the scorer needs to know about one candidate.
#[derive(Debug, Clone, Copy)]
pub struct CandidateInfo {
    pub position: Vec2,
    pub health: f32,
    pub attack_damage: f32,
}

/// Score a candidate under a priority policy. Lower score wins; ties break
/// to the first candidate encountered.
pub fn score(policy: TargetPriority, seeker_position: Vec2, candidate: &CandidateInfo) -> f32 {
    match policy {
        TargetPriority::Closest => seeker_position.distance(candidate.position),
        TargetPriority::LowestHealth => candidate.health,
        TargetPriority::HighestDamage => -candidate.attack_damage,
    }
}

/// Transform incoming damage for an archetype before the health clamp.
///
/// Armor is a flat percentage reduction; defensive stance applies only while
/// the defender holds ground (Idle or Attacking, not Moving).
pub fn transform_incoming(profile: &ArchetypeProfile, state: UnitState, amount: f32) -> f32 {
    let mut amount = amount;
    if let Some(armor) = profile.armor_reduction {
        amount *= 1.0 - armor;
    }
    if let Some(stance) = profile.defensive_stance {
        if matches!(state, UnitState::Idle | UnitState::Attacking) {
            amount *= stance;
        }
    }
    amount
}
