//! Archetype-specific stat blocks and behavior tags.
//!
//! One data record per archetype replaces a subclass hierarchy: stats plus a
//! pair of optional damage-transform parameters selected by tag.

use vanguard_core::constants::{PRODUCTION_COST, PRODUCTION_INTERVAL_SECS};
use vanguard_core::enums::{ArchetypeId, TargetPriority, Team};

/// Full configuration for one unit archetype.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeProfile {
    pub display_name: &'static str,
    pub team: Team,
    /// Structures never move or fight; they anchor production and draw seekers.
    pub is_structure: bool,
    pub max_health: f32,
    pub attack_damage: f32,
    pub attack_range: f32,
    pub attack_cooldown_secs: f32,
    pub move_speed: f32,
    pub priority: TargetPriority,
    /// Flat percentage damage reduction (armor), applied pre-clamp.
    pub armor_reduction: Option<f32>,
    /// Incoming damage multiplier while holding ground (Idle/Attacking).
    pub defensive_stance: Option<f32>,
    /// Recruitment cost when player-placed.
    pub cost: u32,
    /// Production parameters for producing structures: (interval secs, cost per unit).
    pub production: Option<(f32, u32)>,
}

/// Get the profile for a given archetype.
pub fn get_profile(archetype: ArchetypeId) -> ArchetypeProfile {
    match archetype {
        ArchetypeId::ComradeRecruit => ArchetypeProfile {
            display_name: "Comrade Recruit",
            team: Team::Ally,
            is_structure: false,
            max_health: 50.0,
            attack_damage: 8.0,
            attack_range: 2.5,
            attack_cooldown_secs: 1.2,
            move_speed: 2.5,
            priority: TargetPriority::Closest,
            armor_reduction: None,
            defensive_stance: None,
            cost: 3,
            production: None,
        },
        ArchetypeId::WorkerBrigade => ArchetypeProfile {
            display_name: "Worker Brigade",
            team: Team::Ally,
            is_structure: false,
            max_health: 80.0,
            attack_damage: 15.0,
            attack_range: 1.5,
            attack_cooldown_secs: 1.5,
            move_speed: 2.0,
            priority: TargetPriority::HighestDamage,
            armor_reduction: None,
            defensive_stance: Some(0.8),
            cost: 5,
            production: None,
        },
        ArchetypeId::Reactionary => ArchetypeProfile {
            display_name: "Reactionary",
            team: Team::Enemy,
            is_structure: false,
            max_health: 40.0,
            attack_damage: 10.0,
            attack_range: 2.0,
            attack_cooldown_secs: 1.3,
            move_speed: 2.2,
            priority: TargetPriority::Closest,
            armor_reduction: None,
            defensive_stance: None,
            cost: 0,
            production: None,
        },
        ArchetypeId::OppressorTank => ArchetypeProfile {
            display_name: "Oppressor Tank",
            team: Team::Enemy,
            is_structure: false,
            max_health: 150.0,
            attack_damage: 25.0,
            attack_range: 2.5,
            attack_cooldown_secs: 2.0,
            move_speed: 1.2,
            priority: TargetPriority::LowestHealth,
            armor_reduction: Some(0.3),
            defensive_stance: None,
            cost: 0,
            production: None,
        },
        ArchetypeId::Workshop => ArchetypeProfile {
            display_name: "Workshop",
            team: Team::Ally,
            is_structure: true,
            max_health: 100.0,
            attack_damage: 0.0,
            attack_range: 0.0,
            attack_cooldown_secs: 0.0,
            move_speed: 0.0,
            priority: TargetPriority::Closest,
            armor_reduction: None,
            defensive_stance: None,
            cost: 8,
            production: Some((PRODUCTION_INTERVAL_SECS, PRODUCTION_COST)),
        },
    }
}
