//! The default defense scenario: a 3-wave escalating assault.

use glam::Vec2;

use vanguard_core::config::{SpawnGroup, WaveConfig, WavePlan};
use vanguard_core::enums::ArchetypeId;

/// Default 3-wave plan with escalating difficulty.
pub fn default_plan() -> WavePlan {
    WavePlan {
        waves: vec![
            WaveConfig {
                wave_name: "Probing attack".to_string(),
                spawn_groups: vec![SpawnGroup {
                    archetype: ArchetypeId::Reactionary,
                    count: 4,
                }],
            },
            WaveConfig {
                wave_name: "Main assault".to_string(),
                spawn_groups: vec![
                    SpawnGroup {
                        archetype: ArchetypeId::Reactionary,
                        count: 6,
                    },
                    SpawnGroup {
                        archetype: ArchetypeId::OppressorTank,
                        count: 1,
                    },
                ],
            },
            WaveConfig {
                wave_name: "Last push".to_string(),
                spawn_groups: vec![
                    SpawnGroup {
                        archetype: ArchetypeId::Reactionary,
                        count: 8,
                    },
                    SpawnGroup {
                        archetype: ArchetypeId::OppressorTank,
                        count: 2,
                    },
                ],
            },
        ],
        use_random_spawn_points: true,
        spawn_points: vec![
            Vec2::new(-14.0, 0.0),
            Vec2::new(14.0, 0.0),
            Vec2::new(0.0, 12.0),
        ],
        ..WavePlan::default()
    }
}
