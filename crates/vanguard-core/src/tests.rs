#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::config::{ConfigError, SpawnGroup, WaveConfig, WavePlan};
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::types::{Position, SimTime, UnitId};

    fn plan_with(waves: Vec<WaveConfig>, spawn_points: Vec<Vec2>) -> WavePlan {
        WavePlan {
            waves,
            spawn_points,
            ..WavePlan::default()
        }
    }

    fn one_wave(groups: Vec<SpawnGroup>) -> WaveConfig {
        WaveConfig {
            wave_name: "test wave".to_string(),
            spawn_groups: groups,
        }
    }

    /// Verify enums round-trip through serde_json.
    #[test]
    fn test_unit_state_serde() {
        let variants = vec![
            UnitState::Idle,
            UnitState::Moving,
            UnitState::Attacking,
            UnitState::Dead,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: UnitState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_target_priority_serde() {
        let variants = vec![
            TargetPriority::Closest,
            TargetPriority::LowestHealth,
            TargetPriority::HighestDamage,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TargetPriority = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::WaveStarted { wave: 1 },
            SimEvent::WaveCompleted { wave: 1 },
            SimEvent::AllWavesComplete,
            SimEvent::GameOver {
                outcome: SessionOutcome::Defeat,
            },
            SimEvent::UnitDied {
                unit: UnitId(7),
                team: Team::Enemy,
            },
            SimEvent::AttackLanded { attacker: UnitId(3) },
        ];
        for ev in events {
            let json = serde_json::to_string(&ev).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(ev, back);
        }
    }

    #[test]
    fn test_team_opposes() {
        assert!(Team::Ally.opposes(Team::Enemy));
        assert!(Team::Enemy.opposes(Team::Ally));
        assert!(!Team::Ally.opposes(Team::Ally));
        assert!(!Team::Enemy.opposes(Team::Enemy));
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    // ---- Wave plan validation ----

    #[test]
    fn test_plan_no_waves_rejected() {
        let plan = plan_with(vec![], vec![Vec2::new(10.0, 0.0)]);
        assert_eq!(plan.validate(), Err(ConfigError::NoWaves));
    }

    #[test]
    fn test_plan_no_spawn_points_rejected() {
        let plan = plan_with(
            vec![one_wave(vec![SpawnGroup {
                archetype: ArchetypeId::Reactionary,
                count: 3,
            }])],
            vec![],
        );
        assert_eq!(plan.validate(), Err(ConfigError::NoSpawnPoints));
    }

    #[test]
    fn test_plan_empty_wave_rejected() {
        let plan = plan_with(vec![one_wave(vec![])], vec![Vec2::new(10.0, 0.0)]);
        assert!(matches!(
            plan.validate(),
            Err(ConfigError::EmptyWave { index: 0, .. })
        ));
    }

    #[test]
    fn test_plan_zero_count_group_rejected() {
        let plan = plan_with(
            vec![one_wave(vec![SpawnGroup {
                archetype: ArchetypeId::Reactionary,
                count: 0,
            }])],
            vec![Vec2::new(10.0, 0.0)],
        );
        assert!(matches!(
            plan.validate(),
            Err(ConfigError::ZeroCountGroup { index: 0, .. })
        ));
    }

    #[test]
    fn test_plan_total_enemies() {
        let plan = plan_with(
            vec![
                one_wave(vec![SpawnGroup {
                    archetype: ArchetypeId::Reactionary,
                    count: 3,
                }]),
                one_wave(vec![
                    SpawnGroup {
                        archetype: ArchetypeId::Reactionary,
                        count: 4,
                    },
                    SpawnGroup {
                        archetype: ArchetypeId::OppressorTank,
                        count: 1,
                    },
                ]),
            ],
            vec![Vec2::new(10.0, 0.0)],
        );
        assert!(plan.validate().is_ok());
        assert_eq!(plan.total_enemies(), 8);
    }

    #[test]
    fn test_wave_plan_json_round_trip() {
        let plan = plan_with(
            vec![one_wave(vec![SpawnGroup {
                archetype: ArchetypeId::OppressorTank,
                count: 2,
            }])],
            vec![Vec2::new(-12.0, 0.0), Vec2::new(12.0, 0.0)],
        );
        let json = serde_json::to_string(&plan).unwrap();
        let back: WavePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back.waves.len(), 1);
        assert_eq!(back.spawn_points.len(), 2);
        assert_eq!(back.total_enemies(), 2);
    }
}
