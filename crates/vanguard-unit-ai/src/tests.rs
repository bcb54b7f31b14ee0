#[cfg(test)]
mod tests {
    use glam::Vec2;

    use vanguard_core::constants::DT;
    use vanguard_core::enums::{ArchetypeId, TargetPriority, Team, UnitState};

    use crate::fsm::{evaluate, step_toward, CombatContext, CombatUpdate, TargetInfo};
    use crate::policies::{score, transform_incoming, CandidateInfo};
    use crate::profiles::get_profile;

    fn make_context(state: UnitState, target: Option<Vec2>) -> CombatContext {
        CombatContext {
            state,
            position: Vec2::ZERO,
            move_speed: 2.0,
            attack_range: 2.0,
            attack_cooldown_secs: 1.0,
            last_attack_tick: None,
            current_tick: 0,
            target: target.map(|position| TargetInfo { position }),
        }
    }

    fn assert_inert(update: &CombatUpdate) {
        assert_eq!(update.velocity, Vec2::ZERO);
        assert!(!update.attack);
    }

    #[test]
    fn test_idle_without_target_stays_idle() {
        let update = evaluate(&make_context(UnitState::Idle, None));
        assert_eq!(update.new_state, UnitState::Idle);
        assert!(!update.drop_target);
        assert_inert(&update);
    }

    #[test]
    fn test_idle_with_distant_target_starts_moving() {
        let update = evaluate(&make_context(UnitState::Idle, Some(Vec2::new(10.0, 0.0))));
        assert_eq!(update.new_state, UnitState::Moving);
        assert!(update.velocity.x > 0.0);
        assert!((update.velocity.length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_moving_enters_attack_at_range_boundary() {
        // Exactly at attack range counts as in range.
        let update = evaluate(&make_context(UnitState::Moving, Some(Vec2::new(2.0, 0.0))));
        assert_eq!(update.new_state, UnitState::Attacking);
        assert_inert(&update);
    }

    #[test]
    fn test_attacking_first_strike_is_immediate() {
        let update = evaluate(&make_context(UnitState::Attacking, Some(Vec2::new(1.0, 0.0))));
        assert_eq!(update.new_state, UnitState::Attacking);
        assert!(update.attack);
    }

    #[test]
    fn test_attack_cooldown_gates_strikes() {
        let mut ctx = make_context(UnitState::Attacking, Some(Vec2::new(1.0, 0.0)));
        ctx.last_attack_tick = Some(10);

        // 0.5s after the last strike: still cooling down.
        ctx.current_tick = 25;
        assert!(!evaluate(&ctx).attack);

        // A full second later: ready again.
        ctx.current_tick = 40;
        assert!(evaluate(&ctx).attack);
    }

    #[test]
    fn test_attacking_chases_when_target_leaves_range() {
        let update = evaluate(&make_context(UnitState::Attacking, Some(Vec2::new(5.0, 0.0))));
        assert_eq!(update.new_state, UnitState::Moving);
        assert!(update.velocity.x > 0.0);
        assert!(!update.attack);
    }

    #[test]
    fn test_target_lost_drops_to_idle() {
        for state in [UnitState::Moving, UnitState::Attacking] {
            let update = evaluate(&make_context(state, None));
            assert_eq!(update.new_state, UnitState::Idle);
            assert!(update.drop_target);
            assert_inert(&update);
        }
    }

    #[test]
    fn test_dead_is_terminal() {
        let update = evaluate(&make_context(UnitState::Dead, Some(Vec2::new(1.0, 0.0))));
        assert_eq!(update.new_state, UnitState::Dead);
        assert_inert(&update);
    }

    #[test]
    fn test_step_toward_never_overshoots() {
        // Destination closer than one tick's travel: step lands exactly on it.
        let to = Vec2::new(0.01, 0.0);
        let velocity = step_toward(Vec2::ZERO, to, 5.0);
        assert!((velocity.x * DT - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_step_toward_at_destination_is_zero() {
        assert_eq!(step_toward(Vec2::ONE, Vec2::ONE, 5.0), Vec2::ZERO);
    }

    // ---- Target scoring ----

    fn candidate(x: f32, health: f32, damage: f32) -> CandidateInfo {
        CandidateInfo {
            position: Vec2::new(x, 0.0),
            health,
            attack_damage: damage,
        }
    }

    #[test]
    fn test_closest_policy_prefers_near() {
        let near = candidate(2.0, 100.0, 5.0);
        let far = candidate(8.0, 10.0, 50.0);
        assert!(
            score(TargetPriority::Closest, Vec2::ZERO, &near)
                < score(TargetPriority::Closest, Vec2::ZERO, &far)
        );
    }

    #[test]
    fn test_lowest_health_policy_ignores_distance() {
        let near_healthy = candidate(1.0, 100.0, 5.0);
        let far_wounded = candidate(9.0, 10.0, 5.0);
        assert!(
            score(TargetPriority::LowestHealth, Vec2::ZERO, &far_wounded)
                < score(TargetPriority::LowestHealth, Vec2::ZERO, &near_healthy)
        );
    }

    #[test]
    fn test_highest_damage_policy_prefers_dangerous() {
        let weak = candidate(1.0, 50.0, 5.0);
        let dangerous = candidate(9.0, 50.0, 25.0);
        assert!(
            score(TargetPriority::HighestDamage, Vec2::ZERO, &dangerous)
                < score(TargetPriority::HighestDamage, Vec2::ZERO, &weak)
        );
    }

    // ---- Damage transforms ----

    #[test]
    fn test_tank_armor_reduces_damage() {
        let profile = get_profile(ArchetypeId::OppressorTank);
        let taken = transform_incoming(&profile, UnitState::Moving, 25.0);
        assert!((taken - 17.5).abs() < 1e-4);
    }

    #[test]
    fn test_defensive_stance_only_while_holding_ground() {
        let profile = get_profile(ArchetypeId::WorkerBrigade);
        let holding = transform_incoming(&profile, UnitState::Attacking, 10.0);
        assert!((holding - 8.0).abs() < 1e-4);
        let idle = transform_incoming(&profile, UnitState::Idle, 10.0);
        assert!((idle - 8.0).abs() < 1e-4);
        let moving = transform_incoming(&profile, UnitState::Moving, 10.0);
        assert!((moving - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_plain_archetypes_take_full_damage() {
        for archetype in [ArchetypeId::ComradeRecruit, ArchetypeId::Reactionary] {
            let profile = get_profile(archetype);
            assert!((transform_incoming(&profile, UnitState::Idle, 12.0) - 12.0).abs() < 1e-6);
        }
    }

    // ---- Profiles ----

    #[test]
    fn test_profile_teams() {
        assert_eq!(get_profile(ArchetypeId::ComradeRecruit).team, Team::Ally);
        assert_eq!(get_profile(ArchetypeId::WorkerBrigade).team, Team::Ally);
        assert_eq!(get_profile(ArchetypeId::Workshop).team, Team::Ally);
        assert_eq!(get_profile(ArchetypeId::Reactionary).team, Team::Enemy);
        assert_eq!(get_profile(ArchetypeId::OppressorTank).team, Team::Enemy);
    }

    #[test]
    fn test_workshop_is_inert_structure() {
        let profile = get_profile(ArchetypeId::Workshop);
        assert!(profile.is_structure);
        assert_eq!(profile.move_speed, 0.0);
        assert_eq!(profile.attack_damage, 0.0);
        assert!(profile.production.is_some());
    }
}
