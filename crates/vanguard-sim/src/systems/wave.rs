//! Wave orchestration: Waiting → Spawning → Fighting → (Waiting | Complete).
//!
//! Timers are tick-accumulated seconds, so pausing the engine pauses every
//! sequence. The live-enemy count is event-driven (decremented on death
//! signals) but reconciled against an authoritative world scan periodically
//! and re-confirmed before a wave is declared cleared, so a dropped or
//! duplicated signal can delay completion by at most one reconcile interval,
//! never corrupt it.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use vanguard_core::components::{CombatState, Unit};
use vanguard_core::config::{ConfigError, WavePlan};
use vanguard_core::constants::{DT, RECONCILE_INTERVAL_TICKS, SPAWN_JITTER};
use vanguard_core::enums::{ArchetypeId, Team, UnitState, WavePhase};
use vanguard_core::events::SimEvent;
use vanguard_core::state::WaveView;

use vanguard_unit_ai::profiles::get_profile;

use crate::handles;
use crate::world_setup;

/// Drives the enemy wave sequence. Disarmed until given a valid plan.
pub struct WaveOrchestrator {
    plan: WavePlan,
    phase: WavePhase,
    /// 1-based index of the wave in progress; 0 before the first.
    current_wave: u32,
    wave_timer_secs: f32,
    spawn_timer_secs: f32,
    spawn_queue: VecDeque<ArchetypeId>,
    enemies_alive: u32,
    armed: bool,
}

impl Default for WaveOrchestrator {
    fn default() -> Self {
        Self {
            plan: WavePlan::default(),
            phase: WavePhase::Waiting,
            current_wave: 0,
            wave_timer_secs: 0.0,
            spawn_timer_secs: 0.0,
            spawn_queue: VecDeque::new(),
            enemies_alive: 0,
            armed: false,
        }
    }
}

impl WaveOrchestrator {
    /// Validate and install a wave plan. Plans whose spawn groups name a
    /// non-enemy archetype are rejected here, where teams are known. A
    /// rejected plan leaves the orchestrator disarmed; the session runs on
    /// without waves.
    pub fn arm(&mut self, plan: WavePlan) -> Result<(), ConfigError> {
        plan.validate()?;
        for (index, wave) in plan.waves.iter().enumerate() {
            for group in &wave.spawn_groups {
                if get_profile(group.archetype).team != Team::Enemy {
                    return Err(ConfigError::NonEnemyGroup {
                        index,
                        name: wave.wave_name.clone(),
                        archetype: group.archetype,
                    });
                }
            }
        }
        tracing::info!(
            waves = plan.waves.len(),
            enemies = plan.total_enemies(),
            "wave plan armed"
        );
        *self = Self {
            plan,
            armed: true,
            ..Self::default()
        };
        Ok(())
    }

    /// Skip the remaining inter-wave delay.
    pub fn force_next_wave(&mut self) {
        if self.armed && self.phase == WavePhase::Waiting {
            self.wave_timer_secs = self.plan.time_between_waves;
        }
    }

    /// Record one enemy death signal. Never drops below zero; the periodic
    /// reconciliation corrects any drift.
    pub fn note_enemy_death(&mut self) {
        self.enemies_alive = self.enemies_alive.saturating_sub(1);
    }

    /// The objective fell: terminal. Pending spawns are cancelled.
    pub fn abort(&mut self) {
        if self.phase != WavePhase::Complete {
            tracing::info!(wave = self.current_wave, "wave sequence aborted");
            self.phase = WavePhase::Complete;
            self.spawn_queue.clear();
        }
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn view(&self) -> WaveView {
        let time_until_next_wave = if self.armed && self.phase == WavePhase::Waiting {
            (self.plan.time_between_waves - self.wave_timer_secs).max(0.0)
        } else {
            0.0
        };
        WaveView {
            phase: self.phase,
            current_wave: self.current_wave,
            total_waves: self.plan.waves.len() as u32,
            enemies_alive: self.enemies_alive,
            time_until_next_wave,
        }
    }

    /// Advance the orchestrator by one tick.
    pub fn run(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        current_tick: u64,
        events: &mut Vec<SimEvent>,
    ) {
        if !self.armed {
            return;
        }
        match self.phase {
            WavePhase::Waiting => {
                self.wave_timer_secs += DT;
                if self.wave_timer_secs >= self.plan.time_between_waves {
                    self.start_next_wave(events);
                }
            }
            WavePhase::Spawning => {
                self.spawn_timer_secs += DT;
                while self.spawn_timer_secs >= self.plan.time_between_spawns {
                    let Some(archetype) = self.spawn_queue.pop_front() else {
                        break;
                    };
                    self.spawn_enemy(world, rng, archetype, events);
                    self.spawn_timer_secs -= self.plan.time_between_spawns;
                }
                if self.spawn_queue.is_empty() {
                    self.phase = WavePhase::Fighting;
                }
            }
            WavePhase::Fighting => {
                if current_tick.is_multiple_of(RECONCILE_INTERVAL_TICKS) {
                    self.enemies_alive = count_live_enemies(world);
                }
                if self.enemies_alive == 0 {
                    // Confirm with a fresh recount before declaring the wave cleared.
                    self.enemies_alive = count_live_enemies(world);
                    if self.enemies_alive == 0 {
                        self.finish_wave(events);
                    }
                }
            }
            WavePhase::Complete => {}
        }
    }

    fn start_next_wave(&mut self, events: &mut Vec<SimEvent>) {
        self.current_wave += 1;
        let Some(wave) = self.plan.waves.get(self.current_wave as usize - 1) else {
            self.phase = WavePhase::Complete;
            return;
        };
        self.spawn_queue = wave
            .spawn_groups
            .iter()
            .flat_map(|group| std::iter::repeat_n(group.archetype, group.count as usize))
            .collect();
        self.phase = WavePhase::Spawning;
        self.wave_timer_secs = 0.0;
        // Primed so the first spawn fires on this wave's first Spawning tick.
        self.spawn_timer_secs = self.plan.time_between_spawns;
        tracing::info!(
            wave = self.current_wave,
            name = %wave.wave_name,
            spawns = self.spawn_queue.len(),
            "wave started"
        );
        events.push(SimEvent::WaveStarted {
            wave: self.current_wave,
        });
    }

    fn finish_wave(&mut self, events: &mut Vec<SimEvent>) {
        tracing::info!(wave = self.current_wave, "wave cleared");
        events.push(SimEvent::WaveCompleted {
            wave: self.current_wave,
        });
        if self.current_wave as usize >= self.plan.waves.len() {
            self.phase = WavePhase::Complete;
            events.push(SimEvent::AllWavesComplete);
        } else {
            self.phase = WavePhase::Waiting;
            self.wave_timer_secs = 0.0;
        }
    }

    fn spawn_enemy(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        archetype: ArchetypeId,
        events: &mut Vec<SimEvent>,
    ) {
        let points = &self.plan.spawn_points;
        let index = if self.plan.use_random_spawn_points {
            rng.gen_range(0..points.len())
        } else {
            self.enemies_alive as usize % points.len()
        };
        let jitter = Vec2::new(
            rng.gen_range(-SPAWN_JITTER..=SPAWN_JITTER),
            rng.gen_range(-SPAWN_JITTER..=SPAWN_JITTER),
        );
        let position = points[index] + jitter;

        let entity = world_setup::spawn_unit(world, archetype, position);
        self.enemies_alive += 1;
        events.push(SimEvent::UnitSpawned {
            unit: handles::id_of(entity),
            team: Team::Enemy,
            archetype,
        });
    }
}

/// Authoritative live-enemy count from the world.
fn count_live_enemies(world: &World) -> u32 {
    world
        .query::<(&Unit, &CombatState)>()
        .iter()
        .filter(|(_, (unit, combat))| {
            unit.team == Team::Enemy && combat.state != UnitState::Dead
        })
        .count() as u32
}
