//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameSnapshot`s. Completely headless,
//! enabling deterministic testing: same seed + same commands = same
//! snapshot stream.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use vanguard_core::commands::PlayerCommand;
use vanguard_core::config::WavePlan;
use vanguard_core::constants::STARTING_RECRUITMENT;
use vanguard_core::enums::{GamePhase, SessionOutcome, Team};
use vanguard_core::events::SimEvent;
use vanguard_core::state::GameSnapshot;
use vanguard_core::types::SimTime;

use crate::scenario;
use crate::signals::{Listener, SignalBus, SubscriptionId};
use crate::systems;
use crate::systems::lifecycle::RemovalQueue;
use crate::systems::placement::{PendingBuild, Recruitment};
use crate::systems::spatial::UniformGrid;
use crate::systems::wave::WaveOrchestrator;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// The wave plan to arm when the defense starts.
    pub plan: WavePlan,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            plan: scenario::default_plan(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    outcome: Option<SessionOutcome>,
    rng: ChaCha8Rng,
    plan: WavePlan,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
    bus: SignalBus,
    grid: UniformGrid,
    orchestrator: WaveOrchestrator,
    recruitment: Recruitment,
    pending_builds: Vec<PendingBuild>,
    removals: RemovalQueue,
    despawn_buffer: Vec<hecs::Entity>,
    query_scratch: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            outcome: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            plan: config.plan,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            bus: SignalBus::default(),
            grid: UniformGrid::default(),
            orchestrator: WaveOrchestrator::default(),
            recruitment: Recruitment::default(),
            pending_builds: Vec::new(),
            removals: RemovalQueue::default(),
            despawn_buffer: Vec::new(),
            query_scratch: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        self.bus.dispatch(&events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.outcome,
            self.orchestrator.view(),
            self.recruitment.points(),
            events,
        )
    }

    /// Register an event listener on the signal bus.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    /// Remove an event listener. Unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.bus.unsubscribe(id);
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the session outcome, once the session has ended.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a unit directly, bypassing the placement economy (for testing).
    #[cfg(test)]
    pub fn spawn_test_unit(
        &mut self,
        archetype: vanguard_core::enums::ArchetypeId,
        position: glam::Vec2,
    ) -> vanguard_core::types::UnitId {
        let entity = world_setup::spawn_unit(&mut self.world, archetype, position);
        crate::handles::id_of(entity)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartDefense => {
                if self.phase == GamePhase::Setup {
                    world_setup::setup_session(&mut self.world);
                    self.recruitment = Recruitment::new(STARTING_RECRUITMENT);
                    self.time = SimTime::default();
                    if let Err(err) = self.orchestrator.arm(self.plan.clone()) {
                        tracing::warn!(%err, "wave plan rejected; defense runs without waves");
                    }
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ForceNextWave => {
                if self.phase == GamePhase::Active {
                    self.orchestrator.force_next_wave();
                }
            }
            PlayerCommand::Place {
                archetype,
                position,
            } => {
                if self.phase == GamePhase::Active {
                    if let Err(err) = systems::placement::try_place(
                        &self.world,
                        &self.grid,
                        &mut self.recruitment,
                        &mut self.pending_builds,
                        archetype,
                        position,
                    ) {
                        tracing::debug!(%err, ?archetype, "placement rejected");
                    }
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Spatial index rebuild
        self.grid.rebuild(&self.world);
        // 2. Target validation + acquisition
        systems::targeting::run(&mut self.world, &self.grid, &mut self.query_scratch);
        // 3. Combat FSM, strikes, damage resolution
        systems::combat::run(
            &mut self.world,
            self.time.tick,
            &mut self.events,
            &mut self.removals,
        );
        // 4. Objective seeking for idle enemies
        systems::objective::run(&mut self.world, self.time.tick);
        // 5. Kinematic integration
        systems::movement::run(&mut self.world);
        // 6. Placement build timers
        systems::placement::run_builds(&mut self.world, &mut self.pending_builds, &mut self.events);
        // 7. Factory production
        systems::production::run(
            &mut self.world,
            &mut self.recruitment,
            &mut self.rng,
            &mut self.events,
        );
        // 8. Wave orchestration, fed this tick's death and destruction signals
        let enemy_deaths = self
            .events
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    SimEvent::UnitDied {
                        team: Team::Enemy,
                        ..
                    }
                )
            })
            .count();
        for _ in 0..enemy_deaths {
            self.orchestrator.note_enemy_death();
        }
        if self
            .events
            .iter()
            .any(|event| matches!(event, SimEvent::ObjectiveDestroyed))
        {
            self.orchestrator.abort();
        }
        self.orchestrator.run(
            &mut self.world,
            &mut self.rng,
            self.time.tick,
            &mut self.events,
        );
        // 9. Scheduled removals
        systems::lifecycle::run(
            &mut self.world,
            &mut self.removals,
            self.time.tick,
            &mut self.despawn_buffer,
        );
        // 10. Session outcome
        self.check_outcome();
    }

    /// Terminal transitions: objective lost means defeat, all waves cleared
    /// means victory. `GameOver` is emitted exactly once.
    fn check_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if self
            .events
            .iter()
            .any(|event| matches!(event, SimEvent::ObjectiveDestroyed))
        {
            self.outcome = Some(SessionOutcome::Defeat);
        } else if self
            .events
            .iter()
            .any(|event| matches!(event, SimEvent::AllWavesComplete))
        {
            self.outcome = Some(SessionOutcome::Victory);
        }
        if let Some(outcome) = self.outcome {
            self.phase = GamePhase::Ended;
            self.events.push(SimEvent::GameOver { outcome });
            tracing::info!(?outcome, tick = self.time.tick, "session ended");
        }
    }
}
