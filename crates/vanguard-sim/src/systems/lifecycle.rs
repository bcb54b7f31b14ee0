//! Scheduled entity removal.
//!
//! Deaths and objective destruction do not despawn immediately: corpses
//! linger so frontends can play out removal, then a scheduled task despawns
//! them. Stale tasks (entity already gone) are silently dropped.

use hecs::{Entity, World};

use vanguard_core::constants::TICK_RATE;

struct Removal {
    entity: Entity,
    at_tick: u64,
}

/// Pending despawns, ordered by insertion.
#[derive(Default)]
pub struct RemovalQueue {
    tasks: Vec<Removal>,
}

impl RemovalQueue {
    /// Schedule `entity` for despawn at `at_tick`.
    pub fn schedule(&mut self, entity: Entity, at_tick: u64) {
        self.tasks.push(Removal { entity, at_tick });
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Convert a duration to whole ticks, rounding up.
pub fn secs_to_ticks(secs: f32) -> u64 {
    (secs * TICK_RATE as f32).ceil() as u64
}

/// Despawn every entity whose removal tick has arrived.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    queue: &mut RemovalQueue,
    current_tick: u64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    queue.tasks.retain(|task| {
        if task.at_tick <= current_tick {
            despawn_buffer.push(task.entity);
            false
        } else {
            true
        }
    });
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
