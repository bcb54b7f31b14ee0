//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Velocity intent is written by the combat FSM and the objective seeker;
//! dead units carry zero velocity, so no state check is needed here.

use hecs::World;

use vanguard_core::constants::DT;
use vanguard_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (position, velocity)) in world.query_mut::<(&mut Position, &Velocity)>() {
        position.0 += velocity.0 * DT;
    }
}
