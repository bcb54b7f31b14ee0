//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or in
//! the small service structs the engine passes in.

pub mod combat;
pub mod lifecycle;
pub mod movement;
pub mod objective;
pub mod placement;
pub mod production;
pub mod snapshot;
pub mod spatial;
pub mod targeting;
pub mod wave;
