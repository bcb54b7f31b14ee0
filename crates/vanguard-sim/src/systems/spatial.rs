//! Uniform-grid spatial index for proximity queries.
//!
//! Rebuilt from scratch each tick before targeting runs. Queries return
//! exact matches (positions are stored alongside entities, so the distance
//! check happens here), but make no ordering guarantee and no team or
//! liveness guarantee — callers re-filter.

use std::collections::HashMap;

use glam::Vec2;
use hecs::{Entity, World};

use vanguard_core::constants::SPATIAL_CELL_SIZE;
use vanguard_core::types::Position;

/// Radius queries over the simulation's entities.
pub trait SpatialQuery {
    /// Append every entity within `radius` of `position` to `out`.
    /// `out` is cleared first.
    fn query_radius(&self, position: Vec2, radius: f32, out: &mut Vec<Entity>);
}

/// Uniform grid over 2D space. Buckets keep their allocations across rebuilds.
pub struct UniformGrid {
    cell_size: f32,
    cells: HashMap<(i32, i32), Vec<(Entity, Vec2)>>,
}

impl Default for UniformGrid {
    fn default() -> Self {
        Self::new(SPATIAL_CELL_SIZE)
    }
}

impl UniformGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    /// Re-index every positioned entity in the world.
    pub fn rebuild(&mut self, world: &World) {
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
        for (entity, position) in world.query::<&Position>().iter() {
            let coords = self.cell_coords(position.0);
            self.cells.entry(coords).or_default().push((entity, position.0));
        }
    }

    fn cell_coords(&self, position: Vec2) -> (i32, i32) {
        (
            (position.x / self.cell_size).floor() as i32,
            (position.y / self.cell_size).floor() as i32,
        )
    }
}

impl SpatialQuery for UniformGrid {
    fn query_radius(&self, position: Vec2, radius: f32, out: &mut Vec<Entity>) {
        out.clear();
        let min = self.cell_coords(position - Vec2::splat(radius));
        let max = self.cell_coords(position + Vec2::splat(radius));
        let radius_sq = radius * radius;
        for x in min.0..=max.0 {
            for y in min.1..=max.1 {
                if let Some(bucket) = self.cells.get(&(x, y)) {
                    for &(entity, entity_pos) in bucket {
                        if position.distance_squared(entity_pos) <= radius_sq {
                            out.push(entity);
                        }
                    }
                }
            }
        }
    }
}
