//! Cleanup system: removes range targets that have been shot down.

use hecs::{Entity, World};

use hitscan_core::components::{Health, Target};

/// Despawn every target whose health has run out. Returns how many were removed.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> u32 {
    despawn_buffer.clear();

    for (entity, (health, _target)) in world.query_mut::<(&Health, &Target)>() {
        if health.is_dead() {
            despawn_buffer.push(entity);
        }
    }

    let mut removed = 0;
    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            removed += 1;
        }
    }
    removed
}
