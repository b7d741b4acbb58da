//! Entity spawn factories for setting up the firing range.
//!
//! Creates range targets and cover with the appropriate component bundles.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use hitscan_core::components::*;
use hitscan_core::constants::*;

/// Set up a fresh range: `target_count` targets down range plus one barrier.
pub fn setup_range(world: &mut World, rng: &mut ChaCha8Rng, target_count: usize) {
    world.clear();
    spawn_barrier(
        world,
        DVec3::from_array(BARRIER_CENTER),
        DVec3::from_array(BARRIER_HALF_EXTENTS),
    );
    for number in 0..target_count as u32 {
        spawn_target(world, rng, number);
    }
}

/// Spawn a target at a random bearing and distance inside the firing cone.
pub fn spawn_target(world: &mut World, rng: &mut ChaCha8Rng, number: u32) -> hecs::Entity {
    // Bearing is measured from North (y-axis) clockwise toward East (x-axis).
    let bearing: f64 = rng.gen_range(-TARGET_SPREAD_HALF_ANGLE..TARGET_SPREAD_HALF_ANGLE);
    let distance: f64 = rng.gen_range(TARGET_MIN_DISTANCE..TARGET_MAX_DISTANCE);
    let height: f64 = rng.gen_range(TARGET_MIN_HEIGHT..TARGET_MAX_HEIGHT);

    let position = DVec3::new(distance * bearing.sin(), distance * bearing.cos(), height);
    spawn_target_at(world, number, position)
}

/// Spawn a spherical target with full health at `position`.
pub fn spawn_target_at(world: &mut World, number: u32, position: DVec3) -> hecs::Entity {
    world.spawn((
        Target { number },
        Position(position),
        Collider::Sphere {
            radius: TARGET_RADIUS,
        },
        Health::new(TARGET_HEALTH),
    ))
}

/// Spawn indestructible box cover. It stops shots but has no health.
pub fn spawn_barrier(world: &mut World, center: DVec3, half_extents: DVec3) -> hecs::Entity {
    world.spawn((Barrier, Position(center), Collider::Box { half_extents }))
}
