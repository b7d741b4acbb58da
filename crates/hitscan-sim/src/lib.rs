//! Weapon simulation for the hitscan range.
//!
//! The `WeaponController` owns one weapon's firing, ammunition and reload
//! logic. The world and presentation reach it only through the `HitResolver`,
//! `DamageSink` and `Presentation` seams. `RangeEngine` drives a weapon
//! against a hecs firing-range world at a fixed tick rate.

pub mod engine;
pub mod hit;
pub mod presentation;
pub mod scheduler;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use engine::RangeEngine;
pub use hitscan_core as core;
pub use weapon::WeaponController;
