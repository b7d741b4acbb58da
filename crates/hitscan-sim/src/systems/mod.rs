//! Systems that operate on the firing-range world.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod cleanup;
pub mod hit_scan;
pub mod snapshot;
