//! Core types and definitions for the hitscan weapon simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! weapon configuration, components, commands, presentation events,
//! snapshots and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

pub use glam::DVec3;
