//! Snapshot system: queries the range world and builds a `RangeSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use hitscan_core::components::{Health, Position, Target};
use hitscan_core::events::PresentationEvent;
use hitscan_core::state::*;
use hitscan_core::types::SimTime;

use crate::engine::ScoreState;

/// Build a complete RangeSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    weapon: WeaponSnapshot,
    trigger_held: bool,
    events: Vec<PresentationEvent>,
    score: &ScoreState,
) -> RangeSnapshot {
    RangeSnapshot {
        time: *time,
        weapon,
        trigger_held,
        targets: build_targets(world),
        events,
        score: ScoreView {
            shots_fired: score.shots_fired,
            hits: score.hits,
            targets_destroyed: score.targets_destroyed,
            reloads: score.reloads,
        },
    }
}

/// Build TargetView list from all live targets, ordered by target number.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Position, &Health)>()
        .iter()
        .map(|(_, (target, pos, health))| TargetView {
            number: target.number,
            position: pos.0,
            health: health.current,
            max_health: health.max,
            last_impact: health.last_impact.map(|impact| impact.point),
        })
        .collect();

    targets.sort_by_key(|t| t.number);
    targets
}
