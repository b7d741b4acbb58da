//! firing-range: run a scripted session on a headless firing range.
//!
//! Usage:
//!   firing-range --seed 7 --ticks 600
//!   firing-range --config rifle.json --targets 8 --json

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use hitscan_core::commands::RangeCommand;
use hitscan_core::config::WeaponConfig;
use hitscan_core::constants::{DEFAULT_TARGET_COUNT, TICK_RATE};
use hitscan_core::enums::WeaponState;
use hitscan_core::state::RangeSnapshot;
use hitscan_sim::engine::{RangeEngine, SimConfig};

const DEFAULT_TICKS: u64 = 10 * TICK_RATE as u64;

#[derive(Debug)]
struct Options {
    config: Option<PathBuf>,
    seed: u64,
    ticks: u64,
    targets: usize,
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let options = parse_options(&args)?;
    let weapon = match &options.config {
        Some(path) => load_weapon_config(path)?,
        None => WeaponConfig::default(),
    };

    let mut engine = RangeEngine::new(SimConfig {
        seed: options.seed,
        weapon,
        target_count: options.targets,
    })
    .context("failed to set up the range")?;

    let snapshot = run_session(&mut engine, options.ticks);
    print_summary(&snapshot);

    if options.json {
        let json = serde_json::to_string_pretty(&snapshot).context("failed to encode snapshot")?;
        println!("{json}");
    }
    Ok(())
}

fn print_usage() {
    eprintln!(
        "firing-range: headless hitscan weapon session\n\
         \n\
         Holds the trigger for the whole session, reloading whenever the\n\
         magazine runs dry, then prints the score.\n\
         \n\
           --config <path>  Weapon config JSON (missing fields use defaults)\n\
           --seed <N>       Target placement seed (default: 42)\n\
           --ticks <N>      Ticks to run at {TICK_RATE} Hz (default: {DEFAULT_TICKS})\n\
           --targets <N>    Number of targets (default: {DEFAULT_TARGET_COUNT})\n\
           --json           Print the final snapshot as JSON\n"
    );
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut options = Options {
        config: None,
        seed: SimConfig::default().seed,
        ticks: DEFAULT_TICKS,
        targets: DEFAULT_TARGET_COUNT,
        json: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => options.config = Some(PathBuf::from(flag_value(&mut iter, arg)?)),
            "--seed" => options.seed = parse_number(&mut iter, arg)?,
            "--ticks" => options.ticks = parse_number(&mut iter, arg)?,
            "--targets" => options.targets = parse_number(&mut iter, arg)?,
            "--json" => options.json = true,
            other => bail!("unknown argument: {other} (try --help)"),
        }
    }
    Ok(options)
}

fn flag_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a str> {
    iter.next()
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn parse_number<'a, T>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = flag_value(iter, flag)?;
    value
        .parse()
        .with_context(|| format!("invalid value for {flag}: {value}"))
}

fn load_weapon_config(path: &PathBuf) -> Result<WeaponConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = WeaponConfig::from_json(&text)
        .with_context(|| format!("failed to load weapon config from {}", path.display()))?;
    log::info!("loaded weapon config from {}", path.display());
    Ok(config)
}

/// Hold the trigger for `ticks` ticks, reloading each time the magazine runs dry.
fn run_session(engine: &mut RangeEngine, ticks: u64) -> RangeSnapshot {
    engine.queue_command(RangeCommand::PullTrigger);

    let mut snapshot = engine.tick();
    for _ in 1..ticks {
        if snapshot.weapon.state == WeaponState::Empty {
            if snapshot.weapon.ammo_reserve == 0 {
                log::info!("out of ammunition at t={:.2}s", snapshot.time.elapsed_secs);
                break;
            }
            engine.queue_command(RangeCommand::Reload);
        }
        snapshot = engine.tick();
    }
    snapshot
}

fn print_summary(snapshot: &RangeSnapshot) {
    let score = &snapshot.score;
    let accuracy = if score.shots_fired > 0 {
        100.0 * f64::from(score.hits) / f64::from(score.shots_fired)
    } else {
        0.0
    };

    println!("session: {:.2}s ({} ticks)", snapshot.time.elapsed_secs, snapshot.time.tick);
    println!(
        "shots: {}  hits: {}  accuracy: {accuracy:.1}%",
        score.shots_fired, score.hits
    );
    println!(
        "targets destroyed: {}  remaining: {}",
        score.targets_destroyed,
        snapshot.targets.len()
    );
    println!(
        "weapon: {:?}, {}/{} rounds, {} in reserve, {} reload(s)",
        snapshot.weapon.state,
        snapshot.weapon.magazine_ammo,
        snapshot.weapon.magazine_capacity,
        snapshot.weapon.ammo_reserve,
        score.reloads
    );
}
