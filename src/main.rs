//! Headless simulation runner.
//!
//! Drives a world for a fixed number of ticks, logging aggregate stats along
//! the way and saving the final state to a timestamped JSON file. Usage:
//!
//! ```text
//! microevo [TICKS] [SEED]
//! ```

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use microevo::simulation::params::Params;
use microevo::simulation::world::World;

const DEFAULT_TICKS: u64 = 2000;
const REPORT_INTERVAL: u64 = 100;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let ticks = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(DEFAULT_TICKS);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);

    if let Err(err) = run(ticks, seed) {
        error!(%err, "simulation failed");
        std::process::exit(1);
    }
}

fn run(ticks: u64, seed: u64) -> Result<(), microevo::simulation::error::SimulationError> {
    let params = Params {
        seed,
        ..Params::default()
    };
    let mut world = World::new(params)?;

    info!(ticks, seed, "starting simulation");

    let mut last = None;
    for _ in 0..ticks {
        let snapshot = world.tick()?;
        if snapshot.tick % REPORT_INTERVAL == 0 {
            info!(
                tick = snapshot.tick,
                season = snapshot.season.name(),
                population = snapshot.population,
                births = snapshot.births,
                deaths = snapshot.deaths,
                food = snapshot.food_count,
                avg_speed = snapshot.averages.speed,
                avg_size = snapshot.averages.size,
                government = ?snapshot.dominant_government,
                "progress"
            );
        }
        if snapshot.population == 0 {
            info!(tick = snapshot.tick, "population extinct, stopping early");
            last = Some(snapshot);
            break;
        }
        last = Some(snapshot);
    }

    if let Some(snapshot) = last {
        info!(
            population = snapshot.population,
            births = snapshot.births,
            deaths = snapshot.deaths,
            "simulation finished"
        );
    }

    let path = format!(
        "microevo_{}.json",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    world.save_to_file(&path)?;
    info!(%path, "world state saved");

    Ok(())
}
