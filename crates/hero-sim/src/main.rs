//! Hero Orbit Simulator
//!
//! Headless driver: steps the hero engine at a fixed 60Hz timestep for a
//! simulated duration, logs committed track swaps, and prints the final
//! render state as JSON.
//!
//! Usage: `hero-sim [config.json] [seconds]`
//! Without arguments it runs the wide four-ring layout for 120 simulated
//! seconds (the classic three-ring layout is saturated and never swaps).

use std::{env, fs};

use hero_core::{HERO_DT, HeroConfig, HeroEngine, HeroStore, MarkerSnapshot, RingSnapshot};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Serialize)]
struct FinalState {
    simulated_seconds: f32,
    swaps_committed: usize,
    rings: Vec<RingSnapshot>,
    markers: Vec<MarkerSnapshot>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            tracing::info!(path, "loading configuration");
            HeroConfig::from_json(&fs::read_to_string(&path)?)?
        }
        None => HeroConfig::default_wide(),
    };
    let seconds: f32 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 120.0,
    };

    let mut engine = HeroEngine::new(config)?;
    let store = HeroStore::new();
    tracing::info!(
        rings = engine.tracks().len(),
        markers = engine.marker_count(),
        seconds = f64::from(seconds),
        "starting simulation"
    );

    let steps = (seconds / HERO_DT).round() as u64;
    let mut swaps = 0_usize;
    let mut elapsed = 0.0_f32;
    for _ in 0..steps {
        elapsed += HERO_DT;
        for event in engine.update(HERO_DT) {
            swaps += 1;
            tracing::info!(
                t = format!("{elapsed:.2}"),
                marker = event.marker,
                from = event.from,
                to = event.to,
                "track swap"
            );
        }
    }

    engine.publish(&store);
    let state = FinalState {
        simulated_seconds: elapsed,
        swaps_committed: swaps,
        rings: store.rings(),
        markers: store.markers(),
    };
    println!("{}", serde_json::to_string_pretty(&state)?);

    Ok(())
}
