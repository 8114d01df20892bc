//! Headless aquarium run: the full facade against an in-memory surface.
//!
//! ```text
//! headless [TICKS] [SEED]          defaults: 3600 ticks, seed 42
//! RUST_LOG=debug headless 600      log every meal and expiry
//! ```
//!
//! A feeder drops a pinch of food every two simulated seconds at a spot
//! chosen from the run's seed, and a fish is added every ten.

use std::time::Instant;

use anyhow::{Context, Result, ensure};
use aq_core::{AqError, AqResult, AquariumConfig, SimRng};
use aq_render::RecordingSurface;
use aquarium::{Aquarium, SurfaceHost};

const WIDTH: f64 = 1280.0;
const HEIGHT: f64 = 720.0;

/// Ticks between feedings at 60 ticks per simulated second.
const FEED_EVERY: u64 = 120;
const PINCH: usize = 5;
const STOCK_EVERY: u64 = 600;

/// Hands out a fresh recording surface for the one tank it knows.
struct HeadlessHost;

impl SurfaceHost for HeadlessHost {
    type Surface = RecordingSurface;

    fn acquire(&mut self, surface_id: &str) -> AqResult<RecordingSurface> {
        if surface_id != "tank" {
            return Err(AqError::SurfaceNotFound(surface_id.to_owned()));
        }
        Ok(RecordingSurface::new(WIDTH, HEIGHT))
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn parse_args() -> Result<(u64, u64)> {
    let mut args = std::env::args().skip(1);
    let ticks = match args.next() {
        Some(arg) => arg.parse().with_context(|| format!("TICKS must be a number, got {arg:?}"))?,
        None => 3_600,
    };
    let seed = match args.next() {
        Some(arg) => arg.parse().with_context(|| format!("SEED must be a number, got {arg:?}"))?,
        None => 42,
    };
    ensure!(ticks > 0, "TICKS must be positive");
    Ok((ticks, seed))
}

fn main() -> Result<()> {
    init_tracing();
    let (ticks, seed) = parse_args()?;

    let config = AquariumConfig { seed: Some(seed), ..AquariumConfig::default() };
    let mut tank = Aquarium::create(HeadlessHost, config, "tank").context("binding the tank")?;
    let mut feeder = SimRng::new(seed).child(99);

    let (mut meals, mut expired, mut skipped, mut draw_ops) = (0usize, 0usize, 0usize, 0usize);
    let started = Instant::now();

    for t in 1..=ticks {
        if t % FEED_EVERY == 0 {
            let x = feeder.gen_range(0.0..WIDTH);
            let y = feeder.gen_range(0.0..HEIGHT * 0.5);
            for _ in 0..PINCH {
                let dx = feeder.gen_range(-15.0..15.0);
                let dy = feeder.gen_range(-15.0..15.0);
                tank.add_food(x + dx, y + dy)?;
            }
        }
        if t % STOCK_EVERY == 0 {
            tank.add_fish(feeder.gen_range(0.0..WIDTH), feeder.gen_range(0.0..HEIGHT))?;
        }

        let summary = tank.tick().context("tank unbound mid-run")?;
        meals += summary.sim.meals.len();
        expired += summary.sim.expired.len();
        skipped += summary.frame.skipped.len();
        if let Some(binding) = tank.binding_mut() {
            draw_ops += binding.surface_mut().take_ops().len();
        }

        if t % 600 == 0 {
            let store = tank.world().map(|w| w.store()).context("tank unbound mid-run")?;
            let mean_size = store.fish().iter().map(|f| f.size).sum::<f64>() / store.fish_count().max(1) as f64;
            tracing::info!(
                tick = t,
                fish = store.fish_count(),
                food = store.food_count(),
                meals,
                mean_size = %format_args!("{mean_size:.2}"),
                "progress"
            );
        }
    }

    let elapsed = started.elapsed();
    let fish = tank.world().map_or(0, |w| w.store().fish_count());
    tank.destroy();

    println!("ticks          {ticks}");
    println!("seed           {seed}");
    println!("fish           {fish}");
    println!("meals          {meals}");
    println!("food expired   {expired}");
    println!("draw calls     {draw_ops}");
    println!("draws skipped  {skipped}");
    println!(
        "wall time      {:.2?} ({:.1} µs/tick)",
        elapsed,
        elapsed.as_secs_f64() * 1e6 / ticks as f64
    );
    Ok(())
}
