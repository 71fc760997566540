#![warn(clippy::all)]

use anyhow::{Context, Result};
use clap::Parser;
use std::{sync::atomic::AtomicBool, time::Duration};
use torus_life::{Config, Simulation, Strategy};

/// Run Conway's Game of Life on a toroidal grid and print the result.
#[derive(Parser)]
#[command(name = "torus_life", version)]
struct Args {
    /// Grid side length in cells.
    #[arg(long, default_value_t = Config::SIZE)]
    size: usize,

    /// Canvas side length in pixels, used to report the cell scale.
    #[arg(long, default_value_t = Config::CANVAS_SIZE)]
    canvas: u32,

    /// Number of generations to run.
    #[arg(short, long, default_value_t = 100)]
    generations: u64,

    /// Milliseconds between generations.
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    /// Random seed; drawn from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of a cell starting live.
    #[arg(long, default_value_t = 0.5)]
    fill_rate: f64,

    /// Start from an all-dead grid.
    #[arg(long)]
    blank: bool,

    /// Compute generations on all cores.
    #[arg(long)]
    parallel: bool,

    /// Print only the population, not the grid.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Config {
        let strategy = if self.parallel || self.size >= Config::PARALLEL_THRESHOLD {
            Strategy::Parallel
        } else {
            Strategy::Sequential
        };
        Config {
            size: self.size,
            canvas_size: self.canvas,
            tick_interval: Duration::from_millis(self.interval_ms),
            seed: self.seed,
            fill_rate: self.fill_rate,
            blank: self.blank,
            strategy,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();

    let viewport = config.viewport().context("invalid canvas")?;
    log::info!(
        "{0}x{0} torus, {1:.2} px per cell, {2:?} stepping",
        config.size,
        viewport.scale(),
        config.strategy
    );

    let mut simulation = Simulation::from_config(&config).context("invalid configuration")?;
    log::info!("initial population {}", simulation.grid().population());

    let cancel = AtomicBool::new(false);
    simulation.start();
    simulation.run(Some(args.generations), &cancel);
    simulation.stop();

    if !args.quiet {
        print!("{}", simulation.grid());
    }
    println!(
        "generation {}, population {}",
        simulation.generation(),
        simulation.grid().population()
    );
    Ok(())
}
