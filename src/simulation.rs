use crate::{utils::TickLimiter, Config, ConfigError, Grid, GridError, Seed, Strategy};
use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

/// Run-loop driver around a [`Grid`].
///
/// The grid itself knows nothing about running or pausing; this type owns
/// the running flag, the tick cadence and the generation counter, and swaps
/// in each successor produced by the grid.
pub struct Simulation {
    grid: Grid,
    is_running: bool,          // Whether `tick` advances the grid.
    generation: u64,           // Generations since the last reseed.
    strategy: Strategy,        // Sequential or parallel stepping.
    last_step_duration: f64,   // Duration of the last step in seconds.
    tick_limiter: TickLimiter, // Paces `run` to the tick interval.
}

impl Simulation {
    pub fn new(grid: Grid, tick_interval: Duration, strategy: Strategy) -> Self {
        Self {
            grid,
            is_running: false,
            generation: 0,
            strategy,
            last_step_duration: 0.,
            tick_limiter: TickLimiter::new(tick_interval),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let grid = config.build_grid()?;
        Ok(Self::new(grid, config.tick_interval, config.strategy))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn last_step_duration(&self) -> f64 {
        self.last_step_duration
    }

    pub fn ticks_per_second(&self) -> f64 {
        self.tick_limiter.ticks_per_second()
    }

    pub fn start(&mut self) {
        if !self.is_running {
            log::info!("simulation started at generation {}", self.generation);
        }
        self.is_running = true;
    }

    pub fn stop(&mut self) {
        if self.is_running {
            log::info!("simulation stopped at generation {}", self.generation);
        }
        self.is_running = false;
    }

    pub fn toggle(&mut self) {
        if self.is_running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Advances one generation if running. Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        self.step_once();
        true
    }

    /// Advances one generation regardless of the running flag.
    pub fn step_once(&mut self) {
        let timer = Instant::now();
        self.grid = self.grid.step_with(self.strategy);
        self.last_step_duration = timer.elapsed().as_secs_f64();
        self.generation += 1;
        log::debug!(
            "generation {}: population {}, step {:.3} ms",
            self.generation,
            self.grid.population(),
            self.last_step_duration * 1e3
        );
    }

    /// Sets a cell live, as a click on the canvas does.
    pub fn paint(&mut self, x: i64, y: i64) {
        self.grid.set_cell(x, y, true);
    }

    /// Refills the grid and restarts the generation count.
    pub fn randomize(&mut self, seed: Seed) -> Result<(), GridError> {
        self.grid.reseed(seed)?;
        self.generation = 0;
        log::info!(
            "grid reseeded ({:?}), population {}",
            seed,
            self.grid.population()
        );
        Ok(())
    }

    /// Stops the run and clears the grid.
    pub fn reset(&mut self) {
        self.stop();
        self.grid.clear();
        self.generation = 0;
        log::info!("grid cleared");
    }

    /// Steps at the tick cadence while running, until `cancel` is set or
    /// `max_generations` more generations have been computed.
    ///
    /// Both conditions are checked before each step; a step in progress always
    /// completes. Returns the number of generations advanced.
    pub fn run(&mut self, max_generations: Option<u64>, cancel: &AtomicBool) -> u64 {
        let mut advanced = 0;
        while self.is_running && max_generations.map_or(true, |max| advanced < max) {
            self.tick_limiter.delay();
            if cancel.load(Ordering::Relaxed) || !self.tick() {
                break;
            }
            advanced += 1;
        }
        log::info!(
            "run finished after {} generations, population {}",
            advanced,
            self.grid.population()
        );
        advanced
    }
}
