use crate::{ConfigError, Grid, Seed, Strategy, Viewport};
use std::time::Duration;

/// Startup parameters of a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Grid side length in cells.
    pub size: usize,
    /// Canvas side length in pixels.
    pub canvas_size: u32,
    pub tick_interval: Duration,
    /// `None` draws a seed from entropy.
    pub seed: Option<u64>,
    pub fill_rate: f64,
    /// Start from an all-dead grid instead of a random one.
    pub blank: bool,
    pub strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: Self::SIZE,
            canvas_size: Self::CANVAS_SIZE,
            tick_interval: Self::TICK_INTERVAL,
            seed: None,
            fill_rate: Seed::UNIFORM_FILL_RATE,
            blank: false,
            strategy: Strategy::Sequential,
        }
    }
}

impl Config {
    pub const SIZE: usize = 100;
    pub const CANVAS_SIZE: u32 = 800;
    pub const TICK_INTERVAL: Duration = Duration::from_millis(17);

    /// Rows per grid above which the CLI switches to the parallel stepper.
    pub const PARALLEL_THRESHOLD: usize = 512;

    pub fn validate(&self) -> Result<(), ConfigError> {
        Viewport::new(self.canvas_size, self.size)?;
        self.seed_policy().validate()?;
        Ok(())
    }

    pub fn seed_policy(&self) -> Seed {
        if self.blank {
            Seed::Blank
        } else {
            Seed::Random {
                seed: self.seed,
                fill_rate: self.fill_rate,
            }
        }
    }

    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        self.validate()?;
        Ok(Grid::new(self.size, self.seed_policy())?)
    }

    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        Viewport::new(self.canvas_size, self.size)
    }
}
