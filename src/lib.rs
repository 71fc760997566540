mod config;
mod error;
mod grid;
mod simulation;
mod utils;
mod viewport;

pub use config::Config;
pub use error::{ConfigError, GridError};
pub use grid::{next_state, Grid, Seed, Strategy};
pub use simulation::Simulation;
pub use utils::TickLimiter;
pub use viewport::Viewport;
