mod tick_limit;

pub use tick_limit::TickLimiter;
