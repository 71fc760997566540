use crate::GridError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Policy for filling a grid on creation or reseeding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Seed {
    /// Every cell dead.
    #[default]
    Blank,
    /// Every cell independently live with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    Random { seed: Option<u64>, fill_rate: f64 },
}

impl Seed {
    pub const UNIFORM_FILL_RATE: f64 = 0.5;

    /// Fair coin per cell.
    pub fn uniform(seed: Option<u64>) -> Self {
        Self::Random {
            seed,
            fill_rate: Self::UNIFORM_FILL_RATE,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), GridError> {
        match *self {
            Self::Blank => Ok(()),
            Self::Random { fill_rate, .. } => check_fill_rate(fill_rate),
        }
    }

    /// Writes the policy into `cells` in row-major order.
    pub(crate) fn fill(&self, cells: &mut [bool]) -> Result<(), GridError> {
        match *self {
            Self::Blank => cells.fill(false),
            Self::Random { seed, fill_rate } => {
                let mut rng = if let Some(x) = seed {
                    ChaCha8Rng::seed_from_u64(x)
                } else {
                    ChaCha8Rng::from_entropy()
                };
                fill_random(cells, &mut rng, fill_rate)?;
            }
        }
        Ok(())
    }
}

pub(crate) fn check_fill_rate(fill_rate: f64) -> Result<(), GridError> {
    if (0.0..=1.0).contains(&fill_rate) {
        Ok(())
    } else {
        Err(GridError::InvalidFillRate(fill_rate))
    }
}

pub(crate) fn fill_random<R: Rng + ?Sized>(
    cells: &mut [bool],
    rng: &mut R,
    fill_rate: f64,
) -> Result<(), GridError> {
    check_fill_rate(fill_rate)?;
    for cell in cells.iter_mut() {
        *cell = rng.gen_bool(fill_rate);
    }
    Ok(())
}
