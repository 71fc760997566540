mod parallel;
mod rule;
mod seed;

#[cfg(test)]
mod tests;

pub use rule::next_state;
pub use seed::Seed;

use crate::GridError;
use rand::Rng;

/// How [`Grid::step_with`] computes the next generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// One thread, row by row.
    #[default]
    Sequential,
    /// Output rows split across the `rayon` thread pool.
    Parallel,
}

/// Square Game of Life field with edges stitched together (torus).
///
/// Cells are stored row-major: `x` is the column, `y` is the row.
/// Every coordinate taken by the public API wraps modulo the side length,
/// so there is no out-of-range access.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<bool>,
    n: usize,
}

impl Grid {
    /// Create a `size x size` field filled according to `seed`.
    pub fn new(size: usize, seed: Seed) -> Result<Self, GridError> {
        seed.validate()?;
        let mut grid = Self::blank(size)?;
        seed.fill(&mut grid.cells)?;
        Ok(grid)
    }

    pub fn blank(size: usize) -> Result<Self, GridError> {
        let len = Self::cell_count(size)?;
        Ok(Self {
            cells: vec![false; len],
            n: size,
        })
    }

    /// Create a field where every cell is live with probability 1/2.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(size: usize, seed: Option<u64>) -> Result<Self, GridError> {
        Self::new(size, Seed::uniform(seed))
    }

    /// Create a field from row-major cells.
    pub fn from_cells(size: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        let expected = Self::cell_count(size)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { cells, n: size })
    }

    /// Parse a picture of the field, one string per row.
    ///
    /// `#`, `O` and `*` are live; `.`, `_` and space are dead.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(Self::cell_count(n)?);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != n {
                return Err(GridError::NotSquare { rows: n, row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                cells.push(match ch {
                    '#' | 'O' | '*' => true,
                    '.' | '_' | ' ' => false,
                    _ => return Err(GridError::InvalidCell { row, col, ch }),
                });
            }
        }
        Ok(Self { cells, n })
    }

    fn cell_count(size: usize) -> Result<usize, GridError> {
        match size.checked_mul(size) {
            Some(len) if size >= 1 => Ok(len),
            _ => Err(GridError::InvalidSize(size)),
        }
    }

    pub fn side_length(&self) -> usize {
        self.n
    }

    #[inline]
    fn wrap(&self, v: i64) -> usize {
        v.rem_euclid(self.n as i64) as usize
    }

    #[inline]
    fn idx(&self, x: i64, y: i64) -> usize {
        self.wrap(x) + self.wrap(y) * self.n
    }

    pub fn get_cell(&self, x: i64, y: i64) -> bool {
        self.cells[self.idx(x, y)]
    }

    pub fn set_cell(&mut self, x: i64, y: i64, state: bool) {
        let i = self.idx(x, y);
        self.cells[i] = state;
    }

    /// Number of live cells among the eight around `(x, y)`, in `0..=8`.
    ///
    /// On fields with side 1 or 2 several offsets land on the same cell;
    /// each offset is counted.
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> u8 {
        self.count_neibs(self.wrap(x), self.wrap(y))
    }

    fn count_neibs(&self, x: usize, y: usize) -> u8 {
        let n = self.n;
        let x1 = if x == 0 { n - 1 } else { x - 1 };
        let x2 = if x == n - 1 { 0 } else { x + 1 };
        let (r0, r1, r2) = (
            (if y == 0 { n - 1 } else { y - 1 }) * n,
            y * n,
            (if y == n - 1 { 0 } else { y + 1 }) * n,
        );
        let c = &self.cells;
        c[x1 + r0] as u8
            + c[x + r0] as u8
            + c[x2 + r0] as u8
            + c[x1 + r1] as u8
            + c[x2 + r1] as u8
            + c[x1 + r2] as u8
            + c[x + r2] as u8
            + c[x2 + r2] as u8
    }

    /// Fills `dst` with row `y` of the next generation.
    fn step_row(&self, y: usize, dst: &mut [bool]) {
        let row = &self.cells[y * self.n..(y + 1) * self.n];
        for (x, (next, &alive)) in dst.iter_mut().zip(row).enumerate() {
            *next = next_state(alive, self.count_neibs(x, y));
        }
    }

    /// Returns the next generation. `self` is left untouched.
    pub fn step(&self) -> Grid {
        let mut next = vec![false; self.cells.len()];
        for (y, dst) in next.chunks_exact_mut(self.n).enumerate() {
            self.step_row(y, dst);
        }
        Grid {
            cells: next,
            n: self.n,
        }
    }

    pub fn step_with(&self, strategy: Strategy) -> Grid {
        match strategy {
            Strategy::Sequential => self.step(),
            Strategy::Parallel => self.step_parallel(),
        }
    }

    /// Replaces the field with its `generations`-th successor.
    pub fn advance(&mut self, generations: u64, strategy: Strategy) {
        for _ in 0..generations {
            *self = self.step_with(strategy);
        }
    }

    /// Refills every cell according to `seed`; the size is kept.
    pub fn reseed(&mut self, seed: Seed) -> Result<(), GridError> {
        seed.validate()?;
        seed.fill(&mut self.cells)
    }

    /// Refills every cell from a caller-supplied random source.
    pub fn reseed_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fill_rate: f64,
    ) -> Result<(), GridError> {
        seed::fill_random(&mut self.cells, rng, fill_rate)
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates `(x, y)` of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.n;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(move |(i, _)| (i % n, i / n))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks_exact(self.n) {
            for &c in row {
                f.write_str(if c { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
