use super::Grid;
use rayon::prelude::*;

impl Grid {
    /// Same result as [`Grid::step`], with output rows computed on the
    /// `rayon` pool. Workers share the input read-only and each writes its
    /// own rows, so no synchronization happens inside a step.
    pub fn step_parallel(&self) -> Grid {
        let mut next = vec![false; self.cells.len()];
        next.par_chunks_mut(self.n)
            .enumerate()
            .for_each(|(y, dst)| self.step_row(y, dst));
        Grid {
            cells: next,
            n: self.n,
        }
    }
}
