use crate::{ConfigError, GridError};

/// Maps between canvas pixels and grid cells for a square canvas that
/// shows the whole grid.
///
/// Pixel `x` maps to the column and pixel `y` to the row, the same
/// orientation [`Viewport::cell_rect`] uses for drawing, so a painted cell
/// is drawn where it was clicked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    canvas_size: u32,
    side: usize,
}

impl Viewport {
    pub fn new(canvas_size: u32, side: usize) -> Result<Self, ConfigError> {
        if canvas_size == 0 {
            return Err(ConfigError::ZeroCanvas);
        }
        if side == 0 {
            return Err(GridError::InvalidSize(side).into());
        }
        Ok(Self { canvas_size, side })
    }

    /// Pixels per cell side.
    pub fn scale(&self) -> f64 {
        self.canvas_size as f64 / self.side as f64
    }

    /// Cell under the pointer, `None` when the pointer is off the canvas.
    pub fn cell_at(&self, px: f64, py: f64) -> Option<(i64, i64)> {
        Some((self.axis(px)?, self.axis(py)?))
    }

    fn axis(&self, p: f64) -> Option<i64> {
        let canvas = self.canvas_size as f64;
        if !(0.0..canvas).contains(&p) {
            return None;
        }
        let cell = (p / canvas * self.side as f64).floor() as i64;
        Some(cell.min(self.side as i64 - 1))
    }

    /// `[left, top, right, bottom]` of a cell in pixels.
    pub fn cell_rect(&self, x: i64, y: i64) -> [f64; 4] {
        let scale = self.scale();
        let (left, top) = (x as f64 * scale, y as f64 * scale);
        [left, top, left + scale, top + scale]
    }
}
