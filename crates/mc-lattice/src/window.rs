//! Neighbour weighting window.

use mc_core::{McError, McResult};

/// Odd-sized weight matrix correlated against the spin grid.
///
/// The centre of the window sits on the cell being evaluated; weight
/// `w[a][b]` multiplies the spin at offset `(a - rows/2, b - cols/2)`.
#[derive(Clone, Debug, PartialEq)]
pub struct NeighborWindow {
    rows:    usize,
    cols:    usize,
    weights: Vec<f64>,
}

impl NeighborWindow {
    /// Build from row-major weights.  Both dimensions must be odd.
    pub fn new(rows: usize, cols: usize, weights: Vec<f64>) -> McResult<Self> {
        if rows % 2 == 0 || cols % 2 == 0 {
            return Err(McError::InvalidInput(format!(
                "neighbour window must be odd-sized, got {rows}x{cols}"
            )));
        }
        if weights.len() != rows * cols {
            return Err(McError::InvalidInput(format!(
                "window of {rows}x{cols} needs {} weights, got {}",
                rows * cols,
                weights.len()
            )));
        }
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(McError::InvalidInput("window weights must be finite".into()));
        }
        Ok(Self { rows, cols, weights })
    }

    /// Build from nested rows.
    pub fn from_rows(rows: &[&[f64]]) -> McResult<Self> {
        let n_cols = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != n_cols) {
            return Err(McError::InvalidInput("ragged window rows".into()));
        }
        Self::new(rows.len(), n_cols, rows.iter().flat_map(|r| r.iter().copied()).collect())
    }

    /// 8-neighbour Moore window with zero centre.
    pub fn moore() -> Self {
        Self {
            rows:    3,
            cols:    3,
            weights: vec![
                1.0, 1.0, 1.0,
                1.0, 0.0, 1.0,
                1.0, 1.0, 1.0,
            ],
        }
    }

    /// 4-neighbour von Neumann window with zero centre.
    pub fn von_neumann() -> Self {
        Self {
            rows:    3,
            cols:    3,
            weights: vec![
                0.0, 1.0, 0.0,
                1.0, 0.0, 1.0,
                0.0, 1.0, 0.0,
            ],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Iterator over non-zero `(d_row, d_col, weight)` taps.
    pub fn taps(&self) -> impl Iterator<Item = (isize, isize, f64)> + '_ {
        let (cr, cc) = ((self.rows / 2) as isize, (self.cols / 2) as isize);
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0.0)
            .map(move |(i, &w)| {
                let (a, b) = ((i / self.cols) as isize, (i % self.cols) as isize);
                (a - cr, b - cc, w)
            })
    }
}

impl Default for NeighborWindow {
    fn default() -> Self {
        Self::moore()
    }
}
