//! Per-cell interaction energy.

use crate::{NeighborWindow, SpinGrid};

/// Energy of every cell, same shape as the grid it was computed from.
#[derive(Clone, Debug, PartialEq)]
pub struct EnergyField {
    rows:   usize,
    cols:   usize,
    values: Vec<f64>,
}

impl EnergyField {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Mean cell energy.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}

/// Compute `E = -j · spinSum · S - h · S` for every cell.
///
/// `spinSum` is the correlation of the grid with `window` at "same" output
/// size with zero padding: cells on the border simply see fewer neighbours
/// (no wrap-around).  The window is not flipped.
///
/// Pure function; with the `parallel` feature rows are evaluated on Rayon.
pub fn neighbor_energy(grid: &SpinGrid, j: f64, h: f64, window: &NeighborWindow) -> EnergyField {
    let (rows, cols) = (grid.rows(), grid.cols());
    let taps: Vec<(isize, isize, f64)> = window.taps().collect();
    let mut values = vec![0.0f64; rows * cols];

    let fill_row = |r: usize, out: &mut [f64]| {
        for (c, e) in out.iter_mut().enumerate() {
            let s = grid.get(r, c) as f64;
            let spin_sum = spin_sum(grid, r, c, &taps);
            *e = -j * spin_sum * s - h * s;
        }
    };

    #[cfg(not(feature = "parallel"))]
    {
        values
            .chunks_mut(cols)
            .enumerate()
            .for_each(|(r, out)| fill_row(r, out));
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        values
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(r, out)| fill_row(r, out));
    }

    EnergyField { rows, cols, values }
}

/// Weighted sum of the spins under the window centred on `(r, c)`.
#[inline]
fn spin_sum(grid: &SpinGrid, r: usize, c: usize, taps: &[(isize, isize, f64)]) -> f64 {
    taps.iter()
        .filter_map(|&(dr, dc, w)| {
            grid.get_padded(r as isize + dr, c as isize + dc)
                .map(|s| w * s as f64)
        })
        .sum()
}
