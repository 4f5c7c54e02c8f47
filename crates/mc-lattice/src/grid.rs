//! `SpinGrid`: a rectangular lattice of ±1 spins.

use std::fmt;

use mc_core::{McError, McResult, SimRng};

/// H×W spins stored row-major as `i8` (+1 up, −1 down).
///
/// The grid has no identity beyond cell position; it is created once per run
/// and mutated in place by every sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinGrid {
    rows:  usize,
    cols:  usize,
    spins: Vec<i8>,
}

impl SpinGrid {
    /// Every cell set to `spin`.
    pub fn filled(rows: usize, cols: usize, spin: i8) -> McResult<Self> {
        check_shape(rows, cols)?;
        check_spin(spin)?;
        Ok(Self { rows, cols, spins: vec![spin; rows * cols] })
    }

    /// Wrap a row-major spin vector of length `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, spins: Vec<i8>) -> McResult<Self> {
        check_shape(rows, cols)?;
        if spins.len() != rows * cols {
            return Err(McError::InvalidInput(format!(
                "expected {} spins for a {rows}x{cols} grid, got {}",
                rows * cols,
                spins.len()
            )));
        }
        for &s in &spins {
            check_spin(s)?;
        }
        Ok(Self { rows, cols, spins })
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<i8>>) -> McResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != n_cols) {
            return Err(McError::InvalidInput("ragged spin rows".into()));
        }
        Self::from_vec(n_rows, n_cols, rows.into_iter().flatten().collect())
    }

    /// Alternating +1/−1 pattern with `+1` at the origin.
    pub fn checkerboard(rows: usize, cols: usize) -> McResult<Self> {
        check_shape(rows, cols)?;
        let spins = (0..rows * cols)
            .map(|i| if (i / cols + i % cols) % 2 == 0 { 1 } else { -1 })
            .collect();
        Ok(Self { rows, cols, spins })
    }

    /// Draw every cell independently: +1 with probability `p_up`, else −1.
    ///
    /// Cells are drawn in row-major order.
    pub fn random(rows: usize, cols: usize, p_up: f64, rng: &mut SimRng) -> McResult<Self> {
        check_shape(rows, cols)?;
        if !(0.0..=1.0).contains(&p_up) {
            return Err(McError::InvalidParameter(format!(
                "spin-up probability must lie in [0, 1], got {p_up}"
            )));
        }
        let spins = (0..rows * cols)
            .map(|_| if rng.random::<f64>() < p_up { 1 } else { -1 })
            .collect();
        Ok(Self { rows, cols, spins })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.spins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    /// Spin at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.spins[row * self.cols + col]
    }

    /// Spin at `(row, col)` or `None` outside the grid.  Signed coordinates
    /// let window correlation reach past the edges.
    #[inline]
    pub fn get_padded(&self, row: isize, col: isize) -> Option<i8> {
        if row < 0 || col < 0 {
            return None;
        }
        let (r, c) = (row as usize, col as usize);
        (r < self.rows && c < self.cols).then(|| self.spins[r * self.cols + c])
    }

    #[inline]
    pub fn as_slice(&self) -> &[i8] {
        &self.spins
    }

    #[inline]
    pub(crate) fn flip_index(&mut self, idx: usize) {
        self.spins[idx] = -self.spins[idx];
    }

    /// Number of +1 cells.
    pub fn count_up(&self) -> usize {
        self.spins.iter().filter(|&&s| s > 0).count()
    }

    /// Mean spin in `[-1, 1]`.
    pub fn magnetization(&self) -> f64 {
        let total: i64 = self.spins.iter().map(|&s| s as i64).sum();
        total as f64 / self.spins.len() as f64
    }
}

impl fmt::Display for SpinGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.spins.chunks(self.cols) {
            for &s in row {
                f.write_str(if s > 0 { "+" } else { "-" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn check_shape(rows: usize, cols: usize) -> McResult<()> {
    if rows == 0 || cols == 0 {
        return Err(McError::InvalidInput(format!(
            "spin grid must be non-empty, got {rows}x{cols}"
        )));
    }
    Ok(())
}

fn check_spin(s: i8) -> McResult<()> {
    if s == 1 || s == -1 {
        Ok(())
    } else {
        Err(McError::InvalidInput(format!("spins must be +1 or -1, got {s}")))
    }
}
